//! Game configuration.
//!
//! Every field has a default matching the shipped assets, so a missing
//! config file is fine and a partial one only overrides what it names.

use crate::error::LoadError;
use crate::tileset::Atlas;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "tile_rpg.json";

/// Everything the game reads at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window and logical resolution
    pub window: WindowConfig,
    /// Background fill, RGBA
    pub background: [u8; 4],
    /// Image and map files
    pub assets: AssetPaths,
    /// Tileset grid
    pub atlas: AtlasConfig,
    /// Camera behaviour
    pub camera: CameraConfig,
    /// Draw the frame rate in the corner
    pub show_fps: bool,
    /// Initial entity placement
    pub spawns: Spawns,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            background: [120, 180, 255, 255],
            assets: AssetPaths::default(),
            atlas: AtlasConfig::default(),
            camera: CameraConfig::default(),
            show_fps: false,
            spawns: Spawns::default(),
        }
    }
}

impl GameConfig {
    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let p = path.as_ref();
        let txt = match std::fs::read_to_string(p) {
            Ok(txt) => txt,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("no config at {}, using defaults", p.display());
                return Ok(GameConfig::default());
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: p.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&txt, p)
    }

    /// Parse a config document; `origin` is only used in errors.
    pub fn from_json(txt: &str, origin: &Path) -> Result<Self, LoadError> {
        serde_json::from_str(txt).map_err(|source| LoadError::Json {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Logical screen size in pixels.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.window.width, self.window.height)
    }
}

/// Logical resolution and the OS window built around it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Logical width in pixels
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    /// Initial window size is `width * scale` by `height * scale`
    pub scale: u32,
    /// Let the user resize the window; the frame stays letterboxed
    pub resizable: bool,
}

impl WindowConfig {
    /// Initial window size in physical pixels, saturating at `i32::MAX`.
    ///
    /// A scale of 0 is treated as 1.
    pub fn physical_size(&self) -> (i32, i32) {
        let scale = self.scale.max(1);
        let side = |logical: u32| i32::try_from(logical.saturating_mul(scale)).unwrap_or(i32::MAX);
        (side(self.width), side(self.height))
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Tile RPG".to_owned(),
            width: 240,
            height: 160,
            scale: 3,
            resizable: true,
        }
    }
}

/// File locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Player sprite
    pub player: PathBuf,
    /// Enemy sprite
    pub enemy: PathBuf,
    /// Potion sprite
    pub potion: PathBuf,
    /// Tile atlas image
    pub tileset: PathBuf,
    /// Tilemap JSON
    pub map: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            player: "assets/images/player.png".into(),
            enemy: "assets/images/skeleton.png".into(),
            potion: "assets/images/potion.png".into(),
            tileset: "assets/images/tileset.png".into(),
            map: "assets/maps/main.json".into(),
        }
    }
}

/// Grid of the tileset image. The image must be at least `columns` tiles wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Tiles per atlas row
    pub columns: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            tile_width: Atlas::DEFAULT_TILE_SIZE,
            tile_height: Atlas::DEFAULT_TILE_SIZE,
            columns: Atlas::DEFAULT_COLUMNS,
        }
    }
}

/// Camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Follow the player; when off the map is drawn at a fixed origin
    pub follow: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig { follow: true }
    }
}

/// Where the player starts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlayerSpawn {
    /// World x in pixels
    pub x: f32,
    /// World y in pixels
    pub y: f32,
    /// Starting health
    #[serde(default = "default_health")]
    pub health: u32,
}

fn default_health() -> u32 {
    3
}

/// One enemy.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EnemySpawn {
    /// World x in pixels
    pub x: f32,
    /// World y in pixels
    pub y: f32,
    /// Chase the player every tick
    #[serde(default)]
    pub follows_player: bool,
}

/// One potion.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PotionSpawn {
    /// World x in pixels
    pub x: f32,
    /// World y in pixels
    pub y: f32,
    /// Health restored on pickup
    #[serde(default)]
    pub heal_amount: u32,
}

/// Initial entity placement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Spawns {
    /// The single player
    pub player: PlayerSpawn,
    /// Enemies, in update order
    pub enemies: Vec<EnemySpawn>,
    /// Potions
    pub potions: Vec<PotionSpawn>,
}

impl Default for Spawns {
    fn default() -> Self {
        Spawns {
            player: PlayerSpawn {
                x: 100.0,
                y: 100.0,
                health: 3,
            },
            enemies: vec![
                EnemySpawn {
                    x: 50.0,
                    y: 50.0,
                    follows_player: true,
                },
                EnemySpawn {
                    x: 100.0,
                    y: 100.0,
                    follows_player: false,
                },
            ],
            potions: vec![PotionSpawn {
                x: 100.0,
                y: 70.0,
                heal_amount: 10,
            }],
        }
    }
}
