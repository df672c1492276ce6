use crate::config::{AssetPaths, AtlasConfig};
use crate::error::LoadError;
use crate::tileset::Atlas;
use macroquad::prelude::*;
use std::path::{Path, PathBuf};

/// Handle to one of the shared textures. Many entities may point at the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    /// Player sprite
    Player,
    /// Enemy sprite, shared by every enemy
    Enemy,
    /// Potion sprite
    Potion,
    /// Tile atlas the map is cut from
    Tileset,
}

/// Every texture the game draws with, loaded once before the first frame.
pub struct Assets {
    player: Texture2D,
    enemy: Texture2D,
    potion: Texture2D,
    tileset: Texture2D,
    tileset_path: PathBuf,
}

impl Assets {
    /// Load the four textures named in `paths`. Any failure is fatal to startup.
    pub async fn load(paths: &AssetPaths) -> Result<Self, LoadError> {
        let assets = Assets {
            player: load_nearest(&paths.player).await?,
            enemy: load_nearest(&paths.enemy).await?,
            potion: load_nearest(&paths.potion).await?,
            tileset: load_nearest(&paths.tileset).await?,
            tileset_path: paths.tileset.clone(),
        };
        log::info!("loaded 4 textures, atlas {}", paths.tileset.display());
        Ok(assets)
    }

    /// Texture behind `id`; every id resolves.
    #[inline]
    pub fn texture(&self, id: ImageId) -> &Texture2D {
        match id {
            ImageId::Player => &self.player,
            ImageId::Enemy => &self.enemy,
            ImageId::Potion => &self.potion,
            ImageId::Tileset => &self.tileset,
        }
    }

    /// Atlas geometry of the loaded tileset image, checked against `cfg`.
    pub fn atlas(&self, cfg: &AtlasConfig) -> Result<Atlas, LoadError> {
        Atlas::from_texture_size(
            &self.tileset_path,
            self.tileset.width() as u32,
            self.tileset.height() as u32,
            cfg.tile_width,
            cfg.tile_height,
            cfg.columns,
        )
    }
}

async fn load_nearest(path: &Path) -> Result<Texture2D, LoadError> {
    let path_str = path.to_str().ok_or_else(|| LoadError::Texture {
        path: path.to_path_buf(),
        message: "path is not valid UTF-8".to_owned(),
    })?;
    let tex = load_texture(path_str)
        .await
        .map_err(|e| LoadError::Texture {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tex.set_filter(FilterMode::Nearest);
    Ok(tex)
}
