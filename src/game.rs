use crate::assets::ImageId;
use crate::camera::Camera;
use crate::command::DrawCommand;
use crate::config::GameConfig;
use crate::entity::{Enemy, Player, Potion, Sprite};
use crate::input::Directions;
use crate::layer::Tilemap;
use crate::render::{push_tile_commands, sprite_command, Surface};
use crate::tileset::Atlas;
use macroquad::prelude::{Color, Vec2};

/// The running session: map, entities and camera. Owns all mutable game state.
pub struct Game {
    config: GameConfig,
    tilemap: Tilemap,
    atlas: Atlas,
    camera: Camera,
    /// The arrow-key controlled sprite
    pub player: Player,
    /// Enemies in update order
    pub enemies: Vec<Enemy>,
    /// Potions; drawn, never picked up
    pub potions: Vec<Potion>,
}

impl Game {
    /// Build a session with entities placed at the configured spawns.
    pub fn new(config: GameConfig, tilemap: Tilemap, atlas: Atlas) -> Self {
        let spawns = &config.spawns;
        let player = Player {
            sprite: Sprite::new(ImageId::Player, spawns.player.x, spawns.player.y),
            health: spawns.player.health,
        };
        let enemies = spawns
            .enemies
            .iter()
            .map(|e| Enemy {
                sprite: Sprite::new(ImageId::Enemy, e.x, e.y),
                follows_player: e.follows_player,
            })
            .collect();
        let potions = spawns
            .potions
            .iter()
            .map(|p| Potion {
                sprite: Sprite::new(ImageId::Potion, p.x, p.y),
                heal_amount: p.heal_amount,
            })
            .collect();

        let mut game = Game {
            config,
            tilemap,
            atlas,
            camera: Camera::default(),
            player,
            enemies,
            potions,
        };
        game.update_camera();
        game
    }

    /// One tick: move the player, step pursuing enemies, then refresh the camera.
    pub fn update(&mut self, input: Directions) {
        self.player.sprite.pos += input.displacement();

        let target = self.player.sprite.pos;
        for enemy in self.enemies.iter_mut().filter(|e| e.follows_player) {
            enemy.pursue(target);
        }

        self.update_camera();
    }

    fn update_camera(&mut self) {
        if !self.config.camera.follow {
            return;
        }
        let (sw, sh) = self.screen_size();
        let map = self.map_pixel_size();
        let target = self.player.sprite.pos;
        self.camera.follow_target(target.x, target.y, sw, sh);
        self.camera.constrain(map.x, map.y, sw, sh);
    }

    /// Commands for one frame: map layers first, then player, enemies, potions.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let offset = self.camera.offset();
        let mut out = Vec::new();
        push_tile_commands(&self.tilemap, &self.atlas, offset, &mut out);

        out.push(sprite_command(&self.player.sprite, offset));
        out.extend(self.enemies.iter().map(|e| sprite_command(&e.sprite, offset)));
        out.extend(self.potions.iter().map(|p| sprite_command(&p.sprite, offset)));
        out
    }

    /// Clear to the background colour, then submit [`Game::draw_commands`].
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill(self.background());
        for cmd in self.draw_commands() {
            surface.submit(&cmd);
        }
    }

    /// Logical screen size the host should render at.
    pub fn layout(&self) -> (u32, u32) {
        self.config.screen_size()
    }

    /// Configured background colour.
    pub fn background(&self) -> Color {
        let [r, g, b, a] = self.config.background;
        Color::from_rgba(r, g, b, a)
    }

    /// Current camera position.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The loaded map.
    pub fn tilemap(&self) -> &Tilemap {
        &self.tilemap
    }

    /// Config the session was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Called once by the host loop when the window is closing.
    pub fn shutdown(&self) {
        let pos = self.player.sprite.pos;
        log::info!("shutting down, player at ({}, {})", pos.x, pos.y);
    }

    fn screen_size(&self) -> (f32, f32) {
        let (w, h) = self.layout();
        (w as f32, h as f32)
    }

    fn map_pixel_size(&self) -> Vec2 {
        self.tilemap.pixel_size(self.atlas.tile_w, self.atlas.tile_h)
    }
}
