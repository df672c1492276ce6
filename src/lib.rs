//! Tile-based RPG prototype for Macroquad: a JSON tilemap backdrop, an
//! arrow-key player, enemies that chase it and a camera that follows.

#![warn(missing_docs)]

mod assets;
mod camera;
mod command;
pub mod config;
mod entity;
mod error;
mod game;
mod input;
mod layer;
mod loader {
    pub mod json_loader;
}
pub mod render;
mod tileset;

pub use assets::{Assets, ImageId};
pub use camera::Camera;
pub use command::DrawCommand;
pub use config::GameConfig;
pub use entity::{Enemy, Player, Potion, Sprite, PURSUIT_SPEED};
pub use error::LoadError;
pub use game::Game;
pub use input::Directions;
pub use layer::{grid_cell, grid_index, TileLayer, Tilemap};
pub use loader::json_loader::{load_tilemap, parse_tilemap};
pub use tileset::Atlas;
