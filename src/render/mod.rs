//! Turning game state into draw calls, and draw calls into pixels.

mod surface;
mod tiles;

pub use surface::{
    letterbox_rect, FrameTarget, MacroquadSurface, RecordingSurface, Surface, SurfaceCall,
};
pub use tiles::{push_tile_commands, sprite_command, tile_commands, SPRITE_SIZE};
