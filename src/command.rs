use crate::assets::ImageId;
use macroquad::prelude::{Rect, Vec2};

/// One "draw region `src` of `image` at `dest`" call, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Map layer the tile came from; `None` for entity sprites
    pub layer_index: Option<usize>,
    /// Texture to cut from
    pub image: ImageId,
    /// Region of the texture
    pub src: Rect,
    /// Top-left corner on screen
    pub dest: Vec2,
}
