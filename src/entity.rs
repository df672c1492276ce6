use crate::assets::ImageId;
use macroquad::prelude::{vec2, Vec2};

/// Position plus the image it is drawn with. Shared by every entity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// World position of the top-left corner
    pub pos: Vec2,
    /// Image drawn at `pos`
    pub image: ImageId,
}

impl Sprite {
    /// Sprite showing `image` at `(x, y)`.
    pub fn new(image: ImageId, x: f32, y: f32) -> Self {
        Sprite {
            pos: vec2(x, y),
            image,
        }
    }
}

/// The arrow-key controlled character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Position and image
    pub sprite: Sprite,
    /// Not read or written by any game logic yet.
    pub health: u32,
}

/// A skeleton. Only those with `follows_player` move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Position and image
    pub sprite: Sprite,
    /// Pursue the player every tick
    pub follows_player: bool,
}

/// A potion lying on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Potion {
    /// Position and image
    pub sprite: Sprite,
    /// Not consumed: there is no pickup logic.
    pub heal_amount: u32,
}

/// Per-axis step an enemy takes toward the player each tick.
pub const PURSUIT_SPEED: f32 = 0.5;

impl Enemy {
    /// Move one fixed step toward `target` on each axis independently.
    ///
    /// No normalisation: diagonal pursuit is faster, and a residual gap
    /// smaller than the step makes the enemy overshoot back and forth.
    pub fn pursue(&mut self, target: Vec2) {
        self.sprite.pos.x = step_toward(self.sprite.pos.x, target.x, PURSUIT_SPEED);
        self.sprite.pos.y = step_toward(self.sprite.pos.y, target.y, PURSUIT_SPEED);
    }
}

#[inline]
fn step_toward(from: f32, to: f32, step: f32) -> f32 {
    if from < to {
        from + step
    } else if from > to {
        from - step
    } else {
        from
    }
}
