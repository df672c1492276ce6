use macroquad::prelude::{is_key_down, KeyCode, Vec2};

/// Arrow-key state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    /// Up arrow held
    pub up: bool,
    /// Down arrow held
    pub down: bool,
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

impl Directions {
    /// No key held.
    pub const NONE: Directions = Directions {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Read the arrow keys from macroquad. Needs a running window.
    pub fn poll() -> Self {
        Directions {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
        }
    }

    /// Sum of one unit per held direction, y pointing down.
    ///
    /// Opposite keys cancel; diagonals are not normalised.
    pub fn displacement(self) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.right {
            d.x += 1.0;
        }
        if self.left {
            d.x -= 1.0;
        }
        if self.up {
            d.y -= 1.0;
        }
        if self.down {
            d.y += 1.0;
        }
        d
    }
}
