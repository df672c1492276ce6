use macroquad::prelude::Vec2;

/// Screen-space offset added to every world draw position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

impl Camera {
    /// Camera at a fixed offset.
    pub fn new(x: f32, y: f32) -> Self {
        Camera { x, y }
    }

    /// Offset as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Center the view on the target.
    pub fn follow_target(&mut self, target_x: f32, target_y: f32, screen_w: f32, screen_h: f32) {
        self.x = -target_x + screen_w / 2.0;
        self.y = -target_y + screen_h / 2.0;
    }

    /// Keep the view inside the map: offset in `[screen - map, 0]` per axis.
    ///
    /// Must run after [`Camera::follow_target`]. An axis on which the map is
    /// smaller than the screen is pinned to 0.
    pub fn constrain(&mut self, map_w: f32, map_h: f32, screen_w: f32, screen_h: f32) {
        self.x = clamp_axis(self.x, map_w, screen_w);
        self.y = clamp_axis(self.y, map_h, screen_h);
    }
}

// min then max: never panics when the bounds cross, unlike f32::clamp
#[inline]
fn clamp_axis(offset: f32, map: f32, screen: f32) -> f32 {
    let lower = (screen - map).min(0.0);
    offset.min(0.0).max(lower)
}
