use crate::assets::{Assets, ImageId};
use crate::command::DrawCommand;
use macroquad::prelude::*;

/// Where a frame ends up. The game only ever fills and blits regions.
pub trait Surface {
    /// Clear the whole frame to `color`.
    fn fill(&mut self, color: Color);

    /// Draw the `src` region of `image` with its top-left corner at `dest`.
    fn draw_region(&mut self, image: ImageId, src: Rect, dest: Vec2);

    /// Execute one prepared command.
    fn submit(&mut self, cmd: &DrawCommand) {
        self.draw_region(cmd.image, cmd.src, cmd.dest);
    }
}

/// Off-screen canvas at the logical resolution.
///
/// Everything drawn through a [`MacroquadSurface`] lands here, so anything
/// outside `0..width` x `0..height` is clipped before the frame is scaled
/// into the window.
pub struct FrameTarget {
    target: RenderTarget,
    camera: Camera2D,
    size: Vec2,
}

impl FrameTarget {
    /// Allocate a `width` x `height` render target. Needs a running window.
    pub fn new(width: u32, height: u32) -> Self {
        let target = render_target(width.max(1), height.max(1));
        target.texture.set_filter(FilterMode::Nearest);
        let size = vec2(width as f32, height as f32);
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, size.x, size.y));
        camera.render_target = Some(target.clone());
        FrameTarget {
            target,
            camera,
            size,
        }
    }

    /// Scale the finished frame into the window, centered, with black bars.
    pub fn present(&self) {
        set_default_camera();
        clear_background(BLACK);
        let r = letterbox_rect(vec2(screen_width(), screen_height()), self.size);
        draw_texture_ex(
            &self.target.texture,
            r.x,
            r.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(r.size()),
                // render targets come out upside down
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

/// Draws into a [`FrameTarget`] in logical pixels.
///
/// Only constructible from loaded [`Assets`], so every [`ImageId`] resolves.
pub struct MacroquadSurface<'a> {
    assets: &'a Assets,
}

impl<'a> MacroquadSurface<'a> {
    /// Start a frame: subsequent draws go to `frame` until [`FrameTarget::present`].
    pub fn begin(assets: &'a Assets, frame: &FrameTarget) -> Self {
        set_camera(&frame.camera);
        MacroquadSurface { assets }
    }
}

impl Surface for MacroquadSurface<'_> {
    fn fill(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_region(&mut self, image: ImageId, src: Rect, dest: Vec2) {
        draw_texture_ex(
            self.assets.texture(image),
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                source: Some(src),
                dest_size: Some(src.size()),
                ..Default::default()
            },
        );
    }
}

/// Window rectangle the `logical` frame occupies when fitted into `window`
/// with a uniform scale and centered.
pub fn letterbox_rect(window: Vec2, logical: Vec2) -> Rect {
    if logical.x <= 0.0 || logical.y <= 0.0 {
        return Rect::new(0.0, 0.0, 0.0, 0.0);
    }
    let scale = (window.x / logical.x).min(window.y / logical.y);
    let size = logical * scale;
    let origin = (window - size) / 2.0;
    Rect::new(origin.x, origin.y, size.x, size.y)
}

/// Everything a surface was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    /// [`Surface::fill`]
    Fill(Color),
    /// [`Surface::draw_region`]
    Draw {
        /// Source image
        image: ImageId,
        /// Region of the image
        src: Rect,
        /// Top-left corner in logical pixels
        dest: Vec2,
    },
}

/// Surface that only records calls; used by tests and headless checks.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Calls in the order they were made
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded draws, skipping fills.
    pub fn draws(&self) -> impl Iterator<Item = (ImageId, Rect, Vec2)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            SurfaceCall::Draw { image, src, dest } => Some((image, src, dest)),
            SurfaceCall::Fill(_) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, color: Color) {
        self.calls.push(SurfaceCall::Fill(color));
    }

    fn draw_region(&mut self, image: ImageId, src: Rect, dest: Vec2) {
        self.calls.push(SurfaceCall::Draw { image, src, dest });
    }
}
