use crate::error::LoadError;
use macroquad::prelude::Rect;
use std::path::Path;

/// Fixed-grid tile atlas: one image, tiles laid out row-major in `columns` columns.
///
/// Tile ids are 1-based; id 0 is the empty cell and never maps to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atlas {
    /// Width of one tile in pixels
    pub tile_w: u32,
    /// Height of one tile in pixels
    pub tile_h: u32,
    /// Tiles per atlas row
    pub columns: u32,
    /// Number of tiles the image holds, i.e. the highest valid id
    pub tilecount: u32,
}

impl Atlas {
    /// Atlas dimensions used by the shipped tileset (16x16 tiles, 22 columns).
    pub const DEFAULT_TILE_SIZE: u32 = 16;
    /// Column count of the shipped tileset image.
    pub const DEFAULT_COLUMNS: u32 = 22;

    /// Atlas with explicit geometry; no image is consulted.
    pub fn new(tile_w: u32, tile_h: u32, columns: u32, tilecount: u32) -> Self {
        Atlas {
            tile_w,
            tile_h,
            columns,
            tilecount,
        }
    }

    /// Atlas for a decoded `width` x `height` image at `path`.
    ///
    /// The configured `columns` is kept as is; an image too narrow to hold
    /// that many tiles is rejected. Partial rows at the bottom are not
    /// addressable.
    pub fn from_texture_size(
        path: &Path,
        width: u32,
        height: u32,
        tile_w: u32,
        tile_h: u32,
        columns: u32,
    ) -> Result<Self, LoadError> {
        let image_columns = width.checked_div(tile_w).unwrap_or(0);
        if columns == 0 || image_columns < columns {
            return Err(LoadError::InvalidAtlas {
                path: path.to_path_buf(),
                image_columns,
                columns,
            });
        }
        let rows = height.checked_div(tile_h).unwrap_or(0);
        Ok(Atlas::new(tile_w, tile_h, columns, columns.saturating_mul(rows)))
    }

    /// Highest tile id the atlas can serve.
    #[inline]
    pub fn max_id(&self) -> u32 {
        self.tilecount
    }

    /// True for ids that map to a tile (non-zero and in range).
    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        id != 0 && id <= self.tilecount
    }

    /// Source rectangle of `id` inside the atlas image.
    ///
    /// Returns `None` for the empty id and for ids the atlas cannot serve.
    pub fn source_rect(&self, id: u32) -> Option<Rect> {
        if !self.contains(id) || self.columns == 0 {
            return None;
        }
        let t = id - 1;
        let sx = (t % self.columns) * self.tile_w;
        let sy = (t / self.columns) * self.tile_h;
        Some(Rect::new(
            sx as f32,
            sy as f32,
            self.tile_w as f32,
            self.tile_h as f32,
        ))
    }
}

impl Default for Atlas {
    /// 16x16 tiles, 22 columns, unbounded rows.
    fn default() -> Self {
        Atlas::new(
            Self::DEFAULT_TILE_SIZE,
            Self::DEFAULT_TILE_SIZE,
            Self::DEFAULT_COLUMNS,
            u32::MAX,
        )
    }
}
