use macroquad::prelude::{vec2, Vec2};

/// One grid of tile ids, row-major. Id 0 is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    /// Layer name from the map file
    pub name: String,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Hidden layers load but are not drawn
    pub visible: bool,
    pub(crate) data: Vec<u32>,
}

impl TileLayer {
    /// Build a layer, checking `data.len() == width * height`.
    ///
    /// Returns `None` on a size mismatch.
    pub fn new(name: impl Into<String>, width: usize, height: usize, data: Vec<u32>) -> Option<Self> {
        if width.checked_mul(height)? != data.len() {
            return None;
        }
        Some(TileLayer {
            name: name.into(),
            width,
            height,
            visible: true,
            data,
        })
    }

    /// Raw ids, row-major.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Tile id at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<u32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(grid_index(col, row, self.width)).copied()
    }

    /// Iterate `(index, id)` over non-empty cells in linear order.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, id)| **id != 0)
            .map(|(i, id)| (i, *id))
    }
}

/// Ordered stack of layers; later layers paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tilemap {
    pub(crate) layers: Vec<TileLayer>,
}

impl Tilemap {
    /// Stack `layers` bottom to top.
    pub fn new(layers: Vec<TileLayer>) -> Self {
        Tilemap { layers }
    }

    /// Layers in draw order.
    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Layer lookup by name; the first match wins.
    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Size of the map in tiles: the largest layer on each axis.
    pub fn size_in_tiles(&self) -> (usize, usize) {
        self.layers.iter().fold((0, 0), |(w, h), l| {
            (w.max(l.width), h.max(l.height))
        })
    }

    /// Size of the map in pixels for the given tile size.
    pub fn pixel_size(&self, tile_w: u32, tile_h: u32) -> Vec2 {
        let (w, h) = self.size_in_tiles();
        vec2(w as f32 * tile_w as f32, h as f32 * tile_h as f32)
    }
}

/// Grid cell of a linear index in a row-major layer `width` cells wide.
#[inline]
pub fn grid_cell(index: usize, width: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// Inverse of [`grid_cell`].
#[inline]
pub fn grid_index(col: usize, row: usize, width: usize) -> usize {
    row * width + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_size_mismatch() {
        assert!(TileLayer::new("oops", 2, 2, vec![1, 2, 3]).is_none());
        assert!(TileLayer::new("ok", 2, 2, vec![1, 2, 3, 4]).is_some());
        assert!(TileLayer::new("empty", 0, 0, vec![]).is_some());
    }

    #[test]
    fn grid_cell_round_trips() {
        for width in 1..7 {
            for index in 0..50 {
                let (col, row) = grid_cell(index, width);
                assert!(col < width);
                assert_eq!(grid_index(col, row, width), index);
            }
        }
    }

    #[test]
    fn tiles_skips_empty_cells() {
        let layer = TileLayer::new("ground", 3, 1, vec![0, 7, 0]).unwrap();
        assert_eq!(layer.tiles().collect::<Vec<_>>(), vec![(1, 7)]);
        assert_eq!(layer.get(1, 0), Some(7));
        assert_eq!(layer.get(3, 0), None);
    }

    #[test]
    fn map_size_uses_largest_layer() {
        let map = Tilemap::new(vec![
            TileLayer::new("a", 4, 2, vec![0; 8]).unwrap(),
            TileLayer::new("b", 2, 3, vec![0; 6]).unwrap(),
        ]);
        assert_eq!(map.size_in_tiles(), (4, 3));
        assert_eq!(map.pixel_size(16, 16), vec2(64.0, 48.0));
        assert_eq!(map.layer("b").map(|l| l.height), Some(3));
    }
}
