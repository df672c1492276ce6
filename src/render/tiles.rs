use crate::assets::ImageId;
use crate::command::DrawCommand;
use crate::entity::Sprite;
use crate::layer::{grid_cell, Tilemap};
use crate::tileset::Atlas;
use macroquad::prelude::*;

/// Entity sprites are cut from the top-left 16x16 cell of their image.
pub const SPRITE_SIZE: f32 = 16.0;

/// Emit one command per non-empty tile: layer order, then index order.
///
/// `offset` is the camera offset added to every destination. Hidden layers
/// and ids the atlas cannot serve are skipped.
pub fn push_tile_commands(map: &Tilemap, atlas: &Atlas, offset: Vec2, out: &mut Vec<DrawCommand>) {
    let tw = atlas.tile_w as f32;
    let th = atlas.tile_h as f32;

    for (lz, layer) in map.layers().iter().enumerate() {
        if !layer.visible {
            continue;
        }

        for (idx, id) in layer.tiles() {
            let Some(src) = atlas.source_rect(id) else {
                continue;
            };
            let (col, row) = grid_cell(idx, layer.width);
            out.push(DrawCommand {
                layer_index: Some(lz),
                image: ImageId::Tileset,
                src,
                dest: vec2(col as f32 * tw, row as f32 * th) + offset,
            });
        }
    }
}

/// [`push_tile_commands`] into a fresh vector.
pub fn tile_commands(map: &Tilemap, atlas: &Atlas, offset: Vec2) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    push_tile_commands(map, atlas, offset, &mut out);
    out
}

/// Command drawing the top-left cell of the sprite's image at its position.
#[inline]
pub fn sprite_command(sprite: &Sprite, offset: Vec2) -> DrawCommand {
    DrawCommand {
        layer_index: None,
        image: sprite.image,
        src: Rect::new(0.0, 0.0, SPRITE_SIZE, SPRITE_SIZE),
        dest: sprite.pos + offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::TileLayer;

    fn map_4x4(ids: &[(usize, usize, u32)]) -> Tilemap {
        let mut layers = Vec::new();
        for lz in 0..2 {
            let mut data = vec![0; 16];
            for &(l, i, id) in ids {
                if l == lz {
                    data[i] = id;
                }
            }
            layers.push(TileLayer::new(format!("layer{lz}"), 4, 4, data).unwrap());
        }
        Tilemap::new(layers)
    }

    #[test]
    fn single_tile_lands_on_its_grid_cell() {
        let map = map_4x4(&[(0, 5, 23)]);
        let cmds = tile_commands(&map, &Atlas::default(), Vec2::ZERO);

        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].layer_index, Some(0));
        assert_eq!(cmds[0].dest, vec2(16.0, 16.0));
        assert_eq!(cmds[0].src, Rect::new(0.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn later_layers_come_after_earlier_ones() {
        let map = map_4x4(&[(1, 0, 2), (0, 15, 1), (0, 3, 1)]);
        let cmds = tile_commands(&map, &Atlas::default(), Vec2::ZERO);

        let order: Vec<_> = cmds.iter().map(|c| (c.layer_index, c.dest)).collect();
        assert_eq!(
            order,
            vec![
                (Some(0), vec2(48.0, 0.0)),
                (Some(0), vec2(48.0, 48.0)),
                (Some(1), vec2(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn camera_offset_shifts_destinations() {
        let map = map_4x4(&[(0, 0, 1)]);
        let cmds = tile_commands(&map, &Atlas::default(), vec2(-8.0, 4.0));
        assert_eq!(cmds[0].dest, vec2(-8.0, 4.0));
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let mut map = map_4x4(&[(0, 0, 1), (1, 1, 1)]);
        map.layers[1].visible = false;
        let cmds = tile_commands(&map, &Atlas::default(), Vec2::ZERO);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].layer_index, Some(0));
    }

    #[test]
    fn sprite_uses_top_left_cell() {
        let sprite = Sprite::new(ImageId::Potion, 100.0, 70.0);
        let cmd = sprite_command(&sprite, vec2(20.0, 30.0));
        assert_eq!(cmd.layer_index, None);
        assert_eq!(cmd.image, ImageId::Potion);
        assert_eq!(cmd.src, Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(cmd.dest, vec2(120.0, 100.0));
    }
}
