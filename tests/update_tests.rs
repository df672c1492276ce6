// tests/update_tests.rs

use macroquad::prelude::vec2;
use std::path::Path;
use tile_rpg::config::{EnemySpawn, PlayerSpawn, Spawns};
use tile_rpg::{parse_tilemap, Atlas, Directions, Game, GameConfig};

fn game(spawns: Spawns) -> Game {
    let atlas = Atlas::default();
    // 30x20 tiles -> 480x320 pixels
    let data = vec!["1"; 600].join(",");
    let json = format!(r#"{{"layers":[{{"name":"floor","width":30,"height":20,"data":[{data}]}}]}}"#);
    let map = parse_tilemap(&json, Path::new("floor.json"), &atlas).expect("parse");
    let mut config = GameConfig::default();
    config.spawns = spawns;
    Game::new(config, map, atlas)
}

fn chase(px: f32, py: f32, ex: f32, ey: f32) -> Spawns {
    Spawns {
        player: PlayerSpawn { x: px, y: py, health: 3 },
        enemies: vec![EnemySpawn { x: ex, y: ey, follows_player: true }],
        potions: vec![],
    }
}

#[test]
fn diagonal_input_moves_both_axes_unnormalised() {
    let mut g = game(chase(100.0, 100.0, 0.0, 0.0));
    g.update(Directions { right: true, up: true, ..Directions::NONE });
    assert_eq!(g.player.sprite.pos, vec2(101.0, 99.0));
}

#[test]
fn enemy_closes_in_and_settles() {
    let mut g = game(chase(10.0, 0.0, 0.0, 0.0));
    g.update(Directions::NONE);
    assert_eq!(g.enemies[0].sprite.pos.x, 0.5);

    for _ in 0..100 {
        g.update(Directions::NONE);
    }
    assert_eq!(g.enemies[0].sprite.pos, vec2(10.0, 0.0));
}

#[test]
fn camera_offset_stays_within_map_bounds() {
    let mut g = game(chase(5.0, 5.0, 0.0, 0.0));
    let right_down = Directions { right: true, down: true, ..Directions::NONE };
    for _ in 0..600 {
        g.update(right_down);
        let off = g.camera().offset();
        assert!((-240.0..=0.0).contains(&off.x), "x offset {}", off.x);
        assert!((-160.0..=0.0).contains(&off.y), "y offset {}", off.y);
    }
    assert_eq!(g.camera().offset(), vec2(-240.0, -160.0));
}

#[test]
fn health_and_potions_are_untouched_by_updates() {
    let mut g = game(Spawns::default());
    for _ in 0..200 {
        g.update(Directions { left: true, ..Directions::NONE });
    }
    assert_eq!(g.player.health, 3);
    assert_eq!(g.potions.len(), 1);
    assert_eq!(g.potions[0].heal_amount, 10);
    assert_eq!(g.potions[0].sprite.pos, vec2(100.0, 70.0));
}
