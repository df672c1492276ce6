use anyhow::Context;
use macroquad::prelude::*;
use std::path::PathBuf;
use tile_rpg::config::DEFAULT_CONFIG_PATH;
use tile_rpg::render::{FrameTarget, MacroquadSurface};
use tile_rpg::{load_tilemap, Assets, Directions, Game, GameConfig};

/// First CLI argument, else `tile_rpg.json` in the working directory.
fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

// Runs before the logger exists; a bad config is reported again by `run`.
fn window_conf() -> Conf {
    let cfg = GameConfig::load(config_path()).unwrap_or_default();
    let (window_width, window_height) = cfg.window.physical_size();
    Conf {
        window_title: cfg.window.title.clone(),
        window_width,
        window_height,
        window_resizable: cfg.window.resizable,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let path = config_path();
    let config = GameConfig::load(&path)
        .with_context(|| format!("Loading config {}", path.display()))?;

    let assets = Assets::load(&config.assets)
        .await
        .context("Loading textures")?;
    let atlas = assets
        .atlas(&config.atlas)
        .context("Checking tileset against atlas config")?;

    let tilemap = load_tilemap(&config.assets.map, &atlas)
        .with_context(|| format!("Loading map {}", config.assets.map.display()))?;

    let mut game = Game::new(config, tilemap, atlas);
    let (w, h) = game.layout();
    let frame = FrameTarget::new(w, h);
    log::info!("starting at {w}x{h}");

    // Handle the close button ourselves so shutdown runs inside the loop
    prevent_quit();

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            game.shutdown();
            break;
        }

        game.update(Directions::poll());

        let mut surface = MacroquadSurface::begin(&assets, &frame);
        game.draw(&mut surface);
        frame.present();

        if game.config().show_fps {
            draw_text(
                &format!("FPS: {}", get_fps()),
                screen_width() - 135.0,
                30.0,
                30.0,
                RED,
            );
        }

        next_frame().await;
    }

    Ok(())
}
