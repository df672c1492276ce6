// src/loader/json_loader.rs
use crate::error::LoadError;
use crate::layer::{TileLayer, Tilemap};
use crate::tileset::Atlas;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default)]
    width: usize,
    #[serde(default)]
    height: usize,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "tilelayer" expected here
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
struct JsonMap {
    layers: Vec<JsonLayer>,
}

/// Read and decode a map file, validating every tile id against `atlas`.
pub fn load_tilemap(path: impl AsRef<Path>, atlas: &Atlas) -> Result<Tilemap, LoadError> {
    let p = path.as_ref();
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LoadError::UnsupportedFormat {
            path: p.to_path_buf(),
        });
    }

    let txt = std::fs::read_to_string(p).map_err(|source| LoadError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    parse_tilemap(&txt, p, atlas)
}

/// Decode map JSON already in memory. `origin` only feeds error messages.
pub fn parse_tilemap(txt: &str, origin: &Path, atlas: &Atlas) -> Result<Tilemap, LoadError> {
    let j: JsonMap = serde_json::from_str(txt).map_err(|source| LoadError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    let mut layers = Vec::with_capacity(j.layers.len());
    for l in j.layers {
        match l.kind.as_deref().unwrap_or("tilelayer") {
            "tilelayer" => {}
            other => {
                log::debug!("skipping {other} layer '{}' in {}", l.name, origin.display());
                continue;
            }
        }

        if let Some((index, &id)) = l.data.iter().enumerate().find(|&(_, &id)| id > atlas.max_id()) {
            return Err(LoadError::InvalidTileId {
                layer: l.name,
                index,
                id,
                max_id: atlas.max_id(),
            });
        }

        let len = l.data.len();
        let (width, height, visible) = (l.width, l.height, l.visible);
        let name = l.name.clone();
        let mut layer = TileLayer::new(l.name, width, height, l.data).ok_or_else(|| {
            LoadError::InvalidLayerSize {
                layer: name,
                len,
                width,
                height,
            }
        })?;
        layer.visible = visible;
        layers.push(layer);
    }

    if layers.is_empty() {
        return Err(LoadError::NoLayer {
            path: origin.to_path_buf(),
        });
    }

    log::info!("loaded {} tile layer(s) from {}", layers.len(), origin.display());
    Ok(Tilemap::new(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("tile_rpg_loader_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    fn parse(txt: &str) -> Result<Tilemap, LoadError> {
        parse_tilemap(txt, Path::new("inline.json"), &Atlas::new(16, 16, 22, 44))
    }

    #[test]
    fn parses_layers_in_document_order() {
        let map = parse(
            r#"{
              "layers": [
                {"name":"floor","width":2,"height":2,"data":[1,2,3,4]},
                {"name":"deco","width":2,"height":2,"data":[0,0,0,44],"visible":false}
              ]
            }"#,
        )
        .expect("parse");

        assert_eq!(map.layers().len(), 2);
        assert_eq!(map.layers()[0].name, "floor");
        assert_eq!(map.layers()[0].data(), &[1, 2, 3, 4]);
        assert!(map.layers()[0].visible);
        assert!(!map.layers()[1].visible);
    }

    #[test]
    fn ignores_extra_fields_and_object_layers() {
        let map = parse(
            r#"{
              "compressionlevel": -1,
              "layers": [
                {"name":"L","width":1,"height":1,"data":[0],"opacity":0.5,"type":"tilelayer"},
                {"name":"spawns","type":"objectgroup","objects":[]}
              ]
            }"#,
        )
        .expect("parse");
        assert_eq!(map.layers().len(), 1);
        assert_eq!(map.layers()[0].name, "L");
    }

    #[test]
    fn returns_typed_error_for_layer_size_mismatch() {
        let err = parse(r#"{"layers":[{"name":"oops","width":2,"height":2,"data":[1,2,3]}]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidLayerSize { ref layer, len: 3, width: 2, height: 2 } if layer == "oops"
        ));
    }

    #[test]
    fn returns_typed_error_for_tile_id_past_atlas() {
        let err = parse(r#"{"layers":[{"name":"ground","width":2,"height":1,"data":[1,45]}]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidTileId { index: 1, id: 45, max_id: 44, .. }
        ));
    }

    #[test]
    fn returns_typed_error_for_negative_id() {
        let err = parse(r#"{"layers":[{"name":"g","width":1,"height":1,"data":[-1]}]}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn returns_typed_error_when_no_tile_layer() {
        let err = parse(r#"{"layers":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::NoLayer { .. }));
    }

    #[test]
    fn returns_typed_error_for_malformed_json() {
        let dir = temp_dir();
        let map_path = dir.join("map.json");
        fs::write(&map_path, "{ not json").expect("failed to write map");

        let err = load_tilemap(&map_path, &Atlas::default())
            .err()
            .expect("expected decode error");
        assert!(matches!(err, LoadError::Json { ref path, .. } if *path == map_path));
    }

    #[test]
    fn returns_typed_error_for_missing_file() {
        let dir = temp_dir();
        let err = load_tilemap(dir.join("missing.json"), &Atlas::default())
            .err()
            .expect("expected io error");
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn rejects_non_json_extension() {
        let err = load_tilemap("level.tmx", &Atlas::default()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { ref path } if path.ends_with("level.tmx")));
    }
}
