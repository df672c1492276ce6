use std::io;
use std::path::PathBuf;

/// Error type for everything loaded at startup: the map, the config and the textures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File I/O error
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying cause
        source: io::Error,
    },
    /// JSON parse error
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        /// File (or in-memory origin) being parsed
        path: PathBuf,
        /// Underlying cause
        source: serde_json::Error,
    },
    /// Unsupported file format (non-JSON)
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },
    /// No tile layers were found in the map JSON
    #[error("no tile layers found in {}", .path.display())]
    NoLayer {
        /// Map file
        path: PathBuf,
    },
    /// A layer's data length does not match width * height
    #[error("invalid layer size for layer '{layer}': {len} tiles, expected {width}x{height}")]
    InvalidLayerSize {
        /// Layer name
        layer: String,
        /// Actual `data` length
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
    /// A tile id points past the end of the atlas
    #[error("tile id {id} at index {index} of layer '{layer}' exceeds atlas capacity {max_id}")]
    InvalidTileId {
        /// Layer name
        layer: String,
        /// Position in the layer's data array
        index: usize,
        /// Offending id
        id: u32,
        /// Highest id the atlas can serve
        max_id: u32,
    },
    /// The tileset image is narrower than the configured column count
    #[error("atlas {} is {image_columns} tiles wide, expected {columns} columns", .path.display())]
    InvalidAtlas {
        /// Tileset image
        path: PathBuf,
        /// Whole tiles that fit across the image
        image_columns: u32,
        /// Configured column count
        columns: u32,
    },
    /// A texture failed to load or decode
    #[error("failed to load texture {}: {message}", .path.display())]
    Texture {
        /// Image path
        path: PathBuf,
        /// Message from the image loader
        message: String,
    },
}
