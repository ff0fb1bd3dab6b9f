//! Asset manifest
//!
//! Ship sprite paths and sizes come from a JSON manifest so the art can
//! be swapped without a rebuild. A missing or malformed manifest falls
//! back to the built-in defaults with a warning instead of aborting.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SpriteEntry {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Sprite manifest for both ships, loaded from
/// `assets/config/ships.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipManifest {
    pub yellow: SpriteEntry,
    pub red: SpriteEntry,
}

impl ShipManifest {
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path, e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse {}: {}", path, e))
    }

    /// Loads the manifest, falling back to the defaults if the file is
    /// missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(manifest) => manifest,
            Err(e) => {
                eprintln!("Warning: {} - using built-in sprite defaults", e);
                Self::default()
            }
        }
    }
}

impl Default for ShipManifest {
    fn default() -> Self {
        ShipManifest {
            yellow: SpriteEntry {
                path: "assets/sprites/spaceship_yellow.png".to_string(),
                width: 55,
                height: 40,
            },
            red: SpriteEntry {
                path: "assets/sprites/spaceship_red.png".to_string(),
                width: 55,
                height: 40,
            },
        }
    }
}

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parses_from_json() {
        let json = r#"{
            "yellow": { "path": "a.png", "width": 55, "height": 40 },
            "red": { "path": "b.png", "width": 55, "height": 40 }
        }"#;
        let manifest: ShipManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.yellow.path, "a.png");
        assert_eq!(manifest.red.width, 55);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let manifest = ShipManifest::load_or_default("no/such/manifest.json");
        assert_eq!(manifest.yellow.width, 55);
        assert_eq!(manifest.red.height, 40);
    }
}
