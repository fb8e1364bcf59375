use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{SpriteComponent, AtlasId};

/// Source of pre-rendered textures, looked up by key.
///
/// `None` means "no image for this key": callers draw a parametric fallback
/// instead, so every key must be drawable both ways.
pub trait TextureProvider {
    fn texture(&self, key: &str) -> Option<&SpriteComponent>;
}

/// Provider with no textures at all; every lookup falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextures;

impl TextureProvider for NoTextures {
    fn texture(&self, _key: &str) -> Option<&SpriteComponent> {
        None
    }
}

/// Registry of named sprites, built from an AssetManifest.
/// Provides convenient name-based sprite lookup for game code.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            if desc.atlas as usize >= manifest.atlases.len() {
                log::warn!("sprite '{name}' references missing atlas {}", desc.atlas);
                continue;
            }
            sprites.insert(name.clone(), SpriteComponent {
                atlas: AtlasId(desc.atlas),
                col: desc.col as f32,
                row: desc.row as f32,
                cell_span: desc.span as f32,
                alpha: 1.0,
            });
        }
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl TextureProvider for SpriteRegistry {
    fn texture(&self, key: &str) -> Option<&SpriteComponent> {
        self.get(key)
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "planets", "cols": 4, "rows": 4, "path": "planets.png" }
            ],
            "sprites": {
                "jupiter": { "atlas": 0, "col": 3, "row": 1, "span": 2 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);

        let jupiter = reg.texture("jupiter").expect("jupiter should exist");
        assert_eq!(jupiter.atlas, AtlasId(0));
        assert_eq!(jupiter.col, 3.0);
        assert_eq!(jupiter.row, 1.0);
        assert_eq!(jupiter.cell_span, 2.0);
        assert_eq!(jupiter.alpha, 1.0);
    }

    #[test]
    fn dangling_atlas_reference_is_skipped() {
        let json = r#"{
            "atlases": [],
            "sprites": { "mars": { "atlas": 2, "col": 0, "row": 0 } }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);
        assert!(reg.is_empty());
    }

    #[test]
    fn unknown_returns_none() {
        let reg = SpriteRegistry::new();
        assert!(reg.get("nonexistent").is_none());
        assert!(NoTextures.texture("earth").is_none());
    }
}
