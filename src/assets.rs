//! Asset catalog
//!
//! Named images and sprite sheets that must exist before the world is built.
//! The simulation only needs their pixel sizes; the renderer picks colors by name.

use glam::Vec2;
use thiserror::Error;

/// Background image
pub const SKY: &str = "sky";
/// Platform image (400x32, the ground uses it at scale 2)
pub const GROUND: &str = "ground";
/// Collectible star image
pub const STAR: &str = "star";
/// Bomb image
pub const BOMB: &str = "bomb";
/// Player sprite sheet (9 frames of 32x48)
pub const DUDE: &str = "dude";

/// Asset lookup failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset `{0}` is not loaded")]
    Missing(String),
}

/// How an asset is sliced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    SpriteSheet {
        frame_width: u32,
        frame_height: u32,
        frames: u32,
    },
}

/// A single named resource
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub kind: AssetKind,
}

impl Asset {
    pub fn image(name: &str, path: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            width,
            height,
            kind: AssetKind::Image,
        }
    }

    pub fn sprite_sheet(
        name: &str,
        path: &str,
        frame_width: u32,
        frame_height: u32,
        frames: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            width: frame_width * frames,
            height: frame_height,
            kind: AssetKind::SpriteSheet {
                frame_width,
                frame_height,
                frames,
            },
        }
    }

    /// Size of one displayed frame (the whole image for plain images)
    pub fn frame_size(&self) -> Vec2 {
        match self.kind {
            AssetKind::Image => Vec2::new(self.width as f32, self.height as f32),
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
                ..
            } => Vec2::new(frame_width as f32, frame_height as f32),
        }
    }

    /// Number of frames (1 for plain images)
    pub fn frame_count(&self) -> u32 {
        match self.kind {
            AssetKind::Image => 1,
            AssetKind::SpriteSheet { frames, .. } => frames,
        }
    }
}

/// Catalog of loaded assets, keyed by name
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// The five assets the level uses
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Asset::image(SKY, "assets/sky.png", 800, 600));
        catalog.insert(Asset::image(GROUND, "assets/platform.png", 400, 32));
        catalog.insert(Asset::image(STAR, "assets/star.png", 24, 22));
        catalog.insert(Asset::image(BOMB, "assets/bomb.png", 14, 14));
        catalog.insert(Asset::sprite_sheet(DUDE, "assets/dude.png", 32, 48, 9));
        catalog
    }

    /// Register an asset, replacing any previous one with the same name
    pub fn insert(&mut self, asset: Asset) {
        if let Some(existing) = self.assets.iter_mut().find(|a| a.name == asset.name) {
            *existing = asset;
        } else {
            self.assets.push(asset);
        }
    }

    pub fn get(&self, name: &str) -> Result<&Asset, AssetError> {
        self.assets
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.iter().any(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_level_assets() {
        let catalog = AssetCatalog::builtin();
        for name in [SKY, GROUND, STAR, BOMB, DUDE] {
            assert!(catalog.contains(name), "missing {name}");
        }
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_sprite_sheet_frame_size() {
        let catalog = AssetCatalog::builtin();
        let dude = catalog.get(DUDE).unwrap();
        assert_eq!(dude.frame_size(), Vec2::new(32.0, 48.0));
        assert_eq!(dude.frame_count(), 9);
        assert_eq!(dude.width, 288);
    }

    #[test]
    fn test_missing_asset() {
        let catalog = AssetCatalog::new();
        assert_eq!(
            catalog.get(STAR).unwrap_err(),
            AssetError::Missing("star".to_string())
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = AssetCatalog::new();
        catalog.insert(Asset::image(STAR, "a.png", 10, 10));
        catalog.insert(Asset::image(STAR, "b.png", 20, 20));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(STAR).unwrap().path, "b.png");
    }
}
