//! Texture atlas lookups
//!
//! Converts pixel regions of the gamepad artwork into normalized texture
//! coordinates. The texture origin is bottom-left, so v decreases as the
//! region's pixel y increases.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::LayoutError;
use crate::geometry::{Rect, TexCoords};

/// Size of the gamepad texture plus its named sub-images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAtlas {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub regions: BTreeMap<String, Rect>,
}

impl TextureAtlas {
    /// An atlas without a positive size is treated as a texture that failed to load.
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        let atlas = Self { width, height, regions: BTreeMap::new() };
        atlas.check_size()?;
        Ok(atlas)
    }

    pub fn with_region(mut self, name: impl Into<String>, region: Rect) -> Self {
        self.regions.insert(name.into(), region);
        self
    }

    pub(crate) fn check_size(&self) -> Result<(), LayoutError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidAtlas { width: self.width, height: self.height })
        }
    }

    /// Normalized coordinates for a pixel region of this texture
    pub fn uvs(&self, region: &Rect) -> TexCoords {
        let u1 = region.x / self.width;
        let v1 = 1.0 - region.y / self.height;
        let u2 = u1 + region.width / self.width;
        let v2 = v1 - region.height / self.height;
        TexCoords { u1, v1, u2, v2 }
    }

    /// Look up a named region and convert it
    pub fn region_uvs(&self, name: &str) -> Result<TexCoords, LayoutError> {
        self.regions
            .get(name)
            .map(|r| self.uvs(r))
            .ok_or_else(|| LayoutError::UnknownRegion(name.to_string()))
    }

    pub fn has_region(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uvs_flip_v() {
        let atlas = TextureAtlas::new(256.0, 128.0).unwrap();
        let uv = atlas.uvs(&Rect::new(64.0, 32.0, 64.0, 32.0));
        assert_eq!(uv, TexCoords::new(0.25, 0.75, 0.5, 0.5));
    }

    #[test]
    fn test_full_texture() {
        let atlas = TextureAtlas::new(100.0, 100.0).unwrap();
        let uv = atlas.uvs(&Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(uv, TexCoords::new(0.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            TextureAtlas::new(0.0, 64.0),
            Err(LayoutError::InvalidAtlas { .. })
        ));
        assert!(TextureAtlas::new(64.0, f32::NAN).is_err());
    }

    #[test]
    fn test_named_lookup() {
        let atlas = TextureAtlas::new(64.0, 64.0)
            .unwrap()
            .with_region("knob", Rect::new(0.0, 0.0, 32.0, 32.0));
        assert_eq!(atlas.region_uvs("knob").unwrap(), TexCoords::new(0.0, 1.0, 0.5, 0.5));
        assert!(matches!(atlas.region_uvs("ring"), Err(LayoutError::UnknownRegion(n)) if n == "ring"));
    }
}
