use crate::color::Rgba;
use crate::coords::{Rect, Vec2};
use crate::hit::{self, AlphaSource};
use crate::mesh::{MeshBuffer, tiled};
use crate::sprite::SpriteMetrics;

use super::{LayoutInfo, LayoutSource, MeshSource, RaycastFilter};

/// Left/right symmetric tiled image component.
///
/// Renders one tile plus its horizontal mirror rather than repeating across
/// the rect; see [`mesh::tiled`](crate::mesh::tiled) for the geometry. Its
/// native size is therefore twice the sprite width.
#[derive(Debug, Clone, PartialEq)]
pub struct TiledImage {
    /// Alpha threshold for hit testing, `[0, 1]`. At `1.0` every point hits.
    pub event_alpha_threshold: f32,
    /// Uniform vertex tint.
    pub tint: Rgba,
}

impl Default for TiledImage {
    fn default() -> Self {
        Self {
            event_alpha_threshold: 1.0,
            tint: Rgba::WHITE,
        }
    }
}

impl TiledImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unscaled size of the mirrored pair: double the sprite width, the
    /// sprite height.
    pub fn native_size(&self, metrics: &SpriteMetrics) -> Vec2 {
        let s = metrics.local_size();
        Vec2::new(s.x * 2.0, s.y)
    }
}

impl MeshSource for TiledImage {
    fn populate_mesh(&self, metrics: &SpriteMetrics, rect: Rect, out: &mut MeshBuffer) {
        tiled::build(out, rect, metrics, self.tint);
    }
}

impl LayoutSource for TiledImage {
    fn layout_info(&self, metrics: &SpriteMetrics) -> LayoutInfo {
        LayoutInfo {
            preferred: metrics.local_size(),
            ..LayoutInfo::default()
        }
    }
}

impl RaycastFilter for TiledImage {
    fn is_location_valid(
        &self,
        local: Vec2,
        rect: Rect,
        metrics: &SpriteMetrics,
        texture: &dyn AlphaSource,
    ) -> bool {
        if self.event_alpha_threshold >= 1.0 {
            return true;
        }
        let mapped = hit::map_tiled(local, rect, metrics);
        hit::alpha_hit(mapped, metrics, self.event_alpha_threshold, texture)
    }
}
