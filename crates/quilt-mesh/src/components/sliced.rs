use crate::color::Rgba;
use crate::coords::{Border, Rect, Vec2};
use crate::hit::{self, AlphaSource};
use crate::mesh::{MeshBuffer, simple, sliced};
use crate::sprite::SpriteMetrics;

use super::{LayoutInfo, LayoutSource, MeshSource, RaycastFilter};

/// Nine-sliced image component.
///
/// Holds per-instance configuration only; sprite metrics and the draw rect
/// arrive with each call. A sprite without a border cannot be sliced — the
/// component logs a warning and renders the plain single-quad mesh instead
/// of producing nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedImage {
    /// Extra per-edge insets applied to the outer grid edges, local units.
    pub padding: Border,
    /// Emit the center cell of the 3×3 grid.
    pub fill_center: bool,
    /// Letterbox the rect to the sprite aspect ratio on the fallback path.
    pub preserve_aspect: bool,
    /// Pivot used to distribute letterbox space, normalized.
    pub pivot: Vec2,
    /// Alpha threshold for hit testing, `[0, 1]`. At `1.0` every point hits.
    pub event_alpha_threshold: f32,
    /// Uniform vertex tint.
    pub tint: Rgba,
}

impl Default for SlicedImage {
    fn default() -> Self {
        Self {
            padding: Border::ZERO,
            fill_center: false,
            preserve_aspect: false,
            pivot: Vec2::new(0.5, 0.5),
            event_alpha_threshold: 1.0,
            tint: Rgba::WHITE,
        }
    }
}

impl SlicedImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sprite's unscaled size in local units.
    pub fn native_size(&self, metrics: &SpriteMetrics) -> Vec2 {
        metrics.local_size()
    }
}

impl MeshSource for SlicedImage {
    fn populate_mesh(&self, metrics: &SpriteMetrics, rect: Rect, out: &mut MeshBuffer) {
        if !metrics.has_border() {
            log::warn!("sprite has no border to slice; rendering a single quad");
            simple::build(out, rect, metrics, self.pivot, self.preserve_aspect, self.tint);
            return;
        }
        sliced::build(out, rect, metrics, self.padding, self.fill_center, self.tint);
    }
}

impl LayoutSource for SlicedImage {
    fn layout_info(&self, metrics: &SpriteMetrics) -> LayoutInfo {
        // A sliced sprite can shrink until only its borders remain, so the
        // preferred size is the combined border extent.
        let ppu = metrics.pixels_per_unit;
        LayoutInfo {
            preferred: Vec2::new(
                metrics.border.horizontal() / ppu,
                metrics.border.vertical() / ppu,
            ),
            ..LayoutInfo::default()
        }
    }
}

impl RaycastFilter for SlicedImage {
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
        let mapped = hit::map_sliced(local, rect, metrics);
        hit::alpha_hit(mapped, metrics, self.event_alpha_threshold, texture)
    }
}
