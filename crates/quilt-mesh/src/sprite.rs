//! Immutable per-sprite metrics.
//!
//! [`SpriteMetrics`] is the read-only contract with the asset pipeline: it
//! describes where a sprite lives in its texture (UVs and pixel rect), its
//! nine-slice border, and the pixels-per-unit scale. Mesh builders and the
//! hit-test mapper consume it and never mutate it.

use crate::coords::{Border, Rect, Vec2};

/// Normalized texture-coordinate rectangle, `[0, 1] × [0, 1]`, +V up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The whole texture.
    pub const FULL: UvRect = UvRect::new(Vec2::zero(), Vec2::new(1.0, 1.0));
}

/// Per-sprite data supplied by the asset collaborator.
///
/// All pixel measurements are in source-image pixels; [`pixels_per_unit`]
/// converts them into local drawing units.
///
/// [`pixels_per_unit`]: SpriteMetrics::pixels_per_unit
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteMetrics {
    /// UVs of the sprite's full pixel rect within its texture.
    pub outer_uv: UvRect,
    /// UVs of the rect inset by [`border`](SpriteMetrics::border).
    pub inner_uv: UvRect,
    /// Nine-slice border, source pixels.
    pub border: Border,
    /// Tight-mesh padding (transparent margin trimmed by the importer),
    /// source pixels. Zero for sprites imported with a full rect.
    pub padding: Border,
    /// Sprite rect size, source pixels.
    pub size: Vec2,
    /// Placement of the sprite rect within its texture, texture pixels.
    pub texture_rect: Rect,
    /// Scale factor from source pixels to local drawing units.
    pub pixels_per_unit: f32,
}

impl SpriteMetrics {
    /// Builds metrics for a sprite occupying `region` (texture pixels, lower-
    /// left origin) of a `texture_size` texture, deriving outer and inner UVs
    /// the way an asset importer would.
    pub fn from_texture_region(
        texture_size: Vec2,
        region: Rect,
        border: Border,
        pixels_per_unit: f32,
    ) -> Self {
        let tw = texture_size.x.max(1.0);
        let th = texture_size.y.max(1.0);

        let outer_uv = UvRect::new(
            Vec2::new(region.min().x / tw, region.min().y / th),
            Vec2::new(region.max().x / tw, region.max().y / th),
        );
        let inner_uv = UvRect::new(
            Vec2::new(
                (region.min().x + border.left) / tw,
                (region.min().y + border.bottom) / th,
            ),
            Vec2::new(
                (region.max().x - border.right) / tw,
                (region.max().y - border.top) / th,
            ),
        );

        Self {
            outer_uv,
            inner_uv,
            border,
            padding: Border::ZERO,
            size: region.size,
            texture_rect: region,
            pixels_per_unit,
        }
    }

    /// Metrics for a sprite covering an entire `width × height` texture.
    pub fn full_texture(width: u32, height: u32, border: Border, pixels_per_unit: f32) -> Self {
        let size = Vec2::new(width as f32, height as f32);
        Self::from_texture_region(
            size,
            Rect::from_origin_size(Vec2::zero(), size),
            border,
            pixels_per_unit,
        )
    }

    /// Whether the sprite has a border to slice with.
    #[inline]
    pub fn has_border(&self) -> bool {
        self.border.sqr_magnitude() > 0.0
    }

    /// Sprite size in local drawing units.
    #[inline]
    pub fn local_size(&self) -> Vec2 {
        self.size / self.pixels_per_unit
    }
}
