//! Symmetric tiled-pair quad generation.
//!
//! This builder intentionally does not tile across the full rect. It emits
//! one tile plus its horizontal mirror, producing a left/right symmetric
//! pair around `x = 0` when the rect is pivot-centered. The output is always
//! exactly 2 quads (8 vertices, 12 indices) regardless of rect size.

use crate::color::Rgba;
use crate::coords::{Rect, Vec2};
use crate::mesh::MeshBuffer;
use crate::sprite::SpriteMetrics;

/// Builds the mirrored tile pair for `rect` into `out`.
///
/// The tile size is the sprite's inner region (size minus borders) in local
/// units. A sprite whose border swallows an axis cannot tile on it; the
/// rect's own inner extent is substituted so the geometry never collapses to
/// zero size. Both quads sample `inner_uv` directly.
pub fn build(out: &mut MeshBuffer, rect: Rect, metrics: &SpriteMetrics, tint: Rgba) {
    let ppu = metrics.pixels_per_unit;
    let mut tile_w = (metrics.size.x - metrics.border.horizontal()) / ppu;
    let mut tile_h = (metrics.size.y - metrics.border.vertical()) / ppu;

    let fitted = (metrics.border / ppu).fit_to_size(rect.size);

    // Cannot tile on a zero or negative extent; fall back to the rect's
    // inner region on that axis.
    if tile_w <= 0.0 {
        tile_w = (rect.size.x - fitted.horizontal()).max(0.0);
    }
    if tile_h <= 0.0 {
        tile_h = (rect.size.y - fitted.vertical()).max(0.0);
    }

    let uv_min = metrics.inner_uv.min;
    let uv_max = metrics.inner_uv.max;

    let pos_min = rect.origin;
    let pos_max = rect.origin + Vec2::new(tile_w, tile_h);

    out.clear();
    out.push_quad(pos_min, pos_max, tint, uv_min, uv_max);
    out.push_quad_mirrored_x(pos_min, pos_max, tint, uv_min, uv_max);
}
