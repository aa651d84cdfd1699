//! Single-quad generation and drawing-area math.
//!
//! The plain path for borderless sprites, and the fallback the nine-slice
//! component uses when a sprite has no border to slice with.

use crate::color::Rgba;
use crate::coords::{Rect, Vec2};
use crate::mesh::MeshBuffer;
use crate::sprite::SpriteMetrics;

/// Computes the area of `rect` the sprite actually draws into.
///
/// The sprite's tight-mesh padding (normalized against its pixel size) pulls
/// the edges inward. With `preserve_aspect`, the rect is first letterboxed to
/// the sprite's aspect ratio; the freed space is distributed around `pivot`
/// (`(0.5, 0.5)` centers the sprite).
pub fn drawing_rect(
    metrics: &SpriteMetrics,
    rect: Rect,
    pivot: Vec2,
    preserve_aspect: bool,
) -> Rect {
    let size = metrics.size;
    let mut r = rect;

    if preserve_aspect && size.sqr_magnitude() > 0.0 && !r.is_empty() {
        let sprite_ratio = size.x / size.y;
        let rect_ratio = r.size.x / r.size.y;

        if sprite_ratio > rect_ratio {
            let old_height = r.size.y;
            r.size.y = r.size.x / sprite_ratio;
            r.origin.y += (old_height - r.size.y) * pivot.y;
        } else {
            let old_width = r.size.x;
            r.size.x = r.size.y * sprite_ratio;
            r.origin.x += (old_width - r.size.x) * pivot.x;
        }
    }

    // Normalized padding: fraction of the sprite rect trimmed on each edge.
    let (nx0, ny0, nx1, ny1) = if size.x > 0.0 && size.y > 0.0 {
        (
            metrics.padding.left / size.x,
            metrics.padding.bottom / size.y,
            (size.x - metrics.padding.right) / size.x,
            (size.y - metrics.padding.top) / size.y,
        )
    } else {
        (0.0, 0.0, 1.0, 1.0)
    };

    Rect::new(
        r.origin.x + r.size.x * nx0,
        r.origin.y + r.size.y * ny0,
        r.size.x * (nx1 - nx0),
        r.size.y * (ny1 - ny0),
    )
}

/// Builds a single quad covering the drawing area of `rect`, sampling the
/// sprite's full outer UV range.
pub fn build(
    out: &mut MeshBuffer,
    rect: Rect,
    metrics: &SpriteMetrics,
    pivot: Vec2,
    preserve_aspect: bool,
    tint: Rgba,
) {
    let r = drawing_rect(metrics, rect, pivot, preserve_aspect);

    out.clear();
    out.push_quad(r.min(), r.max(), tint, metrics.outer_uv.min, metrics.outer_uv.max);
}
