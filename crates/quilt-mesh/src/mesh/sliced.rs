//! Nine-slice quad generation.

use crate::color::Rgba;
use crate::coords::{Border, Rect, Vec2};
use crate::mesh::MeshBuffer;
use crate::sprite::SpriteMetrics;

/// Builds a nine-slice mesh for `rect` into `out`.
///
/// The rect is partitioned into a 3×3 grid: the sprite border (converted to
/// local units and refitted against the rect so overlapping borders scale
/// down) gives the two inner grid lines, the sprite's tight-mesh padding and
/// the caller's `extra_insets` offset the outer edges. Corners keep
/// their source size, edges stretch along one axis, and the center cell is
/// emitted only when `fill_center` is set.
///
/// All grid cells are emitted even when degenerate, so the output is always
/// exactly 8 quads (32 vertices, 48 indices) or 9 with the center (36 / 54).
/// A rect shrunk to the combined border size simply collapses the middle
/// cells to zero area.
///
/// Callers should check [`SpriteMetrics::has_border`] first and fall back to
/// [`simple::build`](crate::mesh::simple::build) for borderless sprites;
/// slicing a zero border degenerates to a single stretched region drawn 8
/// times.
pub fn build(
    out: &mut MeshBuffer,
    rect: Rect,
    metrics: &SpriteMetrics,
    extra_insets: Border,
    fill_center: bool,
    tint: Rgba,
) {
    let ppu = metrics.pixels_per_unit;
    let border = (metrics.border / ppu).fit_to_size(rect.size);
    let padding = metrics.padding / ppu;

    // Grid positions, lower-left origin. Outer edges honor sprite padding and
    // per-instance insets; inner lines come from the fitted border.
    let xs = [
        rect.origin.x + padding.left - extra_insets.left,
        rect.origin.x + border.left,
        rect.origin.x + rect.size.x - border.right,
        rect.origin.x + rect.size.x - padding.right - extra_insets.right,
    ];
    let ys = [
        rect.origin.y + padding.bottom - extra_insets.bottom,
        rect.origin.y + border.bottom,
        rect.origin.y + rect.size.y - border.top,
        rect.origin.y + rect.size.y - padding.top - extra_insets.top,
    ];

    // Matching UV grid: outer corners, inner border lines.
    let us = [
        metrics.outer_uv.min.x,
        metrics.inner_uv.min.x,
        metrics.inner_uv.max.x,
        metrics.outer_uv.max.x,
    ];
    let vs = [
        metrics.outer_uv.min.y,
        metrics.inner_uv.min.y,
        metrics.inner_uv.max.y,
        metrics.outer_uv.max.y,
    ];

    out.clear();

    for x in 0..3 {
        for y in 0..3 {
            if x == 1 && y == 1 && !fill_center {
                continue;
            }
            out.push_quad(
                Vec2::new(xs[x], ys[y]),
                Vec2::new(xs[x + 1], ys[y + 1]),
                tint,
                Vec2::new(us[x], vs[y]),
                Vec2::new(us[x + 1], vs[y + 1]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(border: Border) -> SpriteMetrics {
        SpriteMetrics::full_texture(100, 100, border, 1.0)
    }

    fn quad_size(buf: &MeshBuffer, quad: usize) -> (f32, f32) {
        let v = &buf.vertices()[quad * 4..quad * 4 + 4];
        (v[2].position[0] - v[0].position[0], v[2].position[1] - v[0].position[1])
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn emits_eight_quads_without_center() {
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), Border::ZERO, false, Rgba::WHITE);
        assert_eq!(buf.vertex_count(), 32);
        assert_eq!(buf.indices().len(), 48);
    }

    #[test]
    fn emits_nine_quads_with_center() {
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), Border::ZERO, true, Rgba::WHITE);
        assert_eq!(buf.vertex_count(), 36);
        assert_eq!(buf.indices().len(), 54);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn corner_and_edge_quad_sizes_match_the_border() {
        // 100×100 rect, uniform 10 px border, ppu 1: corners 10×10, edges
        // 80×10 or 10×80. Quads are emitted x-major (column by column), with
        // the center skipped.
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), Border::ZERO, false, Rgba::WHITE);

        // Left column: bottom corner, edge, top corner.
        assert_eq!(quad_size(&buf, 0), (10.0, 10.0));
        assert_eq!(quad_size(&buf, 1), (10.0, 80.0));
        assert_eq!(quad_size(&buf, 2), (10.0, 10.0));
        // Middle column, center skipped: bottom edge then top edge.
        assert_eq!(quad_size(&buf, 3), (80.0, 10.0));
        assert_eq!(quad_size(&buf, 4), (80.0, 10.0));
        // Right column.
        assert_eq!(quad_size(&buf, 5), (10.0, 10.0));
        assert_eq!(quad_size(&buf, 6), (10.0, 80.0));
        assert_eq!(quad_size(&buf, 7), (10.0, 10.0));
    }

    #[test]
    fn overlapping_borders_are_refit_before_slicing() {
        // 5×5 rect with a 10 px border scales the border to 2.5 on every edge.
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 5.0, 5.0), &metrics(Border::uniform(10.0)), Border::ZERO, false, Rgba::WHITE);

        assert_eq!(quad_size(&buf, 0), (2.5, 2.5));
        // Middle cells collapse to zero extent, not negative.
        let (w, h) = quad_size(&buf, 1);
        assert_eq!(w, 2.5);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn rect_equal_to_combined_border_collapses_middle_cells() {
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 20.0, 20.0), &metrics(Border::uniform(10.0)), Border::ZERO, true, Rgba::WHITE);

        assert_eq!(buf.vertex_count(), 36);
        // Center quad (index 4 when filled) has zero area.
        assert_eq!(quad_size(&buf, 4), (0.0, 0.0));
        // No vertex sits outside the rect.
        for v in buf.vertices() {
            assert!(v.position[0] >= 0.0 && v.position[0] <= 20.0);
            assert!(v.position[1] >= 0.0 && v.position[1] <= 20.0);
        }
    }

    #[test]
    fn rect_origin_offsets_every_vertex() {
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(-50.0, -50.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), Border::ZERO, false, Rgba::WHITE);
        let v = buf.vertices();
        assert_eq!(v[0].position[0], -50.0);
        assert_eq!(v[0].position[1], -50.0);
    }

    #[test]
    fn extra_insets_offset_outer_edges_only() {
        let mut buf = MeshBuffer::new();
        let insets = Border::new(5.0, 0.0, 0.0, 0.0);
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), insets, false, Rgba::WHITE);
        // Grid formula: x0 = padding.left - insets.left.
        assert_eq!(buf.vertices()[0].position[0], -5.0);
        // The inner border line is unaffected.
        assert_eq!(buf.vertices()[2].position[0], 10.0);
    }

    // ── UVs ───────────────────────────────────────────────────────────────

    #[test]
    fn corner_quads_span_outer_to_inner_uv() {
        let m = metrics(Border::uniform(10.0));
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &m, Border::ZERO, false, Rgba::WHITE);

        let v = buf.vertices();
        // First quad = lower-left corner: uv from outer min to inner min.
        assert_eq!(v[0].uv, [m.outer_uv.min.x, m.outer_uv.min.y]);
        assert_eq!(v[2].uv, [m.inner_uv.min.x, m.inner_uv.min.y]);
    }

    #[test]
    fn tint_is_applied_to_all_vertices() {
        let tint = Rgba::new(10, 20, 30, 40);
        let mut buf = MeshBuffer::new();
        build(&mut buf, Rect::new(0.0, 0.0, 100.0, 100.0), &metrics(Border::uniform(10.0)), Border::ZERO, false, tint);
        assert!(buf.vertices().iter().all(|v| v.color == tint.to_array()));
    }
}
