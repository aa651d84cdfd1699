//! Minimal CPU rasterizer for mesh previews.
//!
//! Good enough to eyeball slicing artefacts: barycentric triangle fill,
//! bilinear texture fetch, vertex-tint modulation, straight-alpha over-blend.
//! Not a renderer — one sample per pixel, no batching.

use image::RgbaImage;
use quilt_mesh::coords::Rect;
use quilt_mesh::mesh::{MeshBuffer, Vertex};

/// Rasterizes `mesh` into a fresh transparent `out_w × out_h` image.
///
/// `view` maps mesh space onto the image: `view.min()` lands on the lower-left
/// image corner, `view.max()` on the upper-right (the row order flip from
/// y-up mesh space to top-down image rows happens here).
pub fn rasterize(mesh: &MeshBuffer, view: Rect, out_w: u32, out_h: u32, texture: &RgbaImage) -> RgbaImage {
    let mut out = RgbaImage::new(out_w, out_h);
    if view.is_empty() || out_w == 0 || out_h == 0 {
        return out;
    }

    let verts = mesh.vertices();
    for tri in mesh.indices().chunks_exact(3) {
        fill_triangle(
            &mut out,
            view,
            &verts[tri[0] as usize],
            &verts[tri[1] as usize],
            &verts[tri[2] as usize],
            texture,
        );
    }
    out
}

fn fill_triangle(out: &mut RgbaImage, view: Rect, a: &Vertex, b: &Vertex, c: &Vertex, texture: &RgbaImage) {
    let (out_w, out_h) = out.dimensions();
    let to_px = |v: &Vertex| -> (f32, f32) {
        let x = (v.position[0] - view.origin.x) / view.size.x * out_w as f32;
        let y = out_h as f32 - (v.position[1] - view.origin.y) / view.size.y * out_h as f32;
        (x, y)
    };

    let (ax, ay) = to_px(a);
    let (bx, by) = to_px(b);
    let (cx, cy) = to_px(c);

    let area = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
    if area.abs() < 1e-6 {
        return;
    }

    let x0 = ax.min(bx).min(cx).floor().max(0.0) as u32;
    let y0 = ay.min(by).min(cy).floor().max(0.0) as u32;
    let x1 = (ax.max(bx).max(cx).ceil() as i64).clamp(0, out_w as i64) as u32;
    let y1 = (ay.max(by).max(cy).ceil() as i64).clamp(0, out_h as i64) as u32;

    let edge = |px: f32, py: f32, qx: f32, qy: f32, sx: f32, sy: f32| -> f32 {
        (qx - px) * (sy - py) - (qy - py) * (sx - px)
    };

    for py in y0..y1 {
        for px in x0..x1 {
            let sx = px as f32 + 0.5;
            let sy = py as f32 + 0.5;

            // Dividing by the signed area keeps barycentrics non-negative
            // inside the triangle for either winding.
            let w0 = edge(bx, by, cx, cy, sx, sy) / area;
            let w1 = edge(cx, cy, ax, ay, sx, sy) / area;
            let w2 = edge(ax, ay, bx, by, sx, sy) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let u = w0 * a.uv[0] + w1 * b.uv[0] + w2 * c.uv[0];
            let v = w0 * a.uv[1] + w1 * b.uv[1] + w2 * c.uv[1];
            let texel = sample_bilinear(texture, u, v);

            let tint = [
                (w0 * a.color[0] as f32 + w1 * b.color[0] as f32 + w2 * c.color[0] as f32) / 255.0,
                (w0 * a.color[1] as f32 + w1 * b.color[1] as f32 + w2 * c.color[1] as f32) / 255.0,
                (w0 * a.color[2] as f32 + w1 * b.color[2] as f32 + w2 * c.color[2] as f32) / 255.0,
                (w0 * a.color[3] as f32 + w1 * b.color[3] as f32 + w2 * c.color[3] as f32) / 255.0,
            ];

            let src = [
                texel[0] * tint[0],
                texel[1] * tint[1],
                texel[2] * tint[2],
                texel[3] * tint[3],
            ];
            blend_over(out.get_pixel_mut(px, py), src);
        }
    }
}

/// Bilinear RGBA fetch, straight alpha, `v = 0` at the bottom row, clamped.
fn sample_bilinear(texture: &RgbaImage, u: f32, v: f32) -> [f32; 4] {
    let (w, h) = texture.dimensions();
    if w == 0 || h == 0 {
        return [0.0; 4];
    }

    let x = u.clamp(0.0, 1.0) * (w - 1) as f32;
    let y = v.clamp(0.0, 1.0) * (h - 1) as f32;

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let texel = |px: u32, py: u32| -> [f32; 4] {
        let p = texture.get_pixel(px, h - 1 - py).0;
        [
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
            p[3] as f32 / 255.0,
        ]
    };

    let mix = |p: [f32; 4], q: [f32; 4], t: f32| -> [f32; 4] {
        [
            p[0] + (q[0] - p[0]) * t,
            p[1] + (q[1] - p[1]) * t,
            p[2] + (q[2] - p[2]) * t,
            p[3] + (q[3] - p[3]) * t,
        ]
    };

    let bottom = mix(texel(x0, y0), texel(x1, y0), fx);
    let top = mix(texel(x0, y1), texel(x1, y1), fx);
    mix(bottom, top, fy)
}

/// Straight-alpha source-over blend into an 8-bit destination pixel.
fn blend_over(dst: &mut image::Rgba<u8>, src: [f32; 4]) {
    let sa = src[3].clamp(0.0, 1.0);
    let da = dst.0[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        *dst = image::Rgba([0, 0, 0, 0]);
        return;
    }

    let q = |s: f32, d: u8| -> u8 {
        let d = d as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / oa;
        (c.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    *dst = image::Rgba([
        q(src[0], dst.0[0]),
        q(src[1], dst.0[1]),
        q(src[2], dst.0[2]),
        (oa * 255.0).round() as u8,
    ]);
}
