use std::fmt;

use crate::coords::Vec2;
use crate::sprite::SpriteMetrics;

/// The texture behind a sprite could not be sampled.
///
/// Typical causes: the image was imported without read access, or lives in a
/// compressed/packed atlas the CPU cannot address.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureReadError {
    pub message: String,
}

impl TextureReadError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for TextureReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture read failed: {}", self.message)
    }
}

impl std::error::Error for TextureReadError {}

/// CPU-readable alpha channel of a sprite's texture.
///
/// `u`/`v` are normalized texture coordinates with `v = 0` at the bottom row,
/// matching the mesh builders' UV orientation.
pub trait AlphaSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Bilinear alpha sample in `[0, 1]`, clamped at the edges.
    fn alpha_bilinear(&self, u: f32, v: f32) -> Result<f32, TextureReadError>;
}

impl AlphaSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn alpha_bilinear(&self, u: f32, v: f32) -> Result<f32, TextureReadError> {
        let (w, h) = self.dimensions();
        if w == 0 || h == 0 {
            return Err(TextureReadError::new("image has zero size"));
        }

        let x = u.clamp(0.0, 1.0) * (w - 1) as f32;
        let y = v.clamp(0.0, 1.0) * (h - 1) as f32;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(w - 1);
        let y1 = (y0 + 1).min(h - 1);
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        // Image rows run top-down; v runs bottom-up.
        let alpha = |px: u32, py: u32| self.get_pixel(px, h - 1 - py).0[3] as f32 / 255.0;

        let bottom = alpha(x0, y0) * (1.0 - fx) + alpha(x1, y0) * fx;
        let top = alpha(x0, y1) * (1.0 - fx) + alpha(x1, y1) * fx;
        Ok(bottom * (1.0 - fy) + top * fy)
    }
}

/// Decides whether a mapped point counts as a hit for event purposes.
///
/// `mapped` is a point in sprite-rect pixel space (the output of
/// [`map_sliced`](super::map_sliced) or [`map_tiled`](super::map_tiled)). It
/// is normalized against the sprite's texture rect and the texture's alpha is
/// compared to `threshold`.
///
/// Fails open: if the texture cannot be read the point is treated as a hit so
/// input is never silently blocked, and a diagnostic is logged.
pub fn alpha_hit(
    mapped: Vec2,
    metrics: &SpriteMetrics,
    threshold: f32,
    source: &dyn AlphaSource,
) -> bool {
    let tr = metrics.texture_rect;
    let normalized = Vec2::new(
        mapped.x / tr.size.x.max(1.0),
        mapped.y / tr.size.y.max(1.0),
    );

    let tw = (source.width() as f32).max(1.0);
    let th = (source.height() as f32).max(1.0);
    let u = lerp(tr.min().x, tr.max().x, normalized.x) / tw;
    let v = lerp(tr.min().y, tr.max().y, normalized.y) / th;

    match source.alpha_bilinear(u, v) {
        Ok(alpha) => alpha >= threshold,
        Err(err) => {
            log::error!(
                "alpha hit test could not read the sprite texture ({err}); \
                 treating the point as a hit. Enable read access for the \
                 texture and disable sprite packing to use alpha thresholds \
                 below 1."
            );
            true
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
