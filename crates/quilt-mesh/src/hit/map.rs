use crate::coords::{Rect, Vec2};
use crate::sprite::SpriteMetrics;

/// Maps a rect-local point (lower-left origin) into sprite-rect pixel space
/// for a nine-sliced component.
///
/// Per axis: points inside the near border pass through unchanged; points
/// inside the far border shift by the rect/sprite size difference; points in
/// the stretched middle remap linearly from the fitted-border span onto the
/// sprite's own border span. The mapping is continuous across the border
/// boundaries whenever the borders did not need refitting.
pub fn map_sliced(local: Vec2, rect: Rect, metrics: &SpriteMetrics) -> Vec2 {
    let border = metrics.border;
    let fitted = (border / metrics.pixels_per_unit).fit_to_size(rect.size);

    Vec2::new(
        map_axis_sliced(
            local.x,
            rect.size.x,
            metrics.size.x,
            border.left,
            border.right,
            fitted.left,
            fitted.right,
        ),
        map_axis_sliced(
            local.y,
            rect.size.y,
            metrics.size.y,
            border.bottom,
            border.top,
            fitted.bottom,
            fitted.top,
        ),
    )
}

/// Maps a rect-local point (lower-left origin) into sprite-rect pixel space
/// for a tiled component.
///
/// Border regions behave exactly like [`map_sliced`]; the middle wraps
/// modulo the tile period (`sprite size - borders`) and offsets back past
/// the near border.
pub fn map_tiled(local: Vec2, rect: Rect, metrics: &SpriteMetrics) -> Vec2 {
    let border = metrics.border;
    let fitted = (border / metrics.pixels_per_unit).fit_to_size(rect.size);

    Vec2::new(
        map_axis_tiled(
            local.x,
            rect.size.x,
            metrics.size.x,
            border.left,
            border.right,
            fitted.left,
            fitted.right,
        ),
        map_axis_tiled(
            local.y,
            rect.size.y,
            metrics.size.y,
            border.bottom,
            border.top,
            fitted.bottom,
            fitted.top,
        ),
    )
}

fn map_axis_sliced(
    local: f32,
    rect_size: f32,
    sprite_size: f32,
    near: f32,
    far: f32,
    fitted_near: f32,
    fitted_far: f32,
) -> f32 {
    if local <= fitted_near {
        return local;
    }
    if rect_size - local <= fitted_far {
        return local - (rect_size - sprite_size);
    }

    let t = inverse_lerp(fitted_near, rect_size - fitted_far, local);
    lerp(near, sprite_size - far, t)
}

fn map_axis_tiled(
    local: f32,
    rect_size: f32,
    sprite_size: f32,
    near: f32,
    far: f32,
    fitted_near: f32,
    fitted_far: f32,
) -> f32 {
    if local <= fitted_near {
        return local;
    }
    if rect_size - local <= fitted_far {
        return local - (rect_size - sprite_size);
    }

    let period = sprite_size - near - far;
    if period <= 0.0 {
        // Border swallows the sprite; nothing to wrap into.
        return near;
    }
    (local - fitted_near).rem_euclid(period) + near
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamped inverse lerp; 0 when the span is empty.
#[inline]
fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    if a != b {
        ((v - a) / (b - a)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Border;

    fn metrics() -> SpriteMetrics {
        // 40×40 sprite, 10 px border, ppu 1.
        SpriteMetrics::full_texture(40, 40, Border::uniform(10.0), 1.0)
    }

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    // ── sliced ────────────────────────────────────────────────────────────

    #[test]
    fn sliced_near_border_passes_through() {
        let p = map_sliced(Vec2::new(4.0, 7.0), RECT, &metrics());
        assert_eq!(p, Vec2::new(4.0, 7.0));
    }

    #[test]
    fn sliced_far_border_shifts_by_size_difference() {
        // 95 is 5 px from the far edge of the 100-wide rect; in sprite space
        // it is 5 px from the far edge of the 40-wide sprite.
        let p = map_sliced(Vec2::new(95.0, 95.0), RECT, &metrics());
        assert_eq!(p, Vec2::new(35.0, 35.0));
    }

    #[test]
    fn sliced_middle_remaps_linearly_onto_sprite_span() {
        // Rect middle span is [10, 90], sprite middle span is [10, 30].
        let p = map_sliced(Vec2::new(50.0, 50.0), RECT, &metrics());
        assert_eq!(p, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn sliced_is_continuous_at_the_near_boundary() {
        let m = metrics();
        let at = map_sliced(Vec2::new(10.0, 10.0), RECT, &m);
        let above = map_sliced(Vec2::new(10.0 + 1e-3, 10.0 + 1e-3), RECT, &m);
        assert!((at.x - above.x).abs() < 1e-2);
        assert!((at.y - above.y).abs() < 1e-2);
    }

    #[test]
    fn sliced_is_continuous_at_the_far_boundary() {
        let m = metrics();
        let at = map_sliced(Vec2::new(90.0, 90.0), RECT, &m);
        let below = map_sliced(Vec2::new(90.0 - 1e-3, 90.0 - 1e-3), RECT, &m);
        assert!((at.x - below.x).abs() < 1e-2);
        assert!((at.y - below.y).abs() < 1e-2);
    }

    #[test]
    fn sliced_axes_are_independent() {
        let p = map_sliced(Vec2::new(5.0, 50.0), RECT, &metrics());
        assert_eq!(p.x, 5.0);
        assert_eq!(p.y, 20.0);
    }

    // ── tiled ─────────────────────────────────────────────────────────────

    #[test]
    fn tiled_near_border_passes_through() {
        let p = map_tiled(Vec2::new(3.0, 3.0), RECT, &metrics());
        assert_eq!(p, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn tiled_middle_wraps_into_the_tile_period() {
        // Period = 40 - 10 - 10 = 20. local 35 → (35 - 10) % 20 + 10 = 15.
        let p = map_tiled(Vec2::new(35.0, 35.0), RECT, &metrics());
        assert_eq!(p, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn tiled_wrap_stays_within_the_inner_region() {
        let m = metrics();
        for i in 0..60 {
            let x = 10.0 + i as f32 * 1.3;
            if 100.0 - x <= 10.0 {
                break;
            }
            let p = map_tiled(Vec2::new(x, 50.0), RECT, &m);
            assert!(p.x >= 10.0 && p.x < 30.0, "x = {x} mapped to {}", p.x);
        }
    }

    #[test]
    fn tiled_degenerate_period_clamps_to_near_border() {
        // Border swallows the sprite entirely.
        let m = SpriteMetrics::full_texture(20, 20, Border::uniform(10.0), 1.0);
        let p = map_tiled(Vec2::new(50.0, 50.0), RECT, &m);
        assert_eq!(p, Vec2::new(10.0, 10.0));
    }

    // ── refit interaction ─────────────────────────────────────────────────

    #[test]
    fn small_rect_uses_fitted_borders_for_region_tests() {
        // 10×10 rect with a 10 px border: fitted border is 5 on each side, so
        // 4 is still in the near region and passes through.
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = map_sliced(Vec2::new(4.0, 4.0), rect, &metrics());
        assert_eq!(p, Vec2::new(4.0, 4.0));
    }
}
