use core::ops::Div;

use super::Vec2;

/// Per-edge insets, in source pixels or local units depending on context.
///
/// A sprite's border defines the non-stretched corner/edge regions of a
/// nine-slice. Sprite metrics carry it in source pixels; mesh builders divide
/// by pixels-per-unit to get local units before doing any rect math.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Border {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Border {
    pub const ZERO: Border = Border::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self { left, bottom, right, top }
    }

    #[inline]
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Combined horizontal inset (left + right).
    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Combined vertical inset (bottom + top).
    #[inline]
    pub fn vertical(self) -> f32 {
        self.bottom + self.top
    }

    /// Squared magnitude over all four edges. A sprite "has a border" when
    /// this is greater than zero.
    #[inline]
    pub fn sqr_magnitude(self) -> f32 {
        self.left * self.left
            + self.bottom * self.bottom
            + self.right * self.right
            + self.top * self.top
    }

    /// Rescales the border to fit a target rectangle size.
    ///
    /// If the rect is smaller than the combined borders on an axis, there is
    /// no room for the borders at their normal size. To avoid artefacts with
    /// overlapping borders, both edges of that axis are scaled down
    /// proportionally so they exactly fill the rect. Axes with room to spare
    /// pass through unchanged, so the operation is idempotent when nothing
    /// overlaps.
    #[inline]
    pub fn fit_to_size(self, size: Vec2) -> Self {
        let (left, right) = fit_axis(self.left, self.right, size.x);
        let (bottom, top) = fit_axis(self.bottom, self.top, size.y);
        Self { left, bottom, right, top }
    }
}

impl Div<f32> for Border {
    type Output = Border;
    #[inline]
    fn div(self, rhs: f32) -> Border {
        Border::new(self.left / rhs, self.bottom / rhs, self.right / rhs, self.top / rhs)
    }
}

fn fit_axis(near: f32, far: f32, size: f32) -> (f32, f32) {
    let combined = near + far;
    if size < combined && combined != 0.0 {
        let ratio = size / combined;
        (near * ratio, far * ratio)
    } else {
        (near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fit_to_size ───────────────────────────────────────────────────────

    #[test]
    fn fit_is_identity_when_borders_fit() {
        let b = Border::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(b.fit_to_size(Vec2::new(100.0, 100.0)), b);
    }

    #[test]
    fn fit_is_identity_when_borders_exactly_fill() {
        let b = Border::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(b.fit_to_size(Vec2::new(20.0, 20.0)), b);
    }

    #[test]
    fn fit_scales_overlapping_borders_to_fill_the_axis() {
        let b = Border::uniform(10.0);
        let fitted = b.fit_to_size(Vec2::new(5.0, 5.0));
        assert_eq!(fitted, Border::uniform(2.5));
        assert_eq!(fitted.horizontal(), 5.0);
        assert_eq!(fitted.vertical(), 5.0);
    }

    #[test]
    fn fit_preserves_edge_ratio() {
        let b = Border::new(30.0, 0.0, 10.0, 0.0);
        let fitted = b.fit_to_size(Vec2::new(20.0, 50.0));
        assert_eq!(fitted.horizontal(), 20.0);
        // left : right stays 3 : 1
        assert_eq!(fitted.left, 15.0);
        assert_eq!(fitted.right, 5.0);
    }

    #[test]
    fn fit_handles_axes_independently() {
        let b = Border::new(10.0, 4.0, 10.0, 4.0);
        let fitted = b.fit_to_size(Vec2::new(10.0, 100.0));
        // x overlaps and scales; y fits and passes through.
        assert_eq!(fitted.left, 5.0);
        assert_eq!(fitted.right, 5.0);
        assert_eq!(fitted.bottom, 4.0);
        assert_eq!(fitted.top, 4.0);
    }

    #[test]
    fn fit_leaves_zero_border_alone() {
        let b = Border::ZERO;
        assert_eq!(b.fit_to_size(Vec2::new(0.0, 0.0)), Border::ZERO);
    }

    #[test]
    fn fit_with_zero_rect_collapses_borders() {
        let b = Border::uniform(8.0);
        let fitted = b.fit_to_size(Vec2::zero());
        assert_eq!(fitted, Border::ZERO);
    }

    // ── sqr_magnitude ─────────────────────────────────────────────────────

    #[test]
    fn sqr_magnitude_zero_only_for_zero_border() {
        assert_eq!(Border::ZERO.sqr_magnitude(), 0.0);
        assert!(Border::new(0.0, 0.0, 1.0, 0.0).sqr_magnitude() > 0.0);
    }
}
