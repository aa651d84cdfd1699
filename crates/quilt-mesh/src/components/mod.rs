//! Image components.
//!
//! A component is a plain value holding per-instance configuration; the
//! sprite metrics and draw rect are supplied by the owning layout/render
//! collaborator on every call. Capabilities are split into one trait each —
//! mesh population, layout reporting, raycast filtering — and a concrete
//! component implements the set it supports. The owner triggers
//! [`MeshSource::populate_mesh`] off its own dirty flag; there is no
//! engine-side virtual dispatch.

mod sliced;
mod tiled;

pub use sliced::SlicedImage;
pub use tiled::TiledImage;

use crate::coords::{Rect, Vec2};
use crate::hit::AlphaSource;
use crate::mesh::MeshBuffer;
use crate::sprite::SpriteMetrics;

/// Rebuilds the component's mesh from scratch into `out`.
pub trait MeshSource {
    fn populate_mesh(&self, metrics: &SpriteMetrics, rect: Rect, out: &mut MeshBuffer);
}

/// Size preferences a layout system can query.
///
/// `flexible` uses the usual convention: negative means "no opinion".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutInfo {
    pub min: Vec2,
    pub preferred: Vec2,
    pub flexible: Vec2,
    pub priority: i32,
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self {
            min: Vec2::zero(),
            preferred: Vec2::zero(),
            flexible: Vec2::new(-1.0, -1.0),
            priority: 0,
        }
    }
}

/// Reports layout preferences derived from the sprite.
pub trait LayoutSource {
    fn layout_info(&self, metrics: &SpriteMetrics) -> LayoutInfo;
}

/// Filters input events by mapping a rect-local point into texture space and
/// testing its alpha.
pub trait RaycastFilter {
    /// `local` is rect-local with a lower-left origin (pivot offset already
    /// applied by the input collaborator).
    fn is_location_valid(
        &self,
        local: Vec2,
        rect: Rect,
        metrics: &SpriteMetrics,
        texture: &dyn AlphaSource,
    ) -> bool;
}
