//! Coordinate and geometry types shared across mesh builders and hit testing.
//!
//! Canonical space:
//! - Local drawing units (source pixels divided by pixels-per-unit)
//! - Origin lower-left
//! - +X right, +Y up
//!
//! Texture coordinates (UVs) follow the same orientation: `v = 0` is the
//! bottom row of the source image.

mod border;
mod rect;
mod vec2;

pub use border::Border;
pub use rect::Rect;
pub use vec2::Vec2;
