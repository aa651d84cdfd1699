//! Quad-mesh generation for bordered (**9-slice**) and tiled 2D sprites.
//!
//! Given a target rectangle, immutable sprite metrics (UVs, border,
//! pixels-per-unit), and per-instance configuration, this crate produces a
//! vertex/index mesh ready for GPU upload, plus the inverse border math
//! needed for alpha-threshold hit testing. Every build is a synchronous pure
//! computation into a caller-owned [`mesh::MeshBuffer`]; the crate keeps no
//! state of its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Rect`, `Border` (with border refitting) |
//! | [`sprite`] | `SpriteMetrics`, `UvRect` |
//! | [`color`] | `Rgba` vertex tint |
//! | [`mesh`] | `MeshBuffer`, `Vertex`, the `sliced` / `tiled` / `simple` builders |
//! | [`hit`] | point mapping back to texture space, `AlphaSource`, `alpha_hit` |
//! | [`components`] | `SlicedImage`, `TiledImage` and their capability traits |
//! | [`logging`] | `env_logger` initialization for binaries |
//!
//! # Quick start
//!
//! ```rust
//! use quilt_mesh::components::{MeshSource, SlicedImage};
//! use quilt_mesh::coords::{Border, Rect};
//! use quilt_mesh::mesh::MeshBuffer;
//! use quilt_mesh::sprite::SpriteMetrics;
//!
//! let metrics = SpriteMetrics::full_texture(64, 64, Border::uniform(8.0), 1.0);
//! let image = SlicedImage::new();
//!
//! let mut mesh = MeshBuffer::new();
//! image.populate_mesh(&metrics, Rect::new(0.0, 0.0, 200.0, 120.0), &mut mesh);
//!
//! // 8 quads: corners keep their size, edges stretch, center is skipped.
//! assert_eq!(mesh.vertex_count(), 32);
//! ```

pub mod color;
pub mod components;
pub mod coords;
pub mod hit;
pub mod logging;
pub mod mesh;
pub mod sprite;
