//! Mesh output types and builders.
//!
//! A build call rebuilds the whole mesh from scratch: the caller hands in a
//! [`MeshBuffer`] (usually one kept per component instance so its allocations
//! are reused), the builder clears it and emits quads. Because the scratch
//! storage is caller-owned there is no shared state — independent instances
//! can build concurrently.

mod buffer;

pub mod simple;
pub mod sliced;
pub mod tiled;

pub use buffer::{MeshBuffer, Vertex};
