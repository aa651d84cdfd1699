use bytemuck::{Pod, Zeroable};

use crate::color::Rgba;
use crate::coords::Vec2;

/// One mesh vertex: position, straight-alpha RGBA8 tint, texture coordinate.
///
/// `repr(C)` with no padding, so a `&[Vertex]` casts directly to bytes for
/// GPU upload (`bytemuck::cast_slice`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    #[inline]
    pub fn new(pos: Vec2, color: Rgba, uv: Vec2) -> Self {
        Self {
            position: [pos.x, pos.y, 0.0],
            color: color.to_array(),
            uv: [uv.x, uv.y],
        }
    }
}

/// Reusable vertex/index sink for mesh builders.
///
/// Builders call [`clear`] and then append quads; `clear` keeps allocated
/// capacity, so a buffer reused across rebuilds stops allocating once warmed.
/// Triangles use `u16` indices — slice meshes stay far below that limit.
///
/// [`clear`]: MeshBuffer::clear
#[derive(Debug, Default, Clone)]
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl MeshBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears vertices and indices, keeping capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn push_vertex(&mut self, pos: Vec2, color: Rgba, uv: Vec2) {
        self.vertices.push(Vertex::new(pos, color, uv));
    }

    #[inline]
    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Appends an axis-aligned quad: 4 vertices in the order lower-left,
    /// upper-left, upper-right, lower-right, with triangles `(0, 1, 2)` and
    /// `(2, 3, 0)` relative to the quad's own block start.
    pub fn push_quad(&mut self, pos_min: Vec2, pos_max: Vec2, color: Rgba, uv_min: Vec2, uv_max: Vec2) {
        let start = self.vertices.len() as u16;

        self.push_vertex(Vec2::new(pos_min.x, pos_min.y), color, Vec2::new(uv_min.x, uv_min.y));
        self.push_vertex(Vec2::new(pos_min.x, pos_max.y), color, Vec2::new(uv_min.x, uv_max.y));
        self.push_vertex(Vec2::new(pos_max.x, pos_max.y), color, Vec2::new(uv_max.x, uv_max.y));
        self.push_vertex(Vec2::new(pos_max.x, pos_min.y), color, Vec2::new(uv_max.x, uv_min.y));

        self.push_triangle(start, start + 1, start + 2);
        self.push_triangle(start + 2, start + 3, start);
    }

    /// Like [`push_quad`](MeshBuffer::push_quad) but with the min-edge x
    /// coordinates negated, producing the horizontally mirrored partner of a
    /// quad placed on the other side of `x = 0`. Used by the tiled builder's
    /// left/right symmetric pair.
    pub fn push_quad_mirrored_x(
        &mut self,
        pos_min: Vec2,
        pos_max: Vec2,
        color: Rgba,
        uv_min: Vec2,
        uv_max: Vec2,
    ) {
        let start = self.vertices.len() as u16;

        self.push_vertex(Vec2::new(-pos_min.x, pos_min.y), color, Vec2::new(uv_min.x, uv_min.y));
        self.push_vertex(Vec2::new(-pos_min.x, pos_max.y), color, Vec2::new(uv_min.x, uv_max.y));
        self.push_vertex(Vec2::new(pos_max.x, pos_max.y), color, Vec2::new(uv_max.x, uv_max.y));
        self.push_vertex(Vec2::new(pos_max.x, pos_min.y), color, Vec2::new(uv_max.x, uv_min.y));

        self.push_triangle(start, start + 1, start + 2);
        self.push_triangle(start + 2, start + 3, start);
    }
}
