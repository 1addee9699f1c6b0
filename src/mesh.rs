//! Borrowed triangle soup with validated indices.

use crate::error::{Result, SamplingError};
use crate::vtx::Position;

use cgmath::BaseFloat;

/// Vertex positions and index triples owned by the caller.
///
/// Construction checks that every index points at an existing vertex and
/// that all vertices share a dimension of at least two, so sampling code can
/// index without further checks.
#[derive(Debug, Clone, Copy)]
pub struct Mesh<'a, V: 'a> {
    vertices: &'a [V],
    faces: &'a [[usize; 3]],
}

impl<'a, V> Mesh<'a, V> {
    pub fn new<S>(vertices: &'a [V], faces: &'a [[usize; 3]]) -> Result<Self>
        where S: BaseFloat,
            V: Position<S>
    {
        if let Some(first) = vertices.first() {
            let dimension = first.dimension();
            if dimension < 2 {
                return Err(SamplingError::InvalidMesh(format!(
                    "Vertices need at least two coordinates, got {}", dimension
                )));
            }

            if let Some((idx, vtx)) = vertices.iter()
                .enumerate()
                .find(|&(_, v)| v.dimension() != dimension)
            {
                return Err(SamplingError::InvalidMesh(format!(
                    "Vertex {} has {} coordinates, expected {}", idx, vtx.dimension(), dimension
                )));
            }
        }

        let vertex_count = vertices.len();
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&vertex_idx) = face.iter().find(|&&i| i >= vertex_count) {
                return Err(SamplingError::InvalidMesh(format!(
                    "Triangle {} references vertex {}, but there are only {} vertices",
                    face_idx, vertex_idx, vertex_count
                )));
            }
        }

        Ok(Mesh { vertices, faces })
    }

    pub fn vertices(&self) -> &'a [V] {
        self.vertices
    }

    pub fn faces(&self) -> &'a [[usize; 3]] {
        self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The three corners of the triangle with the given index.
    ///
    /// # Panics
    /// If `face` is not smaller than `face_count()`.
    pub fn corners(&self, face: usize) -> (&'a V, &'a V, &'a V) {
        let [a, b, c] = self.faces[face];
        (&self.vertices[a], &self.vertices[b], &self.vertices[c])
    }
}
