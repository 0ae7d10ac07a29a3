//! Triangle soup storage.
//!
//! A triangle soup is an unindexed mesh: every face owns independent copies
//! of its three corner vertices, even where two faces meet along an edge in
//! space. That redundancy is what gives low-poly meshes their faceted look
//! once flat normals are computed per face.

use glam::Vec3;
use thiserror::Error;

/// Error produced when ingesting a raw scalar buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoupError {
    /// Buffer length is not a whole number of triangles (9 scalars each).
    #[error("scalar buffer length {0} is not a multiple of 9")]
    UnalignedBuffer(usize),
}

/// An unindexed triangle list.
///
/// Stores one `Vec3` per corner; every 3 consecutive vertices form one face
/// in generator winding order. The vertex count is always a multiple of 3.
/// Operations downstream assume that invariant and do not re-validate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    /// Corner positions, 3 per face.
    pub vertices: Vec<Vec3>,
}

impl TriangleSoup {
    /// Creates an empty soup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a soup with capacity for the given number of triangles.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Builds a soup from a flat scalar buffer of x/y/z triples.
    ///
    /// The buffer must hold a whole number of triangles: 9 scalars each.
    pub fn from_raw(data: &[f32]) -> Result<Self, SoupError> {
        if data.len() % 9 != 0 {
            return Err(SoupError::UnalignedBuffer(data.len()));
        }
        let vertices = data
            .chunks_exact(3)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
            .collect();
        Ok(Self { vertices })
    }

    /// Flattens the soup back into a scalar buffer.
    pub fn to_raw(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            out.extend_from_slice(&[v.x, v.y, v.z]);
        }
        out
    }

    /// Appends one face.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.vertices.push(a);
        self.vertices.push(b);
        self.vertices.push(c);
    }

    /// Returns the number of corner vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if the soup holds no faces.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over faces as corner triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_count() {
        let mut soup = TriangleSoup::new();
        assert!(soup.is_empty());

        soup.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.vertex_count(), 3);
    }

    #[test]
    fn test_from_raw_valid() {
        let data = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let soup = TriangleSoup::from_raw(&data).unwrap();
        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.vertices[1], Vec3::X);
    }

    #[test]
    fn test_from_raw_unaligned() {
        let data = [0.0; 10];
        assert_eq!(
            TriangleSoup::from_raw(&data),
            Err(SoupError::UnalignedBuffer(10))
        );
    }

    #[test]
    fn test_raw_roundtrip() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(Vec3::ZERO, Vec3::X, Vec3::new(0.5, 1.0, -2.0));

        let raw = soup.to_raw();
        assert_eq!(raw.len(), 9);
        assert_eq!(TriangleSoup::from_raw(&raw).unwrap(), soup);
    }

    #[test]
    fn test_triangles_iterator() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
        soup.push_triangle(Vec3::Z, Vec3::X, Vec3::Y);

        let tris: Vec<_> = soup.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1][0], Vec3::Z);
    }
}
