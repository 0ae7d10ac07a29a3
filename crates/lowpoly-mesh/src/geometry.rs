//! Assembled geometry buffers.
//!
//! The flat layout renderers expect: positions as x/y/z triples, colors as
//! r/g/b triples, UVs as u/v pairs, one entry per corner vertex.

use glam::Vec3;

/// Flat vertex buffers produced by a pipeline.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffers {
    /// Corner positions, 3 scalars per vertex.
    pub positions: Vec<f32>,
    /// Per-vertex colors, 3 scalars per vertex, when a color pass ran.
    pub colors: Option<Vec<f32>>,
    /// Per-vertex texture coordinates, 2 scalars per vertex, when a UV pass
    /// ran.
    pub uvs: Option<Vec<f32>>,
    /// Per-vertex normals, 3 scalars per vertex, when normal derivation was
    /// requested.
    pub normals: Option<Vec<f32>>,
}

impl GeometryBuffers {
    /// Returns the number of corner vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of faces.
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Returns true if the buffers hold no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Derives per-vertex normals from face geometry.
///
/// Each face's normal is replicated to its three corners. Corners are never
/// shared between faces in a triangle soup, so the result shades flat even
/// though it is stored per vertex.
pub(crate) fn flat_normals(vertices: &[Vec3]) -> Vec<f32> {
    let mut normals = Vec::with_capacity(vertices.len() * 3);
    for tri in vertices.chunks_exact(3) {
        let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
        for _ in 0..3 {
            normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let buffers = GeometryBuffers {
            positions: vec![0.0; 18],
            ..Default::default()
        };
        assert_eq!(buffers.vertex_count(), 6);
        assert_eq!(buffers.triangle_count(), 2);
        assert!(!buffers.is_empty());
    }

    #[test]
    fn test_flat_normals_up() {
        // Counter-clockwise in the X-Z plane seen from +Y
        let vertices = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];

        let normals = flat_normals(&vertices);
        assert_eq!(normals.len(), 9);
        for corner in normals.chunks_exact(3) {
            assert!((corner[1] - 1.0).abs() < 0.001);
            assert!(corner[0].abs() < 0.001);
            assert!(corner[2].abs() < 0.001);
        }
    }

    #[test]
    fn test_flat_normals_degenerate_face() {
        // A zero-area face yields a zero normal rather than NaN
        let vertices = [Vec3::ZERO, Vec3::ZERO, Vec3::ZERO];
        let normals = flat_normals(&vertices);
        assert!(normals.iter().all(|n| *n == 0.0));
    }
}
