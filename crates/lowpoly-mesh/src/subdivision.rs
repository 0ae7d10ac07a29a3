//! Recursive midpoint subdivision.
//!
//! Splits every face into four smaller faces using edge midpoints. The
//! split is flat: midpoints stay on the original surface, so subdivision
//! refines the tessellation without changing the shape.

use glam::Vec3;

use crate::TriangleSoup;

/// Splits one face `(a, b, c)` into four using its edge midpoints.
///
/// With `d = mid(a, b)`, `e = mid(b, c)` and `f = mid(c, a)`, the children
/// are emitted as `(a, d, f)`, `(d, b, e)`, `(e, c, f)`, `(d, e, f)` — a
/// fixed order, so output is reproducible.
pub fn subdivide_triangle(a: Vec3, b: Vec3, c: Vec3) -> [[Vec3; 3]; 4] {
    let d = (a + b) / 2.0;
    let e = (b + c) / 2.0;
    let f = (c + a) / 2.0;
    [[a, d, f], [d, b, e], [e, c, f], [d, e, f]]
}

/// Applies one level of midpoint subdivision.
///
/// Faces are visited in input order and each face's four children are
/// emitted consecutively, so the output ordering is deterministic.
pub fn subdivide_once(soup: &TriangleSoup) -> TriangleSoup {
    let mut out = TriangleSoup::with_capacity(soup.triangle_count() * 4);
    for [a, b, c] in soup.triangles() {
        for [v0, v1, v2] in subdivide_triangle(a, b, c) {
            out.push_triangle(v0, v1, v2);
        }
    }
    out
}

/// Applies `levels` rounds of midpoint subdivision.
///
/// `levels = 0` returns the input unchanged. Each round multiplies the face
/// count by 4.
pub fn subdivide(soup: &TriangleSoup, levels: u32) -> TriangleSoup {
    let mut result = soup.clone();
    for _ in 0..levels {
        result = subdivide_once(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> TriangleSoup {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );
        soup
    }

    #[test]
    fn test_quadruples_per_level() {
        let soup = single_triangle();

        assert_eq!(subdivide(&soup, 1).triangle_count(), 4);
        assert_eq!(subdivide(&soup, 2).triangle_count(), 16);
        assert_eq!(subdivide(&soup, 3).triangle_count(), 64);
    }

    #[test]
    fn test_zero_levels_is_identity() {
        let soup = single_triangle();
        assert_eq!(subdivide(&soup, 0), soup);
    }

    #[test]
    fn test_child_order_and_corners() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 2.0, 0.0);
        let d = Vec3::new(1.0, 0.0, 0.0);
        let e = Vec3::new(1.0, 1.0, 0.0);
        let f = Vec3::new(0.0, 1.0, 0.0);

        let children = subdivide_triangle(a, b, c);
        assert_eq!(children[0], [a, d, f]);
        assert_eq!(children[1], [d, b, e]);
        assert_eq!(children[2], [e, c, f]);
        assert_eq!(children[3], [d, e, f]);
    }

    #[test]
    fn test_original_corners_survive() {
        let soup = single_triangle();
        let split = subdivide_once(&soup);

        // Each original corner reappears as the leading corner of one child
        for corner in soup.vertices.iter() {
            assert!(split.vertices.contains(corner));
        }
    }

    #[test]
    fn test_midpoints_not_projected() {
        // Midpoints stay on the chord between corners, never pushed outward
        let soup = single_triangle();
        let split = subdivide_once(&soup);

        assert_eq!(split.vertices[1], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_soup() {
        let soup = TriangleSoup::new();
        assert!(subdivide(&soup, 3).is_empty());
    }
}
