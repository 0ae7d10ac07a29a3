//! Base shape generators.
//!
//! Generators are parameter structs with `apply` methods; free functions
//! are sugar that delegate to these. Each generator emits a canonical unit
//! shape as a triangle soup and runs its configured number of subdivision
//! rounds before returning, so the soup a caller receives is final.

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::TriangleSoup;
use crate::subdivision::subdivide;

/// Position on a unit ring at the given angle and height.
fn ring_vertex(angle: f32, height: f32) -> Vec3 {
    Vec3::new(angle.sin(), height, angle.cos())
}

// ============================================================================
// Icosahedron
// ============================================================================

/// Corner indices of the 20 icosahedron faces.
const ICOSAHEDRON_FACES: [usize; 60] = [
    5, 0, 11, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, 1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1,
    8, 3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, 4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
];

/// The 12 icosahedron vertices, built from the golden ratio.
///
/// Kept unnormalized (corners sit at distance sqrt(1 + phi^2) from the
/// origin); projection onto a sphere is the pipeline's job, not the
/// generator's.
fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Generates an icosahedron as a triangle soup.
///
/// The 12-vertex table is expanded per face, so the 20 faces share no
/// vertices in the output.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Icosahedron {
    /// Number of subdivision rounds. 0 = the base 20 faces.
    pub subdivisions: u32,
}

impl Icosahedron {
    /// Creates a new icosahedron generator.
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let vertices = icosahedron_vertices();
        let mut soup = TriangleSoup::with_capacity(ICOSAHEDRON_FACES.len() / 3);
        for corner in ICOSAHEDRON_FACES {
            soup.vertices.push(vertices[corner]);
        }
        subdivide(&soup, self.subdivisions)
    }
}

/// Creates an icosahedron triangle soup.
pub fn icosahedron(subdivisions: u32) -> TriangleSoup {
    Icosahedron::new(subdivisions).apply()
}

// ============================================================================
// Plane
// ============================================================================

/// Generates a flat square in the X-Z plane as two triangles.
///
/// Covers [-1, 1] on both axes at Y = 0.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// Number of subdivision rounds. 0 = two triangles.
    pub subdivisions: u32,
}

impl Plane {
    /// Creates a new plane generator.
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(2);
        soup.push_triangle(
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
        );
        soup.push_triangle(
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
        );
        subdivide(&soup, self.subdivisions)
    }
}

/// Creates a plane triangle soup.
pub fn plane(subdivisions: u32) -> TriangleSoup {
    Plane::new(subdivisions).apply()
}

// ============================================================================
// Cuboid
// ============================================================================

/// The 12 faces of a [-1, 1] cube, three corners each.
const CUBOID_FACES: [[Vec3; 3]; 12] = [
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ],
    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
    ],
    [
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    ],
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ],
];

/// Generates an axis-aligned [-1, 1] cube as 12 triangles.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// Number of subdivision rounds. 0 = 12 triangles.
    pub subdivisions: u32,
}

impl Cuboid {
    /// Creates a new cuboid generator.
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(CUBOID_FACES.len());
        for [a, b, c] in CUBOID_FACES {
            soup.push_triangle(a, b, c);
        }
        subdivide(&soup, self.subdivisions)
    }
}

/// Creates a cuboid triangle soup.
pub fn cuboid(subdivisions: u32) -> TriangleSoup {
    Cuboid::new(subdivisions).apply()
}

// ============================================================================
// Triangle
// ============================================================================

/// Generates a single equilateral triangle in the X-Z plane.
///
/// Corners sit on the unit ring at angles 0, 2π/3 and 4π/3.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Number of subdivision rounds. 0 = one triangle.
    pub subdivisions: u32,
}

impl Triangle {
    /// Creates a new triangle generator.
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(1);
        soup.push_triangle(
            ring_vertex(0.0, 0.0),
            ring_vertex(TAU / 3.0, 0.0),
            ring_vertex(TAU * 2.0 / 3.0, 0.0),
        );
        subdivide(&soup, self.subdivisions)
    }
}

/// Creates an equilateral triangle soup.
pub fn triangle(subdivisions: u32) -> TriangleSoup {
    Triangle::new(subdivisions).apply()
}

// ============================================================================
// Pyramid
// ============================================================================

/// Generates an n-sided pyramid.
///
/// Side triangles run from a base ring at `-height/4` up to an apex at
/// `3*height/4`. A base cap is available for 3- and 4-sided pyramids only;
/// other side counts log a warning and come out open at the bottom.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pyramid {
    /// Number of side faces. Values below 3 are coerced to 3.
    pub sides: u32,
    /// Total height from base plane to apex.
    pub height: f32,
    /// Whether to close the base (supported for 3 and 4 sides).
    pub include_base: bool,
    /// Number of subdivision rounds.
    pub subdivisions: u32,
}

impl Default for Pyramid {
    fn default() -> Self {
        Self {
            sides: 3,
            height: 1.0,
            include_base: false,
            subdivisions: 0,
        }
    }
}

impl Pyramid {
    /// Creates a new pyramid generator.
    pub fn new(sides: u32, height: f32) -> Self {
        Self {
            sides,
            height,
            ..Default::default()
        }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let sides = if self.sides > 2 { self.sides } else { 3 };
        let lo = -self.height / 4.0;
        let hi = self.height / 4.0 * 3.0;
        let apex = Vec3::new(0.0, hi, 0.0);

        let mut soup = TriangleSoup::with_capacity(sides as usize + 2);
        for i in 0..sides {
            let a1 = i as f32 / sides as f32 * TAU;
            let a2 = (i + 1) as f32 / sides as f32 * TAU;
            soup.push_triangle(ring_vertex(a1, lo), ring_vertex(a2, lo), apex);
        }

        if self.include_base {
            self.add_base(&mut soup, sides, lo);
        }

        subdivide(&soup, self.subdivisions)
    }

    fn add_base(&self, soup: &mut TriangleSoup, sides: u32, lo: f32) {
        if sides == 3 {
            soup.push_triangle(
                ring_vertex(PI * 4.0 / 3.0, lo),
                ring_vertex(PI * 2.0 / 3.0, lo),
                ring_vertex(0.0, lo),
            );
        } else if sides == 4 {
            let v1 = ring_vertex(PI, lo);
            let v2 = ring_vertex(PI / 2.0, lo);
            let v3 = ring_vertex(0.0, lo);
            let v4 = ring_vertex(PI / 2.0 * 3.0, lo);
            soup.push_triangle(v1, v2, v3);
            soup.push_triangle(v4, v1, v3);
        } else {
            log::warn!("{sides}-sided pyramid bases are not supported; leaving the base open");
        }
    }
}

/// Creates a pyramid triangle soup.
pub fn pyramid(sides: u32, height: f32) -> TriangleSoup {
    Pyramid::new(sides, height).apply()
}

// ============================================================================
// Cylinder
// ============================================================================

/// Generates an open-ended prism of `sides` x `rows` quad bands.
///
/// Bands span `[-height/2, height/2]` in `rows` equal steps; each band cell
/// is split into two triangles. There are no end caps.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cylinder {
    /// Number of sides around the ring. Values below 3 are coerced to 3.
    pub sides: u32,
    /// Number of vertical bands. 0 is treated as 1.
    pub rows: u32,
    /// Total height.
    pub height: f32,
    /// Number of subdivision rounds.
    pub subdivisions: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            sides: 3,
            rows: 1,
            height: 1.0,
            subdivisions: 0,
        }
    }
}

impl Cylinder {
    /// Creates a new cylinder generator.
    pub fn new(sides: u32, rows: u32, height: f32) -> Self {
        Self {
            sides,
            rows,
            height,
            ..Default::default()
        }
    }

    /// Generates the triangle soup.
    pub fn apply(&self) -> TriangleSoup {
        let sides = if self.sides > 2 { self.sides } else { 3 };
        let rows = self.rows.max(1);
        let height = self.height;

        let mut soup = TriangleSoup::with_capacity((sides * rows * 2) as usize);
        for i in 0..sides {
            for r in 0..rows {
                let lo = -height / 2.0 + r as f32 / rows as f32 * height;
                let hi = -height / 2.0 + (r + 1) as f32 / rows as f32 * height;
                let a1 = i as f32 / sides as f32 * TAU;
                let a2 = (i + 1) as f32 / sides as f32 * TAU;
                let v1 = ring_vertex(a1, lo);
                let v2 = ring_vertex(a2, lo);
                let v3 = ring_vertex(a1, hi);
                let v4 = ring_vertex(a2, hi);
                soup.push_triangle(v1, v2, v3);
                soup.push_triangle(v3, v2, v4);
            }
        }
        subdivide(&soup, self.subdivisions)
    }
}

/// Creates a cylinder triangle soup.
pub fn cylinder(sides: u32, rows: u32, height: f32) -> TriangleSoup {
    Cylinder::new(sides, rows, height).apply()
}

// ============================================================================
// Shape
// ============================================================================

/// A base shape and its generator parameters.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// 20-face icosahedron.
    Icosahedron(Icosahedron),
    /// Flat square in the X-Z plane.
    Plane(Plane),
    /// Axis-aligned cube.
    Cuboid(Cuboid),
    /// Single equilateral triangle in the X-Z plane.
    Triangle(Triangle),
    /// N-sided pyramid with optional base cap.
    Pyramid(Pyramid),
    /// Open-ended prism.
    Cylinder(Cylinder),
}

impl Shape {
    /// Generates the shape's triangle soup.
    pub fn generate(&self) -> TriangleSoup {
        match self {
            Shape::Icosahedron(s) => s.apply(),
            Shape::Plane(s) => s.apply(),
            Shape::Cuboid(s) => s.apply(),
            Shape::Triangle(s) => s.apply(),
            Shape::Pyramid(s) => s.apply(),
            Shape::Cylinder(s) => s.apply(),
        }
    }
}

impl From<Icosahedron> for Shape {
    fn from(s: Icosahedron) -> Self {
        Shape::Icosahedron(s)
    }
}

impl From<Plane> for Shape {
    fn from(s: Plane) -> Self {
        Shape::Plane(s)
    }
}

impl From<Cuboid> for Shape {
    fn from(s: Cuboid) -> Self {
        Shape::Cuboid(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Pyramid> for Shape {
    fn from(s: Pyramid) -> Self {
        Shape::Pyramid(s)
    }
}

impl From<Cylinder> for Shape {
    fn from(s: Cylinder) -> Self {
        Shape::Cylinder(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_base() {
        let soup = icosahedron(0);
        assert_eq!(soup.triangle_count(), 20);
        assert_eq!(soup.vertex_count(), 60);
    }

    #[test]
    fn test_icosahedron_subdivided() {
        assert_eq!(icosahedron(1).triangle_count(), 80);
        assert_eq!(icosahedron(2).triangle_count(), 320);
    }

    #[test]
    fn test_icosahedron_corner_distance() {
        // Corners sit at sqrt(1 + phi^2), not on the unit sphere
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let expected = (1.0 + t * t).sqrt();

        for v in &icosahedron(0).vertices {
            assert!((v.length() - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_plane() {
        let soup = plane(0);
        assert_eq!(soup.triangle_count(), 2);

        for v in &soup.vertices {
            assert_eq!(v.y, 0.0);
            assert!(v.x.abs() <= 1.0 && v.z.abs() <= 1.0);
        }
    }

    #[test]
    fn test_plane_subdivided() {
        assert_eq!(plane(3).triangle_count(), 2 * 64);
    }

    #[test]
    fn test_cuboid() {
        let soup = cuboid(0);
        assert_eq!(soup.triangle_count(), 12);
        assert_eq!(soup.vertex_count(), 36);

        for v in &soup.vertices {
            assert!(v.x.abs() == 1.0 && v.y.abs() == 1.0 && v.z.abs() == 1.0);
        }
    }

    #[test]
    fn test_triangle() {
        let soup = triangle(0);
        assert_eq!(soup.triangle_count(), 1);

        // Corners lie on the unit ring at y = 0
        for v in &soup.vertices {
            assert_eq!(v.y, 0.0);
            assert!((v.length() - 1.0).abs() < 0.001);
        }
        assert!((soup.vertices[0] - Vec3::new(0.0, 0.0, 1.0)).length() < 0.001);
    }

    #[test]
    fn test_pyramid_side_count() {
        assert_eq!(pyramid(3, 1.0).triangle_count(), 3);
        assert_eq!(pyramid(6, 1.0).triangle_count(), 6);
        // Below 3 coerces to 3
        assert_eq!(pyramid(1, 1.0).triangle_count(), 3);
    }

    #[test]
    fn test_pyramid_heights() {
        let soup = pyramid(4, 2.0);
        for v in &soup.vertices {
            // Base ring at -height/4, apex at 3*height/4
            assert!(v.y == -0.5 || v.y == 1.5);
        }
    }

    #[test]
    fn test_pyramid_base_cap() {
        let capped3 = Pyramid {
            sides: 3,
            include_base: true,
            ..Default::default()
        }
        .apply();
        assert_eq!(capped3.triangle_count(), 4);

        let capped4 = Pyramid {
            sides: 4,
            include_base: true,
            ..Default::default()
        }
        .apply();
        assert_eq!(capped4.triangle_count(), 6);

        // Unsupported side counts stay open (diagnostic, not an error)
        let capped5 = Pyramid {
            sides: 5,
            include_base: true,
            ..Default::default()
        }
        .apply();
        assert_eq!(capped5.triangle_count(), 5);
    }

    #[test]
    fn test_cylinder_band_count() {
        assert_eq!(cylinder(3, 1, 1.0).triangle_count(), 6);
        assert_eq!(cylinder(8, 4, 1.0).triangle_count(), 64);
        // Below 3 sides coerces to 3, zero rows to 1
        assert_eq!(cylinder(2, 0, 1.0).triangle_count(), 6);
    }

    #[test]
    fn test_cylinder_height_span() {
        let soup = cylinder(6, 3, 4.0);
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for v in &soup.vertices {
            min = min.min(v.y);
            max = max.max(v.y);
            // Every vertex sits on the unit ring in X-Z
            let planar = (v.x * v.x + v.z * v.z).sqrt();
            assert!((planar - 1.0).abs() < 0.001);
        }
        assert!((min + 2.0).abs() < 0.001);
        assert!((max - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_generator_applies_subdivision() {
        let soup = Pyramid {
            sides: 4,
            subdivisions: 2,
            ..Default::default()
        }
        .apply();
        assert_eq!(soup.triangle_count(), 4 * 16);
    }

    #[test]
    fn test_shape_enum_generate() {
        let shape: Shape = Cuboid::new(1).into();
        assert_eq!(shape.generate().triangle_count(), 48);
    }
}
