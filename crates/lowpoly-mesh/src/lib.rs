//! Low-poly triangle-soup generation.
//!
//! Builds faceted meshes in three steps: a base shape generator emits a
//! triangle soup, recursive midpoint subdivision refines it, and an
//! attribute pipeline derives heights, colors and UVs from a caller-supplied
//! noise field before packing flat buffers for rendering.
//!
//! # Example
//!
//! ```
//! use lowpoly_color::{ColorGradient, Rgb};
//! use lowpoly_mesh::{LowPoly, NoiseField};
//!
//! struct Swell;
//!
//! impl NoiseField for Swell {
//!     fn value(&self, x: f32, y: f32, z: f32) -> f32 {
//!         1.0 + 0.3 * self.normalized_value(x, y, z)
//!     }
//!
//!     fn normalized_value(&self, x: f32, y: f32, _z: f32) -> f32 {
//!         0.5 + 0.5 * (3.0 * x).sin() * (2.0 * y).cos()
//!     }
//! }
//!
//! let mut gradient = ColorGradient::new();
//! gradient.add_stop(0.0, Rgb::RED);
//! gradient.add_stop(1.0, Rgb::BLUE);
//!
//! let mut terrain = LowPoly::sphere(3);
//! terrain.set_vertex_height_and_face_color_from_noise_gradient(&Swell, &gradient);
//!
//! let buffers = terrain.build();
//! assert_eq!(buffers.triangle_count(), 20 * 64);
//! ```

mod field;
mod geometry;
mod pipeline;
mod shapes;
mod soup;
mod subdivision;

pub use field::NoiseField;
pub use geometry::GeometryBuffers;
pub use pipeline::{LowPoly, PipelineOptions};
pub use shapes::{
    Cuboid, Cylinder, Icosahedron, Plane, Pyramid, Shape, Triangle, cuboid, cylinder, icosahedron,
    plane, pyramid, triangle,
};
pub use soup::{SoupError, TriangleSoup};
pub use subdivision::{subdivide, subdivide_once, subdivide_triangle};
