//! Builds one of each shape against a closed-form noise field and prints
//! the resulting buffer layouts.
//!
//! Run with: `cargo run -p lowpoly-demo`

use lowpoly_color::{ColorGradient, Rgb};
use lowpoly_mesh::{
    Cuboid, Cylinder, GeometryBuffers, LowPoly, NoiseField, PipelineOptions, Pyramid, Triangle,
};

/// Smooth deterministic swell standing in for a real noise source.
///
/// The normalized sample is a product of sines mapped into [0, 1]; the raw
/// sample remaps it into the [min_height, max_height] band.
struct Swell {
    min_height: f32,
    max_height: f32,
}

impl NoiseField for Swell {
    fn value(&self, x: f32, y: f32, z: f32) -> f32 {
        self.min_height + (self.max_height - self.min_height) * self.normalized_value(x, y, z)
    }

    fn normalized_value(&self, x: f32, y: f32, z: f32) -> f32 {
        let swell = (1.7 * x).sin() * (1.3 * y + 0.5 * z).cos();
        0.5 + 0.5 * swell
    }
}

fn report(name: &str, buffers: &GeometryBuffers) {
    println!(
        "{name:12} {:5} triangles, {:6} position scalars, colors: {}, normals: {}",
        buffers.triangle_count(),
        buffers.positions.len(),
        buffers.colors.as_ref().map_or(0, Vec::len),
        buffers.normals.as_ref().map_or(0, Vec::len),
    );
}

fn main() {
    env_logger::init();

    let mut gradient = ColorGradient::new();
    gradient.add_stop(0.0, Rgb::from_hex(0xFF0000));
    gradient.add_stop(1.0, Rgb::from_hex(0x0000FF));

    let noise = Swell {
        min_height: 1.0,
        max_height: 1.3,
    };

    let shapes: Vec<(&str, LowPoly)> = vec![
        ("sphere", LowPoly::sphere(3)),
        ("cuboid", LowPoly::new(Cuboid::new(3), PipelineOptions::default())),
        ("plane", LowPoly::plane(3)),
        (
            "triangle",
            LowPoly::new(Triangle::new(3), PipelineOptions::default()),
        ),
        (
            "pyramid",
            LowPoly::new(
                Pyramid {
                    subdivisions: 3,
                    ..Default::default()
                },
                PipelineOptions::default(),
            ),
        ),
        (
            "cylinder",
            LowPoly::new(
                Cylinder {
                    subdivisions: 3,
                    ..Default::default()
                },
                PipelineOptions::default(),
            ),
        ),
    ];

    for (name, mut pipeline) in shapes {
        pipeline.set_vertex_height_and_face_color_from_noise_gradient(&noise, &gradient);
        let buffers = pipeline.build();
        report(name, &buffers);
    }
}
