//! Attribute pipeline over a triangle soup.
//!
//! A [`LowPoly`] owns a lazily generated soup and mutates it in place
//! through height, color, UV and deform passes, then packs the result into
//! flat buffers. Per-shape sampling semantics (ground planes, open tubes)
//! are selected once at construction as a strategy value, not by
//! subclassing generators.

use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lowpoly_color::{ColorGradient, Rgb};

use crate::geometry::flat_normals;
use crate::{GeometryBuffers, Icosahedron, NoiseField, Plane, Shape, TriangleSoup};

/// Options shared by every pipeline, independent of the base shape.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineOptions {
    /// Project vertices onto the unit sphere before height and color
    /// sampling. Ignored by ground shapes (plane, triangle).
    pub normalize_vertices: bool,
    /// Derive per-vertex normals during buffer assembly.
    pub compute_normals: bool,
    /// Divide cylinder heights by the vertex's X-Z ring distance.
    /// Only consulted by cylinder pipelines.
    pub normalize_cylinder: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            normalize_vertices: false,
            compute_normals: true,
            normalize_cylinder: true,
        }
    }
}

/// Height and sampling semantics, selected by shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexStyle {
    /// Vertices move radially from the origin; sampling optionally sees
    /// unit-sphere positions.
    Solid,
    /// Heights write the Y axis directly; color sampling sees Y = 0.
    Ground,
    /// Vertices move radially in the X-Z plane only; Y is left alone.
    Tube,
}

fn style_for(shape: &Shape) -> VertexStyle {
    match shape {
        Shape::Plane(_) | Shape::Triangle(_) => VertexStyle::Ground,
        Shape::Cylinder(_) => VertexStyle::Tube,
        _ => VertexStyle::Solid,
    }
}

/// Position handed to color and face predicates.
fn sample_position(style: VertexStyle, normalize: bool, v: Vec3) -> Vec3 {
    match style {
        VertexStyle::Ground => Vec3::new(v.x, 0.0, v.z),
        _ if normalize => v.normalize_or_zero(),
        _ => v,
    }
}

/// A shape pipeline: base soup plus attribute passes plus buffer assembly.
///
/// The soup is generated on the first pass that needs it and mutated in
/// place from then on; every pipeline owns its soup exclusively.
#[derive(Debug, Clone)]
pub struct LowPoly {
    shape: Shape,
    style: VertexStyle,
    options: PipelineOptions,
    soup: Option<TriangleSoup>,
    colors: Option<Vec<f32>>,
    uvs: Option<Vec<f32>>,
}

impl LowPoly {
    /// Creates a pipeline over the given shape.
    pub fn new(shape: impl Into<Shape>, mut options: PipelineOptions) -> Self {
        let shape = shape.into();
        let style = style_for(&shape);
        // Ground shapes sample in the X-Z plane; unit-sphere projection
        // does not apply to them.
        if style == VertexStyle::Ground {
            options.normalize_vertices = false;
        }
        Self {
            shape,
            style,
            options,
            soup: None,
            colors: None,
            uvs: None,
        }
    }

    /// Icosahedron pipeline with default options.
    pub fn icosahedron(subdivisions: u32) -> Self {
        Self::new(Icosahedron::new(subdivisions), PipelineOptions::default())
    }

    /// Sphere pipeline: an icosahedron projected onto the unit sphere.
    pub fn sphere(subdivisions: u32) -> Self {
        let mut pipeline = Self::new(
            Icosahedron::new(subdivisions),
            PipelineOptions {
                normalize_vertices: true,
                ..Default::default()
            },
        );
        // A constant unit height moves every vertex onto the unit sphere
        pipeline.set_vertex_height(|_| 1.0);
        pipeline
    }

    /// Ground plane pipeline with default options.
    pub fn plane(subdivisions: u32) -> Self {
        Self::new(Plane::new(subdivisions), PipelineOptions::default())
    }

    /// Returns the current soup, generating it on first access.
    pub fn vertices(&mut self) -> &TriangleSoup {
        self.soup_mut()
    }

    /// Returns the pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    fn soup_mut(&mut self) -> &mut TriangleSoup {
        let Self { soup, shape, .. } = self;
        soup.get_or_insert_with(|| shape.generate())
    }

    /// Drops every face for which the predicate returns true.
    ///
    /// The predicate sees the three corner positions, projected onto the
    /// unit sphere when `normalize_vertices` is set (zero-length corners
    /// are passed through as zero).
    pub fn remove_faces(&mut self, mut predicate: impl FnMut(Vec3, Vec3, Vec3) -> bool) {
        let normalize = self.options.normalize_vertices;
        let soup = self.soup_mut();

        let mut kept = Vec::with_capacity(soup.vertices.len());
        for tri in soup.vertices.chunks_exact(3) {
            let sample = |v: Vec3| if normalize { v.normalize_or_zero() } else { v };
            if !predicate(sample(tri[0]), sample(tri[1]), sample(tri[2])) {
                kept.extend_from_slice(tri);
            }
        }
        soup.vertices = kept;
    }

    /// Moves every vertex to the height returned by `height`.
    ///
    /// Solid shapes scale the vertex by `height(v) / |v|` when
    /// `normalize_vertices` is set (by `height(v)` otherwise), moving it
    /// along its radial direction. Ground shapes write the returned value
    /// into Y, sampling at `(x, 0, z)`. Cylinders scale X and Z only,
    /// dividing by the X-Z ring distance when `normalize_cylinder` is set.
    /// Vertices whose divisor is zero are left untouched.
    pub fn set_vertex_height(&mut self, mut height: impl FnMut(Vec3) -> f32) {
        let style = self.style;
        let normalize = self.options.normalize_vertices;
        let normalize_tube = self.options.normalize_cylinder;
        let soup = self.soup_mut();

        match style {
            VertexStyle::Solid => {
                for v in &mut soup.vertices {
                    let divisor = if normalize { v.length() } else { 1.0 };
                    if divisor == 0.0 {
                        continue;
                    }
                    let h = height(*v) / divisor;
                    *v *= h;
                }
            }
            VertexStyle::Ground => {
                for v in &mut soup.vertices {
                    v.y = height(Vec3::new(v.x, 0.0, v.z));
                }
            }
            VertexStyle::Tube => {
                // Normalizing by the X-Z distance alone ignores Y. That
                // holds up for open tubes with enough sides (roughly 6 and
                // up) but is not correct for capped ends.
                for v in &mut soup.vertices {
                    let divisor = if normalize_tube {
                        Vec3::new(v.x, 0.0, v.z).length()
                    } else {
                        1.0
                    };
                    if divisor == 0.0 {
                        continue;
                    }
                    let h = height(*v) / divisor;
                    v.x *= h;
                    v.z *= h;
                }
            }
        }
    }

    /// Produces a per-vertex color buffer.
    ///
    /// Sampling positions follow the shape's style: unit-sphere projected
    /// when `normalize_vertices` is set, Y-zeroed on ground shapes.
    pub fn set_vertex_color(&mut self, mut color: impl FnMut(Vec3) -> Rgb) {
        let style = self.style;
        let normalize = self.options.normalize_vertices;
        let soup = self.soup_mut();

        let mut colors = Vec::with_capacity(soup.vertices.len() * 3);
        for &v in &soup.vertices {
            let c = color(sample_position(style, normalize, v));
            colors.extend_from_slice(&[c.r, c.g, c.b]);
        }
        self.colors = Some(colors);
    }

    /// Produces a per-face color buffer, replicating each face's color to
    /// its three corners.
    pub fn set_face_color(&mut self, mut color: impl FnMut(Vec3, Vec3, Vec3) -> Rgb) {
        let style = self.style;
        let normalize = self.options.normalize_vertices;
        let soup = self.soup_mut();

        let mut colors = Vec::with_capacity(soup.vertices.len() * 3);
        for tri in soup.vertices.chunks_exact(3) {
            let c = color(
                sample_position(style, normalize, tri[0]),
                sample_position(style, normalize, tri[1]),
                sample_position(style, normalize, tri[2]),
            );
            for _ in 0..3 {
                colors.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        self.colors = Some(colors);
    }

    /// Adds the returned displacement to each vertex; `None` leaves the
    /// vertex unchanged.
    pub fn deform_vertex(&mut self, mut deform: impl FnMut(Vec3) -> Option<Vec3>) {
        let soup = self.soup_mut();
        for v in &mut soup.vertices {
            if let Some(delta) = deform(*v) {
                *v += delta;
            }
        }
    }

    /// Produces a UV buffer with one pair per vertex.
    ///
    /// The function receives the vertex position (unit-sphere projected
    /// when `normalize_vertices` is set) and the corner index within its
    /// face (0, 1 or 2).
    pub fn set_uv(&mut self, mut uv: impl FnMut(Vec3, usize) -> Vec2) {
        let normalize = self.options.normalize_vertices;
        let soup = self.soup_mut();

        let mut uvs = Vec::with_capacity(soup.vertices.len() * 2);
        for (i, &v) in soup.vertices.iter().enumerate() {
            let p = if normalize { v.normalize_or_zero() } else { v };
            let st = uv(p, i % 3);
            uvs.extend_from_slice(&[st.x, st.y]);
        }
        self.uvs = Some(uvs);
    }

    /// Height pass driven by a noise field's raw samples.
    pub fn set_vertex_height_from_noise(&mut self, noise: &impl NoiseField) {
        self.set_vertex_height(|v| noise.value(v.x, v.y, v.z));
    }

    /// Per-vertex color pass driven by a noise field through a gradient.
    pub fn set_vertex_color_from_noise_gradient(
        &mut self,
        noise: &impl NoiseField,
        gradient: &ColorGradient,
    ) {
        self.set_vertex_color(|v| {
            gradient
                .color_for_value(noise.normalized_value(v.x, v.y, v.z))
                .unwrap_or(Rgb::BLACK)
        });
    }

    /// Per-face color pass: the equal-weight average of the gradient colors
    /// sampled at the three corners.
    pub fn set_face_color_from_noise_gradient(
        &mut self,
        noise: &impl NoiseField,
        gradient: &ColorGradient,
    ) {
        self.set_face_color(|a, b, c| {
            let sample = |v: Vec3| {
                gradient
                    .color_for_value(noise.normalized_value(v.x, v.y, v.z))
                    .unwrap_or(Rgb::BLACK)
            };
            Rgb::average(sample(a), sample(b), sample(c))
        });
    }

    /// Face coloring followed by height displacement.
    ///
    /// Coloring runs first so it reads positions before displacement moves
    /// them.
    pub fn set_vertex_height_and_face_color_from_noise_gradient(
        &mut self,
        noise: &impl NoiseField,
        gradient: &ColorGradient,
    ) {
        self.set_face_color_from_noise_gradient(noise, gradient);
        self.set_vertex_height_from_noise(noise);
    }

    /// Packs the current state into flat buffers.
    ///
    /// Color and UV buffers are present only if the corresponding pass ran.
    /// Normals are derived from face geometry when `compute_normals` is
    /// set. An empty shape yields empty buffers.
    pub fn build(&mut self) -> GeometryBuffers {
        let compute_normals = self.options.compute_normals;
        let soup = self.soup_mut();

        let positions = soup.to_raw();
        let normals = compute_normals.then(|| flat_normals(&soup.vertices));

        GeometryBuffers {
            positions,
            colors: self.colors.clone(),
            uvs: self.uvs.clone(),
            normals,
        }
    }
}
