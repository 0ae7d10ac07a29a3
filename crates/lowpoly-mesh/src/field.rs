//! Scalar noise-field interface.
//!
//! The pipeline never computes noise itself; it queries a field supplied by
//! the caller. Any noise implementation works as long as it can answer the
//! two sample shapes below.

use glam::Vec3;

/// A 3D scalar field driving height displacement and gradient coloring.
pub trait NoiseField {
    /// Raw field sample at (x, y, z). Unbounded; used as a height value.
    fn value(&self, x: f32, y: f32, z: f32) -> f32;

    /// Field sample mapped into [0, 1]; used as a gradient lookup value.
    fn normalized_value(&self, x: f32, y: f32, z: f32) -> f32;

    /// Raw sample at a point.
    fn value_at(&self, p: Vec3) -> f32 {
        self.value(p.x, p.y, p.z)
    }

    /// Normalized sample at a point.
    fn normalized_value_at(&self, p: Vec3) -> f32 {
        self.normalized_value(p.x, p.y, p.z)
    }
}

impl<T: NoiseField + ?Sized> NoiseField for &T {
    fn value(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).value(x, y, z)
    }

    fn normalized_value(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).normalized_value(x, y, z)
    }
}
