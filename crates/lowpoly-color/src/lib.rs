//! Color types and gradient ramps for low-poly mesh generation.
//!
//! Provides an RGB color type with linear and HSL-space interpolation,
//! and a multi-stop gradient that maps scalar values to colors.

use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with components in the 0-1 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel (0-1).
    pub r: f32,
    /// Green channel (0-1).
    pub g: f32,
    /// Blue channel (0-1).
    pub b: f32,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green (0, 1, 0).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue (0, 0, 1).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new RGB color.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates from a hex color code (e.g., 0xFF5500).
    ///
    /// Components are mapped directly from 8-bit to 0-1, without gamma
    /// conversion.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b)
    }

    /// Creates from a Vec3.
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts to Vec3.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Converts to HSL color space.
    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < 0.0001 {
            return Hsl::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - self.r).abs() < 0.0001 {
            (self.g - self.b) / d + (if self.g < self.b { 6.0 } else { 0.0 })
        } else if (max - self.g).abs() < 0.0001 {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        Hsl::new(h / 6.0, s, l)
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Interpolation through HSL space, taking the short path around the
    /// hue wheel.
    pub fn lerp_hsl(self, other: Self, t: f32) -> Self {
        self.to_hsl().lerp(other.to_hsl(), t).to_rgb()
    }

    /// Equal-weight average of three colors.
    pub fn average(a: Self, b: Self, c: Self) -> Self {
        Self::new(
            (a.r + b.r + c.r) / 3.0,
            (a.g + b.g + c.g) / 3.0,
            (a.b + b.b + c.b) / 3.0,
        )
    }

    /// Clamps all components to [0, 1].
    pub fn clamp(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }
}

/// HSL (Hue, Saturation, Lightness) color space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsl {
    /// Hue (0-1, wraps around).
    pub h: f32,
    /// Saturation (0-1).
    pub s: f32,
    /// Lightness (0-1).
    pub l: f32,
}

impl Hsl {
    /// Creates a new HSL color.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Converts to RGB.
    pub fn to_rgb(self) -> Rgb {
        if self.s < 0.0001 {
            return Rgb::new(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;

        Rgb::new(
            hue_to_rgb(p, q, self.h + 1.0 / 3.0),
            hue_to_rgb(p, q, self.h),
            hue_to_rgb(p, q, self.h - 1.0 / 3.0),
        )
    }

    /// Linear interpolation in HSL space.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        // Handle hue wrapping
        let mut dh = other.h - self.h;
        if dh > 0.5 {
            dh -= 1.0;
        } else if dh < -0.5 {
            dh += 1.0;
        }

        Self::new(
            (self.h + dh * t).rem_euclid(1.0),
            self.s + (other.s - self.s) * t,
            self.l + (other.l - self.l) * t,
        )
    }
}

/// Helper for HSL to RGB conversion.
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ============================================================================
// Color Gradients
// ============================================================================

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientStop {
    /// Scalar breakpoint. Stops are interpreted in the order they were
    /// added and must be supplied ascending.
    pub stop: f32,
    /// Color at this breakpoint.
    pub color: Rgb,
}

impl GradientStop {
    /// Creates a new gradient stop.
    pub fn new(stop: f32, color: Rgb) -> Self {
        Self { stop, color }
    }
}

/// A multi-stop color ramp over an arbitrary scalar domain.
///
/// Stops are kept in insertion order; the gradient never sorts them.
/// Lookups assume ascending stop values.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorGradient {
    stops: Vec<GradientStop>,
    lerp_hsl: bool,
}

impl ColorGradient {
    /// Creates an empty gradient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gradient from a list of stops.
    pub fn from_stops(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            stops: stops.into_iter().collect(),
            lerp_hsl: false,
        }
    }

    /// Switches interpolation between stops to HSL space.
    pub fn with_hsl_interpolation(mut self, enabled: bool) -> Self {
        self.lerp_hsl = enabled;
        self
    }

    /// Appends a stop. Callers are responsible for keeping stops ascending.
    pub fn add_stop(&mut self, stop: f32, color: Rgb) {
        self.stops.push(GradientStop::new(stop, color));
    }

    /// Appends several stops.
    pub fn add_stops(&mut self, stops: impl IntoIterator<Item = GradientStop>) {
        self.stops.extend(stops);
    }

    /// Returns the first stop's color, if any.
    pub fn first_color(&self) -> Option<Rgb> {
        self.stops.first().map(|s| s.color)
    }

    /// Returns the last stop's color, if any.
    pub fn last_color(&self) -> Option<Rgb> {
        self.stops.last().map(|s| s.color)
    }

    /// Interpolates between the colors of stops `i` and `j` by `amt`.
    ///
    /// Returns `None` when either index is out of range.
    pub fn mix_of(&self, i: usize, j: usize, amt: f32) -> Option<Rgb> {
        let a = self.stops.get(i)?.color;
        let b = self.stops.get(j)?.color;
        if self.lerp_hsl {
            Some(a.lerp_hsl(b, amt))
        } else {
            Some(a.lerp(b, amt))
        }
    }

    /// Maps a scalar to a color.
    ///
    /// Values below the first stop clamp to the first color; values at or
    /// above the last stop clamp to the last color. In between, the value is
    /// interpolated within the unique pair of consecutive stops that
    /// strictly brackets it.
    ///
    /// A value exactly equal to an interior stop satisfies no strict
    /// bracket and falls through to the last color. This matches the ramp
    /// behavior low-poly scenes were tuned against, so it is kept as is.
    pub fn color_for_value(&self, v: f32) -> Option<Rgb> {
        let first = self.stops.first()?;
        if v < first.stop {
            return Some(first.color);
        }

        for i in 0..self.stops.len().saturating_sub(1) {
            let s1 = self.stops[i].stop;
            let s2 = self.stops[i + 1].stop;
            if s1 < v && v < s2 {
                let amt = (v - s1) / (s2 - s1);
                return self.mix_of(i, i + 1, amt);
            }
        }
        self.last_color()
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the gradient has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
