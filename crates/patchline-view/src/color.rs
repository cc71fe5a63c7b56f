//! Confidence-to-color encoding.
//!
//! Confidence raised to a fixed exponent gives the blend weight; the weight
//! interpolates a neutral slate toward a warm gold that itself warms with
//! the same weight. Deterministic and unclamped: inputs are expected in
//! `[0, 1]` but the formula tolerates anything finite.

use serde::Serialize;
use std::fmt;

const GOLD_START: [f64; 3] = [255.0, 231.0, 194.0];
const GOLD_END: [f64; 3] = [244.0, 198.0, 120.0];
const SLATE: [f64; 3] = [110.0, 118.0, 163.0];

/// Exponent applied to confidence before blending; lifts low values so the
/// cold end of the ramp is not flat.
const BLEND_EXPONENT: f64 = 0.8;

/// Fixed alpha for every confidence color.
pub const ALPHA: f64 = 0.92;

/// An RGB triple with the fixed display alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    /// CSS-style `rgba(...)` form used by display surfaces.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgba({}, {}, {}, {ALPHA})", self.r, self.g, self.b)
    }

    /// Normalized `[r, g, b, a]` components for a rendering backend.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn components(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            ALPHA as f32,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

fn lerp(start: [f64; 3], end: [f64; 3], t: f64) -> [f64; 3] {
    [
        start[0] + (end[0] - start[0]) * t,
        start[1] + (end[1] - start[1]) * t,
        start[2] + (end[2] - start[2]) * t,
    ]
}

/// Map a confidence value to its display color.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence_color(confidence: f64) -> Rgba {
    let mix = confidence.powf(BLEND_EXPONENT);
    let warm = lerp(GOLD_START, GOLD_END, mix);
    let [r, g, b] = lerp(SLATE, warm, mix);
    Rgba {
        r: r.round().clamp(0.0, 255.0) as u8,
        g: g.round().clamp(0.0, 255.0) as u8,
        b: b.round().clamp(0.0, 255.0) as u8,
    }
}
