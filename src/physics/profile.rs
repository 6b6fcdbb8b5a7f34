//! Profile Sampling Module
//! Maps the scalar body model elementwise over a radial sweep.

use super::Body;

/// Radii of interest as factors of the body radius, annotated on the chart.
pub const MARK_FACTORS: [f64; 11] = [0.0, 0.4, 0.8, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0];

/// Model values at one annotated radius, shown in the GUI sample table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Radial distance in cm.
    pub radius: f64,
    /// Potential in cm^2/s^2.
    pub potential: f64,
    /// Field magnitude in Gal.
    pub field: f64,
    /// Tidal gradient in 1/s^2.
    pub tidal: f64,
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Annotation radii for a body, `MARK_FACTORS` scaled by its radius.
pub fn marked_radii(body: &Body) -> Vec<f64> {
    MARK_FACTORS.iter().map(|f| f * body.radius).collect()
}

/// Potential evaluated elementwise; each radius picks its own branch.
pub fn potential_profile(body: &Body, radii: &[f64]) -> Vec<f64> {
    radii.iter().map(|&r| body.potential(r)).collect()
}

/// Field magnitude evaluated elementwise.
pub fn field_profile(body: &Body, radii: &[f64]) -> Vec<f64> {
    radii.iter().map(|&r| body.field(r)).collect()
}

/// Tidal gradient evaluated elementwise.
pub fn tidal_profile(body: &Body, radii: &[f64]) -> Vec<f64> {
    radii.iter().map(|&r| body.tidal(r)).collect()
}

/// Full model evaluation at each radius, one table row per entry.
pub fn sample_points(body: &Body, radii: &[f64]) -> Vec<SamplePoint> {
    radii
        .iter()
        .map(|&r| SamplePoint {
            radius: r,
            potential: body.potential(r),
            field: body.field(r),
            tidal: body.tidal(r),
        })
        .collect()
}
