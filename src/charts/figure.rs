//! Figure Assembly Module
//! Builds a pure chart description, one trace per call, that the renderer
//! consumes in a single pass. Keeping assembly free of drawing side effects
//! lets tests assert on the figure data instead of pixels.

use egui::Color32;
use thiserror::Error;

use super::scale::{rescale, rescale_exponent, Unit};

/// Default line color (steel blue), used for the potential curve.
pub const POTENTIAL_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
/// Line color for the force curve (orange).
pub const FORCE_COLOR: Color32 = Color32::from_rgb(255, 165, 0);

#[derive(Error, Debug, PartialEq)]
pub enum FigureError {
    #[error("trace has no data points")]
    EmptySeries,
    #[error("x/y length mismatch: {x} vs {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("axis maximum {0} cannot be scaled")]
    BadMaximum(f64),
}

/// Handle to a trace added to a figure, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(pub usize);

/// Display options for one trace, mirroring the draw call's full surface.
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Radii to mark with a labelled point.
    pub annotate_x: Vec<f64>,
    /// Values at the marked radii, same length as `annotate_x`.
    pub annotate_y: Vec<f64>,
    /// Pixel offset of each annotation label from its marker.
    pub offset: (i32, i32),
    pub unit_x: Unit,
    pub unit_y: Unit,
    /// Fold a power-of-ten auto-scale into the x tick divisor.
    pub normalize_x: bool,
    /// Fold a power-of-ten auto-scale into the y tick divisor.
    pub normalize_y: bool,
    /// Legend entry for the line.
    pub line_label: String,
    /// Y-axis caption; the exponent suffix is appended during assembly.
    pub axis_label: String,
    pub color: Color32,
    /// Draw on the secondary (twin) y axis sharing the x axis.
    pub secondary: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            annotate_x: Vec::new(),
            annotate_y: Vec::new(),
            offset: (0, 0),
            unit_x: Unit::Sgs,
            unit_y: Unit::Sgs,
            normalize_x: false,
            normalize_y: false,
            line_label: String::new(),
            axis_label: String::new(),
            color: POTENTIAL_COLOR,
            secondary: false,
        }
    }
}

/// One labelled marker on a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    /// Marked value divided by the trace's y scale, two decimals.
    pub text: String,
}

/// A resolved trace: raw data coordinates plus everything the renderer
/// needs to put it on the right axis with the right tick scaling.
#[derive(Debug, Clone)]
pub struct Trace {
    pub points: Vec<(f64, f64)>,
    /// Tick divisor for the x axis (unit factor, auto-scale folded in).
    pub x_scale: f64,
    /// Tick divisor for this trace's y axis.
    pub y_scale: f64,
    /// Raw data maxima; axis limits are [0, 1.05 * max] per axis.
    pub x_max: f64,
    pub y_max: f64,
    /// Caption with the ` 1e{exp}` suffix resolved.
    pub axis_label: String,
    pub line_label: String,
    pub color: Color32,
    pub secondary: bool,
    pub offset: (i32, i32),
    pub annotations: Vec<Annotation>,
}

/// Accumulated chart description: traces in draw order plus the shared
/// x-axis caption and tick divisor owned by the primary trace.
#[derive(Debug, Clone)]
pub struct Figure {
    pub x_label: String,
    /// X tick divisor, set by the last primary (non-secondary) trace.
    pub x_scale: f64,
    pub traces: Vec<Trace>,
}

fn series_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

impl Figure {
    pub fn new(x_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            x_scale: 1.0,
            traces: Vec::new(),
        }
    }

    /// Resolve scales and annotations for one curve and append it.
    ///
    /// Secondary traces leave the figure-wide x scale untouched; their own
    /// y scale and limits are independent of the primary axis.
    pub fn add_trace(
        &mut self,
        x: &[f64],
        y: &[f64],
        opts: TraceOptions,
    ) -> Result<TraceId, FigureError> {
        if x.is_empty() || y.is_empty() {
            return Err(FigureError::EmptySeries);
        }
        if x.len() != y.len() {
            return Err(FigureError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if opts.annotate_x.len() != opts.annotate_y.len() {
            return Err(FigureError::LengthMismatch {
                x: opts.annotate_x.len(),
                y: opts.annotate_y.len(),
            });
        }

        let x_max = series_max(x);
        let y_max = series_max(y);
        if !x_max.is_finite() {
            return Err(FigureError::BadMaximum(x_max));
        }
        if !y_max.is_finite() {
            return Err(FigureError::BadMaximum(y_max));
        }

        let mut x_scale = opts.unit_x.factor();
        let mut y_scale = opts.unit_y.factor();
        if opts.normalize_x {
            if x_max <= 0.0 {
                return Err(FigureError::BadMaximum(x_max));
            }
            x_scale /= rescale(x_max);
        }
        let mut y_exponent = 0;
        if opts.normalize_y {
            if y_max <= 0.0 {
                return Err(FigureError::BadMaximum(y_max));
            }
            y_scale /= rescale(y_max);
            y_exponent = rescale_exponent(y_max);
        }

        if !opts.secondary {
            self.x_scale = x_scale;
        }

        let annotations = opts
            .annotate_x
            .iter()
            .zip(opts.annotate_y.iter())
            .map(|(&ax, &ay)| Annotation {
                x: ax,
                y: ay,
                text: format!("{:.2}", ay / y_scale),
            })
            .collect();

        self.traces.push(Trace {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            x_scale,
            y_scale,
            x_max,
            y_max,
            axis_label: format!("{} 1e{}", opts.axis_label, y_exponent),
            line_label: opts.line_label,
            color: opts.color,
            secondary: opts.secondary,
            offset: opts.offset,
            annotations,
        });
        Ok(TraceId(self.traces.len() - 1))
    }

    /// First trace on the primary axis.
    pub fn primary(&self) -> Option<&Trace> {
        self.traces.iter().find(|t| !t.secondary)
    }

    /// First trace on the secondary axis.
    pub fn secondary(&self) -> Option<&Trace> {
        self.traces.iter().find(|t| t.secondary)
    }

    /// Combined legend entries across both axes, in draw order.
    pub fn legend(&self) -> Vec<(&str, Color32)> {
        self.traces
            .iter()
            .map(|t| (t.line_label.as_str(), t.color))
            .collect()
    }
}
