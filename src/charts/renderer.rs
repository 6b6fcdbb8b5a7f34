//! Chart Renderer Module
//! Draws a [`Figure`] into an in-memory RGB buffer with plotters and hands
//! it back as an `egui::ColorImage` ready for texture upload.
//!
//! Layout:
//! 1. Primary cartesian plane over [0, 1.05 * max] of the primary trace
//! 2. Secondary (twin) y coordinate for the secondary trace, shared x axis
//! 3. Tick labels divided by each axis's scale, captions with exponent suffix
//! 4. One line per trace plus labelled markers at the annotation radii
//! 5. Combined legend, upper right

use egui::ColorImage;
use plotters::chart::DualCoordChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use thiserror::Error;

use super::figure::{Figure, Trace};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("figure has no primary trace")]
    NoPrimaryTrace,
    #[error("chart backend: {0}")]
    Backend(String),
}

fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

type DualChart<'a, 'b> = DualCoordChartContext<
    'a,
    BitMapBackend<'b>,
    Cartesian2d<RangedCoordf64, RangedCoordf64>,
    Cartesian2d<RangedCoordf64, RangedCoordf64>,
>;

/// Renders figures to RGB pixel buffers via the plotters bitmap backend.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render `figure` at the given pixel size.
    pub fn render(figure: &Figure, width: u32, height: u32) -> Result<ColorImage, RenderError> {
        let mut buf = vec![0u8; width as usize * height as usize * 3];
        Self::draw(figure, &mut buf, width, height)?;
        Ok(ColorImage::from_rgb([width as usize, height as usize], &buf))
    }

    fn draw(figure: &Figure, buf: &mut [u8], width: u32, height: u32) -> Result<(), RenderError> {
        let primary = figure.primary().ok_or(RenderError::NoPrimaryTrace)?;
        let secondary = figure.secondary();

        let x_range = 0.0..primary.x_max * 1.05;
        let y_range = 0.0..primary.y_max * 1.05;
        // Each twin axis owns its limits; fall back to the primary range
        // when nothing draws on the right.
        let y2_max = secondary.map_or(primary.y_max, |t| t.y_max);

        let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(58)
            .right_y_label_area_size(58)
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(backend)?
            .set_secondary_coord(x_range, 0.0..y2_max * 1.05);

        let x_scale = figure.x_scale;
        let y_scale = primary.y_scale;
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(primary.axis_label.as_str())
            .x_label_formatter(&|v| format!("{:.0}", v / x_scale))
            .y_label_formatter(&|v| format!("{:.0}", v / y_scale))
            .draw()
            .map_err(backend)?;

        if let Some(trace) = secondary {
            let y2_scale = trace.y_scale;
            chart
                .configure_secondary_axes()
                .y_desc(trace.axis_label.as_str())
                .y_label_formatter(&|v| format!("{:.0}", v / y2_scale))
                .draw()
                .map_err(backend)?;
        }

        for trace in &figure.traces {
            Self::draw_trace(&mut chart, trace)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(backend)?;

        root.present().map_err(backend)?;
        Ok(())
    }

    /// Line, markers and labels for one trace on its own axis.
    fn draw_trace(chart: &mut DualChart<'_, '_>, trace: &Trace) -> Result<(), RenderError> {
        let color = RGBColor(trace.color.r(), trace.color.g(), trace.color.b());
        let label_font = ("sans-serif", 13).into_font().color(&BLACK);
        let offset = trace.offset;

        if trace.secondary {
            chart
                .draw_secondary_series(LineSeries::new(
                    trace.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(backend)?
                .label(trace.line_label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
            chart
                .draw_secondary_series(trace.annotations.iter().map(|a| {
                    EmptyElement::at((a.x, a.y))
                        + Circle::new((0, 0), 3, color.filled())
                        + Text::new(a.text.clone(), offset, label_font.clone())
                }))
                .map_err(backend)?;
        } else {
            chart
                .draw_series(LineSeries::new(
                    trace.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(backend)?
                .label(trace.line_label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
            chart
                .draw_series(trace.annotations.iter().map(|a| {
                    EmptyElement::at((a.x, a.y))
                        + Circle::new((0, 0), 3, color.filled())
                        + Text::new(a.text.clone(), offset, label_font.clone())
                }))
                .map_err(backend)?;
        }
        Ok(())
    }
}
