//! GraviPlot Main Application
//! Single window with the rendered chart and a table of the marked values.

use egui::{RichText, TextureOptions};

use crate::charts::{
    ChartRenderer, Figure, FigureError, TraceOptions, Unit, FORCE_COLOR, POTENTIAL_COLOR,
};
use crate::gui::SampleTable;
use crate::physics::{
    field_profile, linspace, marked_radii, potential_profile, sample_points, Body, SamplePoint,
};

// Scenario constants. Changing the body means editing these literals;
// there is no config file or CLI surface.

/// Body radius in km.
const BODY_RADIUS_KM: f64 = 49244.0;
/// Body mass in kg.
const BODY_MASS_KG: f64 = 1.02e26;
/// Points in the radial sweep.
const SWEEP_POINTS: usize = 1000;
/// Sweep extent in body radii.
const SWEEP_EXTENT: f64 = 10.0;
/// Annotation label offset in pixels, up and to the right of each marker.
const LABEL_OFFSET: (i32, i32) = (8, -14);
/// Chart bitmap size in pixels.
const CHART_SIZE: (u32, u32) = (640, 640);

/// Main application window.
pub struct PotentialApp {
    figure: Option<Figure>,
    samples: Vec<SamplePoint>,
    chart: Option<egui::TextureHandle>,
    status: Option<String>,
}

impl PotentialApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        match build_figure() {
            Ok((figure, samples)) => Self {
                figure: Some(figure),
                samples,
                chart: None,
                status: None,
            },
            Err(e) => Self {
                figure: None,
                samples: Vec::new(),
                chart: None,
                status: Some(format!("Error: {e}")),
            },
        }
    }

    /// Render the figure and upload it as a texture on first use.
    fn ensure_chart(&mut self, ctx: &egui::Context) {
        if self.chart.is_some() || self.status.is_some() {
            return;
        }
        let Some(figure) = &self.figure else { return };
        match ChartRenderer::render(figure, CHART_SIZE.0, CHART_SIZE.1) {
            Ok(image) => {
                self.chart =
                    Some(ctx.load_texture("potential_chart", image, TextureOptions::LINEAR));
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }
}

/// Assemble the body, the radial sweep and both traces once at startup.
fn build_figure() -> Result<(Figure, Vec<SamplePoint>), FigureError> {
    let body = Body::from_si(BODY_MASS_KG, BODY_RADIUS_KM);
    let radii = linspace(0.0, SWEEP_EXTENT * body.radius, SWEEP_POINTS);
    let marks = marked_radii(&body);

    let potential = potential_profile(&body, &radii);
    let force = field_profile(&body, &radii);
    let samples = sample_points(&body, &marks);

    let mut figure = Figure::new("ρ, thousand km");
    figure.add_trace(
        &radii,
        &potential,
        TraceOptions {
            annotate_x: marks.clone(),
            annotate_y: samples.iter().map(|s| s.potential).collect(),
            offset: LABEL_OFFSET,
            unit_x: Unit::ThousandKilometer,
            normalize_y: true,
            line_label: "Potential".into(),
            axis_label: "V(ρ), cm²/s²".into(),
            color: POTENTIAL_COLOR,
            ..Default::default()
        },
    )?;
    figure.add_trace(
        &radii,
        &force,
        TraceOptions {
            annotate_x: marks,
            annotate_y: samples.iter().map(|s| s.field).collect(),
            offset: LABEL_OFFSET,
            unit_x: Unit::ThousandKilometer,
            line_label: "Force".into(),
            axis_label: "F, Gal".into(),
            color: FORCE_COLOR,
            secondary: true,
            ..Default::default()
        },
    )?;

    Ok((figure, samples))
}

impl eframe::App for PotentialApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_chart(ctx);

        egui::SidePanel::right("sample_table")
            .min_width(310.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    SampleTable::show(ui, &self.samples);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(status) = &self.status {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(status).size(16.0));
                });
            } else if let Some(chart) = &self.chart {
                ui.centered_and_justified(|ui| {
                    ui.image(chart);
                });
            }
        });
    }
}
