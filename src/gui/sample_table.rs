//! Sample Table Widget
//! Read-only grid of model values at the marked radii.

use egui::RichText;

use crate::charts::Unit;
use crate::physics::SamplePoint;

/// Draws the marked-radius values next to the chart.
pub struct SampleTable;

impl SampleTable {
    pub fn show(ui: &mut egui::Ui, samples: &[SamplePoint]) {
        ui.add_space(6.0);
        ui.label(RichText::new("Marked radii").strong().size(14.0));
        ui.add_space(6.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("sample_table_grid")
                    .striped(true)
                    .min_col_width(58.0)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("ρ, thousand km").strong().size(11.0));
                        ui.label(RichText::new("V, cm²/s²").strong().size(11.0));
                        ui.label(RichText::new("g, Gal").strong().size(11.0));
                        ui.label(RichText::new("V″, 1/s²").strong().size(11.0));
                        ui.end_row();

                        for s in samples {
                            let rho = s.radius / Unit::ThousandKilometer.factor();
                            ui.label(RichText::new(format!("{rho:.1}")).size(11.0));
                            ui.label(RichText::new(format!("{:.3e}", s.potential)).size(11.0));
                            ui.label(RichText::new(format!("{:.2}", s.field)).size(11.0));
                            ui.label(RichText::new(format!("{:.2e}", s.tidal)).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
