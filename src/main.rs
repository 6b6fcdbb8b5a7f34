//! GraviPlot - Uniform-Sphere Gravity Potential & Field Chart Viewer
//!
//! Charts the piecewise analytical potential of a uniform-density sphere and
//! its radial derivative on a shared dual-axis figure.

use eframe::egui;
use graviplot::PotentialApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("GraviPlot"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "GraviPlot",
        options,
        Box::new(|cc| Ok(Box::new(PotentialApp::new(cc)))),
    )
}
