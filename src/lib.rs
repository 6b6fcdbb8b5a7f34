pub mod charts;
pub mod gui;
pub mod physics;

pub use charts::{rescale, ChartRenderer, Figure, FigureError, Trace, TraceOptions, Unit};
pub use gui::PotentialApp;
pub use physics::{linspace, marked_radii, Body, SamplePoint};
