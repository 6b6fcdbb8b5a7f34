//! Charts module - figure assembly and rendering

mod figure;
mod renderer;
mod scale;

pub use figure::{
    Annotation, Figure, FigureError, Trace, TraceId, TraceOptions, FORCE_COLOR, POTENTIAL_COLOR,
};
pub use renderer::{ChartRenderer, RenderError};
pub use scale::{rescale, rescale_exponent, Unit};
