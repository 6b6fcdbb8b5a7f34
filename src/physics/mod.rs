//! Physics module - uniform-sphere gravity model

mod body;
mod profile;

pub use body::{Body, GRAV_CONST_CGS};
pub use profile::{
    linspace, marked_radii, potential_profile, field_profile, tidal_profile, sample_points,
    SamplePoint, MARK_FACTORS,
};
