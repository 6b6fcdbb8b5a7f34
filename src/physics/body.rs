//! Body Parameters Module
//! Immutable body description and the piecewise potential model.
//!
//! All quantities are in cgs units: g, cm, s. The model is closed-form for a
//! uniform-density sphere, split at the surface radius: a quadratic potential
//! well inside, a point-mass 1/r tail outside. Both branches and their first
//! two radial derivatives are exposed as scalar methods; profile helpers in
//! [`super::profile`] map them over a sweep.

use std::f64::consts::PI;

/// Gravitational constant in the cgs system, cm^3 g^-1 s^-2.
pub const GRAV_CONST_CGS: f64 = 6.674e-8;

/// Fixed parameters of the attracting body.
///
/// Density is derived from mass and radius at construction and never
/// recomputed; the struct is plain data passed by reference into every
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Mass in g.
    pub mass: f64,
    /// Radius in cm.
    pub radius: f64,
    /// Mean density in g/cm^3, mass / ((4/3) pi radius^3).
    pub density: f64,
    /// Gravitational constant in cm^3 g^-1 s^-2.
    pub grav_const: f64,
}

impl Body {
    /// Build a body from cgs inputs (mass in g, radius in cm).
    pub fn new(mass: f64, radius: f64) -> Self {
        let density = mass / (4.0 / 3.0 * PI * radius.powi(3));
        Self {
            mass,
            radius,
            density,
            grav_const: GRAV_CONST_CGS,
        }
    }

    /// Build a body from SI-style inputs (mass in kg, radius in km).
    pub fn from_si(mass_kg: f64, radius_km: f64) -> Self {
        Self::new(mass_kg * 1e3, radius_km * 1e5)
    }

    /// Gravitational potential V at radial distance `r` [cm^2/s^2].
    ///
    /// r = 0 falls in the inside branch (strict `r < radius`), so the
    /// outside division by r is never reached there.
    pub fn potential(&self, r: f64) -> f64 {
        if r < self.radius {
            2.0 / 3.0 * PI * self.grav_const * self.density * (3.0 * self.radius.powi(2) - r.powi(2))
        } else {
            4.0 / 3.0 * PI * self.grav_const * self.density * self.radius.powi(3) / r
        }
    }

    /// Field magnitude -dV/dr: gravitational acceleration at `r` [Gal].
    pub fn field(&self, r: f64) -> f64 {
        if r < self.radius {
            4.0 / 3.0 * PI * self.grav_const * self.density * r
        } else {
            4.0 / 3.0 * PI * self.grav_const * self.density * self.radius.powi(3) / r.powi(2)
        }
    }

    /// Second radial derivative term (tidal gradient) at `r` [1/s^2].
    ///
    /// Constant and negative inside the body, positive 1/r^3 tail outside.
    pub fn tidal(&self, r: f64) -> f64 {
        if r < self.radius {
            -(4.0 / 3.0) * PI * self.grav_const * self.density
        } else {
            8.0 / 3.0 * PI * self.grav_const * self.density * self.radius.powi(3) / r.powi(3)
        }
    }
}
