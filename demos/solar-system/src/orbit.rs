//! Orbital kinematics: pure math, no engine dependencies.
//!
//! Everything here works in zoom-free simulation space (display units, sun at
//! the origin, +y down). The viewport applies zoom and pan afterwards.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Vertical squash standing in for a fixed 3-D viewing angle.
pub const BASE_TILT: f64 = 0.92;

/// Display units per astronomical unit (Earth's semi-major axis).
pub const UNITS_PER_AU: f64 = 140.0;
/// Million kilometres per astronomical unit.
pub const MKM_PER_AU: f64 = 149.6;

/// Bodies with a semi-major axis below this many units move at [`INNER_PACING`].
pub const INNER_THRESHOLD: f64 = 200.0;
pub const INNER_PACING: f64 = 0.3;

/// Axial rotation per frame, radians.
pub const ROTATION_STEP: f64 = 0.01;

/// Forward window covered by the prediction arc, and its sampling step.
pub const PREDICTION_WINDOW: f64 = PI / 4.0;
pub const PREDICTION_STEP: f64 = 0.1;

/// Orbit geometry derived once from (a, e).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub semi_major: f64,
    pub semi_minor: f64,
    /// Distance from the ellipse center to the focus holding the sun.
    pub focal: f64,
}

impl Ellipse {
    pub fn from_elements(semi_major: f64, eccentricity: f64) -> Self {
        Self {
            semi_major,
            semi_minor: semi_major * (1.0 - eccentricity * eccentricity).sqrt(),
            focal: semi_major * eccentricity,
        }
    }

    /// Position at phase `theta`, measured from the focus.
    pub fn position(&self, theta: f64, tilt: f64) -> DVec2 {
        DVec2::new(
            self.semi_major * theta.cos() - self.focal,
            self.semi_minor * theta.sin() * tilt,
        )
    }

    /// Geometric center relative to the sun.
    pub fn center(&self) -> DVec2 {
        DVec2::new(-self.focal, 0.0)
    }

    /// Drawn radii under `tilt`.
    pub fn radii(&self, tilt: f64) -> DVec2 {
        DVec2::new(self.semi_major, (self.semi_minor * tilt).abs())
    }
}

/// Vertical compression for an orbit. With inclination display on, the base
/// tilt is further squashed by cos(inclination); the result is never negative.
pub fn view_tilt(inclination_deg: f64, show_inclination: bool) -> f64 {
    let tilt = if show_inclination && inclination_deg != 0.0 {
        BASE_TILT * inclination_deg.to_radians().cos()
    } else {
        BASE_TILT
    };
    tilt.abs()
}

/// Nominal angular velocity for an orbital period in years.
pub fn angular_velocity(period_years: f64) -> f64 {
    TAU / period_years
}

/// Visual pacing: inner bodies are slowed so they stay readable.
pub fn pacing(semi_major: f64) -> f64 {
    if semi_major < INNER_THRESHOLD {
        INNER_PACING
    } else {
        1.0
    }
}

/// Phase advance for one frame.
pub fn phase_step(angular_velocity: f64, time_speed: f64, semi_major: f64) -> f64 {
    angular_velocity * time_speed * pacing(semi_major)
}

/// Kepler's third law, normalized so 140 units orbits once per year.
pub fn asteroid_angular_velocity(distance: f64) -> f64 {
    TAU / (distance / UNITS_PER_AU).powi(3).sqrt()
}

/// Moon offset from its parent. Moons use the base tilt regardless of inclination.
pub fn moon_offset(distance: f64, angle: f64) -> DVec2 {
    DVec2::new(distance * angle.cos(), distance * angle.sin() * BASE_TILT)
}

pub fn units_to_au(units: f64) -> f64 {
    units / UNITS_PER_AU
}

pub fn au_to_mkm(au: f64) -> f64 {
    au * MKM_PER_AU
}

/// Simulation time is measured so that 2π is one Earth year.
pub fn sim_years(time: f64) -> f64 {
    time / TAU
}

pub fn sim_days(time: f64) -> f64 {
    sim_years(time) * 365.25
}

/// Rough orbital speed readout in km/s.
pub fn orbital_speed_kms(angular_velocity: f64, semi_major: f64, period_years: f64) -> f64 {
    angular_velocity * semi_major * MKM_PER_AU / period_years
}

/// Share of the current revolution completed, in percent.
pub fn orbital_progress(theta: f64) -> f64 {
    theta.rem_euclid(TAU) / TAU * 100.0
}

/// Points along the orbit from `theta` forward across [`PREDICTION_WINDOW`].
pub fn prediction_arc(ellipse: &Ellipse, theta: f64, tilt: f64) -> Vec<DVec2> {
    (0..)
        .map(|i| i as f64 * PREDICTION_STEP)
        .take_while(|offset| *offset < PREDICTION_WINDOW)
        .map(|offset| ellipse.position(theta + offset, tilt))
        .collect()
}
