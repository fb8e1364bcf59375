//! Status panel fields and their formatting.

use orrery_engine::StatusSink;

use crate::orbit;
use crate::registry::Body;

pub const SIM_TIME: &str = "sim_time";
pub const ZOOM: &str = "zoom";
pub const SPEED: &str = "speed";
pub const SCALE_MODE: &str = "scale_mode";
pub const FOCUSED_BODY: &str = "focused_body";
pub const BODY_POSITION: &str = "body_position";
pub const DISTANCE_SUN: &str = "distance_sun";
pub const ORBITAL_SPEED: &str = "orbital_speed";
pub const ORBITAL_PROGRESS: &str = "orbital_progress";
pub const FEATURE_INFO: &str = "feature_info";
pub const RULER_DISTANCE: &str = "ruler_distance";

/// "N days (Y.YY years)"
pub fn sim_time_label(time: f64) -> String {
    format!("{:.0} days ({:.2} years)", orbit::sim_days(time), orbit::sim_years(time))
}

/// Zoom and speed factors, e.g. "1.0x".
pub fn factor_label(value: f64) -> String {
    format!("{value:.1}x")
}

pub fn feature_info(body: &Body) -> String {
    format!("{}: {}", body.spec.name, body.spec.info)
}

/// Live readout for the focused body.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusStats {
    pub name: String,
    /// Position relative to the sun, simulation units.
    pub x: i64,
    pub y: i64,
    pub distance_au: f64,
    pub speed_kms: f64,
    pub progress: f64,
}

impl FocusStats {
    pub fn of(body: &Body, show_inclination: bool) -> Self {
        let pos = body.position(show_inclination);
        let spec = body.spec;
        let name = if spec.is_dwarf() {
            format!("{} (Dwarf)", spec.name)
        } else {
            spec.name.to_string()
        };
        Self {
            name,
            x: pos.x.round() as i64,
            y: pos.y.round() as i64,
            distance_au: orbit::units_to_au(pos.length()),
            speed_kms: orbit::orbital_speed_kms(body.angular_velocity, spec.semi_major_axis, spec.period),
            progress: orbit::orbital_progress(body.angle),
        }
    }

    pub fn write(&self, status: &mut dyn StatusSink) {
        status.set(FOCUSED_BODY, self.name.clone());
        status.set(BODY_POSITION, format!("({}, {})", self.x, self.y));
        status.set(DISTANCE_SUN, format!("{:.3} AU", self.distance_au));
        status.set(ORBITAL_SPEED, format!("{:.1} km/s", self.speed_kms));
        status.set(ORBITAL_PROGRESS, format!("{:.1}%", self.progress));
    }
}

/// Nothing focused: the panel shows "None" and no stats.
pub fn clear_focus(status: &mut dyn StatusSink) {
    status.set(FOCUSED_BODY, "None".to_string());
    for field in [BODY_POSITION, DISTANCE_SUN, ORBITAL_SPEED, ORBITAL_PROGRESS] {
        status.clear(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EARTH;
    use crate::registry::{Registry, ScaleMode};
    use orrery_engine::{Rng, StatusBoard};
    use std::f64::consts::TAU;

    #[test]
    fn time_label() {
        assert_eq!(sim_time_label(0.0), "0 days (0.00 years)");
        assert_eq!(sim_time_label(TAU * 3.0), "1096 days (3.00 years)");
    }

    #[test]
    fn factors_have_one_decimal() {
        assert_eq!(factor_label(1.0), "1.0x");
        assert_eq!(factor_label(2.26), "2.3x");
        assert_eq!(factor_label(0.1), "0.1x");
    }

    #[test]
    fn earth_stats() {
        let reg = Registry::build(ScaleMode::Visual, &mut Rng::new(2));
        let earth = &reg.planets()[EARTH];
        let stats = FocusStats::of(earth, false);
        assert_eq!(stats.name, "Earth");
        // ω·a·149.6/period with a = 140, period = 1
        assert!((stats.speed_kms - TAU * 140.0 * 149.6).abs() < 1e-6);
        assert!((stats.progress - 35.0).abs() < 1e-9);
        let pos = earth.position(false);
        assert!((stats.distance_au - pos.length() / 140.0).abs() < 1e-12);

        let mut board = StatusBoard::new();
        stats.write(&mut board);
        assert_eq!(board.get(FOCUSED_BODY), Some("Earth"));
        assert_eq!(board.get(ORBITAL_PROGRESS), Some("35.0%"));
        assert!(board.get(DISTANCE_SUN).is_some_and(|d| d.ends_with(" AU")));
        assert!(board.get(BODY_POSITION).is_some_and(|p| p.starts_with('(') && p.contains(", ")));

        clear_focus(&mut board);
        assert_eq!(board.get(FOCUSED_BODY), Some("None"));
        assert_eq!(board.get(DISTANCE_SUN), None);
    }

    #[test]
    fn dwarfs_are_marked() {
        let reg = Registry::build(ScaleMode::Visual, &mut Rng::new(2));
        let stats = FocusStats::of(&reg.dwarfs()[0], false);
        assert_eq!(stats.name, "Pluto (Dwarf)");
    }
}
