//! Distance ruler: pick two bodies, read the distance between them.
//!
//! Picks and measurements use each body's reference position (its starting
//! phase), not the live animated one, so the readout holds still while the
//! system moves.

use std::collections::VecDeque;

use glam::DVec2;

use crate::camera::Camera;
use crate::orbit;
use crate::registry::{BodyId, Registry};

/// Picks farther than this many screen pixels from every body select nothing.
pub const PICK_RADIUS: f64 = 50.0;
/// Selected bodies kept; a further pick evicts the oldest.
pub const RULER_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerState {
    Empty,
    OneSelected,
    TwoSelected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ruler {
    points: VecDeque<BodyId>,
}

impl Ruler {
    pub fn new() -> Self {
        Self { points: VecDeque::with_capacity(RULER_CAPACITY) }
    }

    pub fn push(&mut self, id: BodyId) {
        if self.points.len() == RULER_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(id);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Selected bodies, oldest first.
    pub fn points(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.points.iter().copied()
    }

    pub fn state(&self) -> RulerState {
        match self.points.len() {
            0 => RulerState::Empty,
            1 => RulerState::OneSelected,
            _ => RulerState::TwoSelected,
        }
    }

    /// Distance between the two selected bodies, once there are two.
    pub fn reading(&self, registry: &Registry, show_inclination: bool) -> Option<Reading> {
        let (a, b) = match (self.points.front(), self.points.back()) {
            (Some(a), Some(b)) if self.points.len() == RULER_CAPACITY => (*a, *b),
            _ => return None,
        };
        let (from, to) = (registry.get(a)?, registry.get(b)?);
        let from_pos = from.reference_position(show_inclination);
        let to_pos = to.reference_position(show_inclination);
        let au = orbit::units_to_au(from_pos.distance(to_pos));
        Some(Reading {
            from: from.spec.name,
            to: to.spec.name,
            from_pos,
            to_pos,
            au,
            mkm: orbit::au_to_mkm(au),
        })
    }
}

/// A computed ruler distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub from: &'static str,
    pub to: &'static str,
    pub from_pos: DVec2,
    pub to_pos: DVec2,
    pub au: f64,
    pub mkm: f64,
}

impl Reading {
    /// Status panel text, e.g. "Mercury ↔ Earth\n1.248 AU (186.7M km)".
    pub fn label(&self) -> String {
        format!("{} ↔ {}\n{:.3} AU ({:.1}M km)", self.from, self.to, self.au, self.mkm)
    }

    /// Short form drawn at the line midpoint.
    pub fn short_label(&self) -> String {
        format!("{:.3} AU", self.au)
    }

    pub fn midpoint(&self) -> DVec2 {
        (self.from_pos + self.to_pos) / 2.0
    }
}

/// Nearest body to a screen point, measured to reference positions.
/// Dwarf planets are candidates even while hidden.
pub fn pick_body(registry: &Registry, camera: &Camera, screen: DVec2, show_inclination: bool) -> Option<BodyId> {
    let target = camera.to_simulation(screen);
    registry
        .all()
        .map(|(id, body)| (id, camera.scale(body.reference_position(show_inclination).distance(target))))
        .filter(|(_, dist)| *dist < PICK_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, JUPITER, MARS, MERCURY};
    use crate::registry::ScaleMode;
    use orrery_engine::Rng;
    use std::f64::consts::PI;

    fn setup() -> (Registry, Camera) {
        (Registry::build(ScaleMode::Visual, &mut Rng::new(11)), Camera::new(1200.0, 900.0))
    }

    #[test]
    fn holds_at_most_two_in_fifo_order() {
        let mut ruler = Ruler::new();
        assert_eq!(ruler.state(), RulerState::Empty);
        ruler.push(BodyId(MERCURY));
        assert_eq!(ruler.state(), RulerState::OneSelected);
        ruler.push(BodyId(EARTH));
        assert_eq!(ruler.state(), RulerState::TwoSelected);
        ruler.push(BodyId(MARS));
        assert_eq!(ruler.len(), 2);
        assert_eq!(ruler.points().collect::<Vec<_>>(), vec![BodyId(EARTH), BodyId(MARS)]);
        assert_eq!(ruler.state(), RulerState::TwoSelected);
        ruler.clear();
        assert_eq!(ruler.state(), RulerState::Empty);
    }

    #[test]
    fn one_point_has_no_reading() {
        let (reg, _) = setup();
        let mut ruler = Ruler::new();
        ruler.push(BodyId(EARTH));
        assert!(ruler.reading(&reg, false).is_none());
    }

    #[test]
    fn mercury_to_earth_matches_reference_geometry() {
        let (reg, cam) = setup();
        let mut ruler = Ruler::new();
        for index in [MERCURY, EARTH] {
            let body = &reg.planets()[index];
            let click = cam.to_screen(body.reference_position(false));
            let id = pick_body(&reg, &cam, click, false).expect("pick");
            assert_eq!(id, BodyId(index));
            ruler.push(id);
        }

        // Mercury at phase 0 and Earth at 0.7π, worked out by hand.
        let mercury = glam::DVec2::new(70.0 - 70.0 * 0.206, 0.0);
        let (a, e) = (140.0_f64, 0.017_f64);
        let b = a * (1.0 - e * e).sqrt();
        let earth = glam::DVec2::new(a * (0.7 * PI).cos() - a * e, b * (0.7 * PI).sin() * 0.92);
        let expected_au = mercury.distance(earth) / 140.0;

        let reading = ruler.reading(&reg, false).expect("reading");
        assert_eq!(format!("{:.3}", reading.au), format!("{:.3}", expected_au));
        assert_eq!(reading.mkm, reading.au * 149.6);
        assert_eq!((reading.from, reading.to), ("Mercury", "Earth"));
        assert!(reading.label().starts_with("Mercury ↔ Earth\n"));
        assert!(reading.label().ends_with("M km)"));
    }

    #[test]
    fn pick_ignores_live_position() {
        let (mut reg, cam) = setup();
        for _ in 0..200 {
            reg.advance(0.05, true, false);
        }
        let jupiter = &reg.planets()[JUPITER];
        let click = cam.to_screen(jupiter.reference_position(false));
        assert_eq!(pick_body(&reg, &cam, click, false), Some(BodyId(JUPITER)));
    }

    #[test]
    fn pick_radius_is_in_screen_pixels() {
        let (reg, mut cam) = setup();
        let earth = reg.planets()[EARTH].reference_position(false);
        let click = cam.to_screen(earth) + DVec2::new(0.0, 40.0);
        assert_eq!(pick_body(&reg, &cam, click, false), Some(BodyId(EARTH)));

        // At half zoom a 60 px miss is 120 units, still 60 px on screen: too far.
        cam.set_zoom(0.5);
        let far = cam.to_screen(earth) + DVec2::new(-60.0, 0.0);
        assert_eq!(pick_body(&reg, &cam, far, false), None);
    }

    #[test]
    fn empty_space_selects_nothing() {
        let (reg, cam) = setup();
        assert_eq!(pick_body(&reg, &cam, DVec2::new(5.0, 5.0), false), None);
    }
}
