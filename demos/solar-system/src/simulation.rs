//! Everything one frame reads and one step mutates.

use glam::DVec2;
use orrery_engine::Rng;

use crate::camera::{Camera, WHEEL_ZOOM_STEP};
use crate::measurement::{self, Ruler};
use crate::registry::{Body, BodyId, Registry, ScaleMode};
use crate::settings::{Setting, Settings};
use crate::starfield::Starfield;

/// Simulation time added per frame for each unit of the speed slider.
pub const SPEED_UNIT: f64 = 0.01;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Why the registry and sky are being regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildCause {
    Startup,
    Resize,
    ScaleToggle,
}

pub struct Simulation {
    pub settings: Settings,
    pub camera: Camera,
    pub registry: Registry,
    pub starfield: Starfield,
    pub ruler: Ruler,
    /// Accumulated simulation time; one Earth year is 2π.
    pub time: f64,
    /// Speed slider value.
    pub speed: f64,
    pub paused: bool,
    /// Seconds of unpaused steps. Drives the sun's surface motion.
    pub elapsed: f64,
    width: f64,
    height: f64,
}

impl Simulation {
    /// An empty system. Nothing orbits until the first [`Simulation::rebuild`].
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            settings: Settings::default(),
            camera: Camera::new(width, height),
            registry: Registry::empty(),
            starfield: Starfield::default(),
            ruler: Ruler::new(),
            time: 0.0,
            speed: DEFAULT_SPEED,
            paused: false,
            elapsed: 0.0,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Regenerate bodies, belt and sky. Body ids are stable, so focus and
    /// ruler selections carry over.
    pub fn rebuild(&mut self, cause: RebuildCause, rng: &mut Rng) {
        let scale = ScaleMode::from_realistic(self.settings.realistic_scale);
        self.registry = Registry::build(scale, rng);
        self.starfield = Starfield::generate(self.width, self.height, rng);
        log::debug!("rebuilt {} bodies ({cause:?}, {})", self.registry.active_count(true), scale.label());
    }

    pub fn resize(&mut self, width: f64, height: f64, rng: &mut Rng) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.resize(width, height);
        self.rebuild(RebuildCause::Resize, rng);
    }

    /// Simulation time per frame.
    pub fn time_speed(&self) -> f64 {
        SPEED_UNIT * self.speed
    }

    pub fn set_speed(&mut self, value: f64) {
        if value.is_finite() {
            self.speed = value.max(0.0);
        }
    }

    /// One frame of motion. Nothing moves while paused.
    pub fn step(&mut self, dt: f64, rng: &mut Rng) {
        if self.paused {
            return;
        }
        let speed = self.time_speed();
        self.time += speed;
        self.elapsed += dt;
        self.starfield.step(rng);
        self.registry.advance(speed, self.settings.show_dwarf_planets, self.settings.show_inclination);
    }

    /// Swap in new settings and apply their side effects. Returns true if the
    /// scale changed and the registry must be rebuilt.
    pub fn replace_settings(&mut self, settings: Settings) -> bool {
        let old = std::mem::replace(&mut self.settings, settings);
        if !self.settings.show_dwarf_planets {
            self.drop_hidden_focus();
        }
        if !self.settings.distance_ruler {
            self.ruler.clear();
        }
        old.realistic_scale != self.settings.realistic_scale
    }

    pub fn set_setting(&mut self, setting: Setting, on: bool, rng: &mut Rng) {
        let mut settings = self.settings.clone();
        if !settings.set(setting, on) {
            return;
        }
        log::debug!("{setting:?} -> {on}");
        if self.replace_settings(settings) {
            self.rebuild(RebuildCause::ScaleToggle, rng);
        }
    }

    pub fn toggle_scale(&mut self, rng: &mut Rng) {
        let on = !self.settings.get(Setting::RealisticScale);
        self.set_setting(Setting::RealisticScale, on, rng);
    }

    fn drop_hidden_focus(&mut self) {
        let include = self.settings.show_dwarf_planets;
        if let Some(id) = self.camera.focus {
            if !self.registry.is_active(id, include) {
                self.camera.focus = None;
            }
        }
    }

    /// Focus the next displayed body, wrapping; from nothing, the first.
    pub fn cycle_focus(&mut self) {
        let count = self.registry.active_count(self.settings.show_dwarf_planets);
        if count == 0 {
            return;
        }
        let next = match self.camera.focus {
            Some(id) => (id.0 + 1) % count,
            None => 0,
        };
        self.camera.focus = Some(BodyId(next));
    }

    pub fn focused(&self) -> Option<&Body> {
        let id = self.camera.focus?;
        if !self.registry.is_active(id, self.settings.show_dwarf_planets) {
            return None;
        }
        self.registry.get(id)
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    /// A click that did not become a drag. With the ruler on, selects the
    /// body under the pointer.
    pub fn click(&mut self, screen: DVec2) {
        if !self.settings.distance_ruler {
            return;
        }
        let picked = measurement::pick_body(&self.registry, &self.camera, screen, self.settings.show_inclination);
        if let Some(id) = picked {
            self.ruler.push(id);
            log::debug!("ruler picked {id:?}: {:?}", self.ruler.state());
        }
    }

    /// One wheel notch over `screen`; positive delta zooms in.
    pub fn wheel(&mut self, screen: DVec2, delta: f64) {
        let factor = if delta > 0.0 {
            WHEEL_ZOOM_STEP
        } else if delta < 0.0 {
            1.0 / WHEEL_ZOOM_STEP
        } else {
            return;
        };
        let zoom = self.camera.zoom() * factor;
        self.camera.zoom_toward(screen, zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, PLANET_COUNT};

    fn built() -> (Simulation, Rng) {
        let mut rng = Rng::new(3);
        let mut sim = Simulation::new(1200.0, 800.0);
        sim.rebuild(RebuildCause::Startup, &mut rng);
        (sim, rng)
    }

    #[test]
    fn starts_empty_until_rebuilt() {
        let sim = Simulation::new(800.0, 600.0);
        assert_eq!(sim.registry.active_count(true), 0);
        assert!(sim.starfield.stars().is_empty());
        let (sim, _) = built();
        assert_eq!(sim.registry.active_count(false), PLANET_COUNT);
        assert_eq!(sim.starfield.stars().len(), 400);
    }

    #[test]
    fn step_advances_time_by_slider() {
        let (mut sim, mut rng) = built();
        sim.set_speed(3.0);
        sim.step(1.0 / 60.0, &mut rng);
        assert!((sim.time - 0.03).abs() < 1e-12);
        let earth = sim.registry.planets()[EARTH].angle;
        sim.paused = true;
        sim.step(1.0 / 60.0, &mut rng);
        assert!((sim.time - 0.03).abs() < 1e-12);
        assert_eq!(sim.registry.planets()[EARTH].angle, earth);
    }

    #[test]
    fn negative_speed_is_floored() {
        let (mut sim, _) = built();
        sim.set_speed(-4.0);
        assert_eq!(sim.speed, 0.0);
        sim.set_speed(f64::NAN);
        assert_eq!(sim.speed, 0.0);
    }

    #[test]
    fn focus_cycles_through_planets() {
        let (mut sim, _) = built();
        assert!(sim.focused().is_none());
        let mut seen = Vec::new();
        for _ in 0..PLANET_COUNT + 1 {
            sim.cycle_focus();
            seen.push(sim.camera.focus.map(|id| id.0));
        }
        assert_eq!(seen[0], Some(0));
        assert_eq!(seen[PLANET_COUNT - 1], Some(PLANET_COUNT - 1));
        assert_eq!(seen[PLANET_COUNT], Some(0));
    }

    #[test]
    fn hiding_dwarfs_clears_dwarf_focus() {
        let (mut sim, mut rng) = built();
        sim.set_setting(Setting::DwarfPlanets, true, &mut rng);
        sim.camera.focus = Some(BodyId(PLANET_COUNT));
        assert_eq!(sim.focused().map(|b| b.spec.name), Some("Pluto"));
        sim.set_setting(Setting::DwarfPlanets, false, &mut rng);
        assert_eq!(sim.camera.focus, None);
    }

    #[test]
    fn scale_toggle_rebuilds() {
        let (mut sim, mut rng) = built();
        let visual = sim.registry.planets()[EARTH].display_radius;
        sim.toggle_scale(&mut rng);
        assert_eq!(sim.registry.scale(), ScaleMode::Realistic);
        assert_ne!(sim.registry.planets()[EARTH].display_radius, visual);
        sim.toggle_scale(&mut rng);
        assert_eq!(sim.registry.scale(), ScaleMode::Visual);
        assert_eq!(sim.registry.planets()[EARTH].display_radius, visual);
    }

    #[test]
    fn ruler_off_forgets_selection() {
        let (mut sim, mut rng) = built();
        sim.set_setting(Setting::DistanceRuler, true, &mut rng);
        let earth = sim.registry.planets()[EARTH].reference_position(false);
        sim.click(sim.camera.to_screen(earth));
        assert_eq!(sim.ruler.len(), 1);
        sim.set_setting(Setting::DistanceRuler, false, &mut rng);
        assert!(sim.ruler.is_empty());
        sim.click(sim.camera.to_screen(earth));
        assert!(sim.ruler.is_empty());
    }

    #[test]
    fn wheel_zooms_around_cursor() {
        let (mut sim, _) = built();
        let cursor = DVec2::new(900.0, 200.0);
        let under = sim.camera.to_simulation(cursor);
        sim.wheel(cursor, 1.0);
        assert!((sim.camera.zoom() - 1.1).abs() < 1e-12);
        assert!(sim.camera.to_screen(under).distance(cursor) < 1e-9);
        sim.wheel(cursor, -1.0);
        assert!((sim.camera.zoom() - 1.0).abs() < 1e-12);
        sim.wheel(cursor, 0.0);
        assert!((sim.camera.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn resize_ignores_degenerate_sizes() {
        let (mut sim, mut rng) = built();
        sim.resize(0.0, 500.0, &mut rng);
        assert_eq!((sim.width(), sim.height()), (1200.0, 800.0));
        sim.resize(640.0, 480.0, &mut rng);
        assert_eq!(sim.camera.center(), DVec2::new(320.0, 240.0));
    }
}
