/// Solar System: interactive orrery with elliptical orbits, moons and a ruler.
///
/// Vectors for everything, sprites for body textures and labels.
/// Camera: drag to pan, wheel to zoom toward the cursor, click to measure.

use glam::DVec2;
use orrery_engine::*;

use crate::camera::Gesture;
use crate::render;
use crate::settings::{Setting, Settings};
use crate::simulation::{RebuildCause, Simulation};

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 1600.0;
const WORLD_H: f32 = 900.0;
const FIXED_DT: f32 = 1.0 / 60.0;

// ── Custom event kinds from the host UI ──────────────────────────────

/// a = setting index, b = 0 off / 1 on.
const CUSTOM_SET_SETTING: u32 = 1;
/// a = slider value; time advances 0.01 × value per frame.
const CUSTOM_SET_SPEED: u32 = 2;
/// a = zoom factor.
const CUSTOM_SET_ZOOM: u32 = 3;
const CUSTOM_CYCLE_FOCUS: u32 = 4;
const CUSTOM_RESET_VIEW: u32 = 5;
const CUSTOM_TOGGLE_SCALE: u32 = 6;
const CUSTOM_TOGGLE_PAUSE: u32 = 7;

// ── Game struct ──────────────────────────────────────────────────────

pub struct SolarSystem {
    sim: Simulation,
    gesture: Gesture,
    /// Settings loaded outside a step; the rebuild waits for the next update.
    pending_rebuild: bool,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sim: Simulation::new(WORLD_W as f64, WORLD_H as f64),
            gesture: Gesture::default(),
            pending_rebuild: false,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    fn handle(&mut self, event: &InputEvent, rng: &mut Rng) {
        match *event {
            InputEvent::PointerDown { x, y } => self.gesture.press(point(x, y)),
            InputEvent::PointerMove { x, y } => {
                if let Some(delta) = self.gesture.move_to(point(x, y)) {
                    self.sim.camera.pan_by(delta);
                }
            }
            InputEvent::PointerUp { x, y } => {
                if self.gesture.release() {
                    self.sim.click(point(x, y));
                }
            }
            InputEvent::Wheel { x, y, delta } => self.sim.wheel(point(x, y), delta as f64),
            InputEvent::Resize { width, height } => self.sim.resize(width as f64, height as f64, rng),
            InputEvent::Custom { kind, a, b, .. } => self.custom(kind, a, b, rng),
        }
    }

    fn custom(&mut self, kind: u32, a: f32, b: f32, rng: &mut Rng) {
        match kind {
            CUSTOM_SET_SETTING => {
                let setting = (a.is_finite() && a >= 0.0)
                    .then(|| Setting::from_index(a as u32))
                    .flatten();
                match setting {
                    Some(setting) => self.sim.set_setting(setting, b != 0.0, rng),
                    None => log::warn!("unknown setting index {a}"),
                }
            }
            CUSTOM_SET_SPEED => self.sim.set_speed(a as f64),
            CUSTOM_SET_ZOOM => self.sim.camera.set_zoom(a as f64),
            CUSTOM_CYCLE_FOCUS => self.sim.cycle_focus(),
            CUSTOM_RESET_VIEW => self.sim.reset_view(),
            CUSTOM_TOGGLE_SCALE => self.sim.toggle_scale(rng),
            CUSTOM_TOGGLE_PAUSE => self.sim.paused = !self.sim.paused,
            _ => log::debug!("ignoring custom event {kind}"),
        }
    }
}

fn point(x: f32, y: f32) -> DVec2 {
    DVec2::new(x as f64, y as f64)
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_instances: 2048,
            max_vector_vertices: 1 << 18,
            max_batches: 512,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.sim.rebuild(RebuildCause::Startup, &mut ctx.rng);
        self.pending_rebuild = false;
        log::info!(
            "{} bodies, {} asteroids, {} stars",
            self.sim.registry.active_count(true),
            self.sim.registry.asteroids().len(),
            self.sim.starfield.stars().len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle(event, &mut ctx.rng);
        }
        if std::mem::take(&mut self.pending_rebuild) {
            self.sim.rebuild(RebuildCause::ScaleToggle, &mut ctx.rng);
        }
        self.sim.step(FIXED_DT as f64, &mut ctx.rng);
    }

    fn render(&self, ctx: &mut RenderContext) {
        render::frame(&self.sim, ctx);
    }

    fn load_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let settings = Settings::from_json(json)?;
        if self.sim.replace_settings(settings) {
            self.pending_rebuild = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, MERCURY, PLANET_COUNT};
    use crate::registry::{BodyId, ScaleMode};
    use crate::telemetry;

    fn started(seed: u64) -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::with_seed(seed);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn step(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(*event);
        }
        game.update(ctx, &input);
    }

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    fn status(game: &SolarSystem) -> StatusBoard {
        let mut draw = DrawList::new();
        let mut board = StatusBoard::new();
        let mut ctx = RenderContext { draw: &mut draw, textures: &NoTextures, status: &mut board };
        game.render(&mut ctx);
        board
    }

    fn setting(s: Setting) -> f32 {
        Setting::ALL.iter().position(|x| *x == s).expect("listed") as f32
    }

    #[test]
    fn init_populates_the_system() {
        let (game, _) = started(1);
        let sim = game.simulation();
        assert_eq!(sim.registry.active_count(false), PLANET_COUNT);
        assert_eq!(sim.registry.asteroids().len(), 200);
        assert_eq!(sim.starfield.stars().len(), 400);
    }

    #[test]
    fn focus_cycle_wraps_over_planets() {
        let (mut game, mut ctx) = started(2);
        for _ in 0..PLANET_COUNT {
            step(&mut game, &mut ctx, &[custom(CUSTOM_CYCLE_FOCUS, 0.0, 0.0)]);
        }
        assert_eq!(game.simulation().camera.focus, Some(BodyId(PLANET_COUNT - 1)));
        step(&mut game, &mut ctx, &[custom(CUSTOM_CYCLE_FOCUS, 0.0, 0.0)]);
        assert_eq!(game.simulation().camera.focus, Some(BodyId(0)));
        assert_eq!(status(&game).get(telemetry::FOCUSED_BODY), Some("Mercury"));
    }

    #[test]
    fn hiding_dwarfs_drops_their_focus() {
        let (mut game, mut ctx) = started(3);
        let dwarfs = setting(Setting::DwarfPlanets);
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SETTING, dwarfs, 1.0)]);
        for _ in 0..=PLANET_COUNT {
            step(&mut game, &mut ctx, &[custom(CUSTOM_CYCLE_FOCUS, 0.0, 0.0)]);
        }
        assert_eq!(status(&game).get(telemetry::FOCUSED_BODY), Some("Pluto (Dwarf)"));
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SETTING, dwarfs, 0.0)]);
        assert_eq!(game.simulation().camera.focus, None);
        assert_eq!(status(&game).get(telemetry::FOCUSED_BODY), Some("None"));
    }

    #[test]
    fn drag_pans_without_selecting() {
        let (mut game, mut ctx) = started(4);
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SETTING, setting(Setting::DistanceRuler), 1.0)]);
        let earth = game.simulation().registry.planets()[EARTH].reference_position(false);
        let at = game.simulation().camera.to_screen(earth).as_vec2();
        step(&mut game, &mut ctx, &[
            InputEvent::PointerDown { x: at.x, y: at.y },
            InputEvent::PointerMove { x: at.x + 30.0, y: at.y },
            InputEvent::PointerUp { x: at.x + 30.0, y: at.y },
        ]);
        assert!(game.simulation().ruler.is_empty());
        assert_eq!(game.simulation().camera.pan(), DVec2::new(30.0, 0.0));
    }

    #[test]
    fn clicks_measure_between_two_bodies() {
        let (mut game, mut ctx) = started(5);
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SETTING, setting(Setting::DistanceRuler), 1.0)]);
        for index in [MERCURY, EARTH] {
            let sim = game.simulation();
            let at = sim.camera.to_screen(sim.registry.planets()[index].reference_position(false)).as_vec2();
            step(&mut game, &mut ctx, &[
                InputEvent::PointerDown { x: at.x, y: at.y },
                InputEvent::PointerUp { x: at.x, y: at.y },
            ]);
        }
        let board = status(&game);
        let text = board.get(telemetry::RULER_DISTANCE).expect("distance");
        assert!(text.starts_with("Mercury ↔ Earth\n"));
        assert!(text.contains(" AU ("));
    }

    #[test]
    fn same_seed_same_sky() {
        let (mut a, mut ctx_a) = started(99);
        let (mut b, mut ctx_b) = started(99);
        for _ in 0..30 {
            step(&mut a, &mut ctx_a, &[]);
            step(&mut b, &mut ctx_b, &[]);
        }
        assert_eq!(a.simulation().starfield, b.simulation().starfield);
        assert_eq!(a.simulation().registry, b.simulation().registry);
    }

    #[test]
    fn scale_toggle_round_trips() {
        let (mut game, mut ctx) = started(6);
        let visual = game.simulation().registry.planets()[EARTH].display_radius;
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_SCALE, 0.0, 0.0)]);
        assert_eq!(game.simulation().registry.scale(), ScaleMode::Realistic);
        assert_eq!(status(&game).get(telemetry::SCALE_MODE), Some("Realistic"));
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_SCALE, 0.0, 0.0)]);
        assert_eq!(game.simulation().registry.scale(), ScaleMode::Visual);
        assert_eq!(game.simulation().registry.planets()[EARTH].display_radius, visual);
    }

    #[test]
    fn pause_and_speed() {
        let (mut game, mut ctx) = started(7);
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 5.0, 0.0)]);
        assert!((game.simulation().time - 0.05).abs() < 1e-9);
        assert_eq!(status(&game).get(telemetry::SPEED), Some("5.0x"));
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        step(&mut game, &mut ctx, &[]);
        assert!((game.simulation().time - 0.05).abs() < 1e-9);
    }

    #[test]
    fn zoom_events_are_clamped_and_reset() {
        let (mut game, mut ctx) = started(8);
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_ZOOM, 40.0, 0.0)]);
        assert_eq!(game.simulation().camera.zoom(), 5.0);
        step(&mut game, &mut ctx, &[InputEvent::Wheel { x: 100.0, y: 100.0, delta: -1.0 }]);
        assert!(game.simulation().camera.zoom() < 5.0);
        step(&mut game, &mut ctx, &[custom(CUSTOM_RESET_VIEW, 0.0, 0.0)]);
        assert_eq!(game.simulation().camera.zoom(), 1.0);
        assert_eq!(game.simulation().camera.pan(), DVec2::ZERO);
    }

    #[test]
    fn loaded_settings_rebuild_on_next_step() {
        let (mut game, mut ctx) = started(10);
        game.load_settings(r#"{"realistic_scale": true, "show_labels": true}"#).expect("valid json");
        assert!(game.simulation().settings.show_labels);
        assert_eq!(game.simulation().registry.scale(), ScaleMode::Visual);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.simulation().registry.scale(), ScaleMode::Realistic);
        assert!(game.load_settings("not json").is_err());
    }

    #[test]
    fn resize_recenters_the_sun() {
        let (mut game, mut ctx) = started(11);
        step(&mut game, &mut ctx, &[InputEvent::Resize { width: 1000.0, height: 500.0 }]);
        assert_eq!(game.simulation().camera.origin(), DVec2::new(500.0, 250.0));
        assert_eq!(game.simulation().width(), 1000.0);
    }

    #[test]
    fn bad_setting_index_is_ignored() {
        let (mut game, mut ctx) = started(12);
        let before = game.simulation().settings.clone();
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SETTING, -1.0, 1.0), custom(CUSTOM_SET_SETTING, 40.0, 1.0)]);
        assert_eq!(game.simulation().settings, before);
    }
}
