//! Runtime state for every simulated body, rebuilt from the catalog.
//!
//! A rebuild happens at startup, on resize and on a scale-mode toggle. It
//! discards trails and resets every phase to the body's starting angle.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use glam::DVec2;
use orrery_engine::Rng;

use crate::catalog::{self, BodySpec, MoonSpec, Satellites, DWARF_PLANETS, PLANETS};
use crate::orbit::{self, Ellipse};

/// Positions kept per trail.
pub const TRAIL_CAPACITY: usize = 100;

/// Day/night terminator drift per frame, divided by the orbital period.
const DAY_NIGHT_STEP: f64 = 0.02;

const REALISTIC_RADIUS_DIVISOR: f64 = 10_000.0;
const REALISTIC_PLANET_FLOOR: f64 = 2.0;
const REALISTIC_DWARF_FLOOR: f64 = 1.5;

// ── Scale mode ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    Visual,
    Realistic,
}

impl ScaleMode {
    pub fn from_realistic(realistic: bool) -> Self {
        if realistic {
            ScaleMode::Realistic
        } else {
            ScaleMode::Visual
        }
    }

    /// Display radius of `spec` in this mode, before zoom.
    pub fn display_radius(self, spec: &BodySpec) -> f64 {
        match self {
            ScaleMode::Visual => spec.radius,
            ScaleMode::Realistic => {
                let floor = if spec.is_dwarf() { REALISTIC_DWARF_FLOOR } else { REALISTIC_PLANET_FLOOR };
                (spec.real_radius_km / REALISTIC_RADIUS_DIVISOR).max(floor)
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::Visual => "Visual",
            ScaleMode::Realistic => "Realistic",
        }
    }
}

// ── Trail ────────────────────────────────────────────────────────────

/// Recent simulation-space positions, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self { points: VecDeque::with_capacity(TRAIL_CAPACITY) }
    }

    /// Append a position, evicting the oldest once full.
    pub fn push(&mut self, pos: DVec2) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    pub fn oldest(&self) -> Option<DVec2> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}

// ── Moons ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct MoonState {
    pub spec: &'static MoonSpec,
    pub angle: f64,
    pub angular_velocity: f64,
}

impl MoonState {
    fn spawn(spec: &'static MoonSpec, rng: &mut Rng) -> Self {
        Self {
            spec,
            angle: rng.range(0.0, TAU),
            angular_velocity: orbit::angular_velocity(spec.period),
        }
    }

    /// Moons are not paced; they move at their nominal rate.
    fn advance(&mut self, time_speed: f64) {
        self.angle += self.angular_velocity * time_speed;
    }

    /// Offset from the parent's center in simulation space.
    pub fn offset(&self) -> DVec2 {
        orbit::moon_offset(self.spec.distance, self.angle)
    }
}

/// Runtime mirror of [`Satellites`].
#[derive(Debug, Clone, PartialEq)]
pub enum MoonStates {
    None,
    Single(MoonState),
    List(Vec<MoonState>),
}

impl MoonStates {
    fn spawn(satellites: &'static Satellites, rng: &mut Rng) -> Self {
        match satellites {
            Satellites::None => MoonStates::None,
            Satellites::Single(spec) => MoonStates::Single(MoonState::spawn(spec, rng)),
            Satellites::List(specs) => {
                MoonStates::List(specs.iter().map(|spec| MoonState::spawn(spec, rng)).collect())
            }
        }
    }

    fn advance(&mut self, time_speed: f64) {
        match self {
            MoonStates::None => {}
            MoonStates::Single(moon) => moon.advance(time_speed),
            MoonStates::List(moons) => moons.iter_mut().for_each(|m| m.advance(time_speed)),
        }
    }
}

// ── Bodies ───────────────────────────────────────────────────────────

/// Index into the combined planets-then-dwarfs list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub spec: &'static BodySpec,
    pub orbit: Ellipse,
    /// Orbital phase, radians. Only ever increases.
    pub angle: f64,
    pub angular_velocity: f64,
    /// Axial rotation, radians.
    pub rotation: f64,
    /// Direction the terminator faces, radians.
    pub day_night_angle: f64,
    /// Radius before zoom, from the active scale mode.
    pub display_radius: f64,
    pub trail: Trail,
    pub moons: MoonStates,
}

impl Body {
    fn spawn(spec: &'static BodySpec, scale: ScaleMode, rng: &mut Rng) -> Self {
        let moons = MoonStates::spawn(&spec.satellites, rng);
        Self {
            spec,
            orbit: Ellipse::from_elements(spec.semi_major_axis, spec.eccentricity),
            angle: spec.start_angle,
            angular_velocity: orbit::angular_velocity(spec.period),
            rotation: 0.0,
            day_night_angle: rng.range(0.0, TAU),
            display_radius: scale.display_radius(spec),
            trail: Trail::new(),
            moons,
        }
    }

    pub fn tilt(&self, show_inclination: bool) -> f64 {
        orbit::view_tilt(self.spec.inclination_deg, show_inclination)
    }

    /// Current position relative to the sun.
    pub fn position(&self, show_inclination: bool) -> DVec2 {
        self.orbit.position(self.angle, self.tilt(show_inclination))
    }

    /// Position at the configured starting phase. Stable across frames, so the
    /// measurement tool picks and measures against it.
    pub fn reference_position(&self, show_inclination: bool) -> DVec2 {
        self.orbit.position(self.spec.start_angle, self.tilt(show_inclination))
    }

    /// One frame of motion: phase, spin, terminator, moons, then the trail.
    pub fn advance(&mut self, time_speed: f64, show_inclination: bool) {
        self.angle += orbit::phase_step(self.angular_velocity, time_speed, self.spec.semi_major_axis);
        self.rotation += orbit::ROTATION_STEP;
        if self.spec.axial_tilt_deg != 0.0 {
            self.day_night_angle += DAY_NIGHT_STEP / self.spec.period;
        }
        self.moons.advance(time_speed);
        let pos = self.position(show_inclination);
        self.trail.push(pos);
    }
}

// ── Asteroids ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub distance: f64,
    pub angle: f64,
    pub radius: f64,
    pub angular_velocity: f64,
    /// Fill alpha.
    pub brightness: f64,
    pub inclination_deg: f64,
}

impl Asteroid {
    fn scatter(rng: &mut Rng) -> Self {
        let distance = rng.range(catalog::ASTEROID_MIN_DISTANCE, catalog::ASTEROID_MAX_DISTANCE);
        Self {
            distance,
            angle: rng.range(0.0, TAU),
            radius: rng.range(catalog::ASTEROID_MIN_RADIUS, catalog::ASTEROID_MAX_RADIUS),
            angular_velocity: orbit::asteroid_angular_velocity(distance),
            brightness: rng.range(0.3, 0.7),
            inclination_deg: rng.range(-5.0, 5.0),
        }
    }

    pub fn advance(&mut self, time_speed: f64) {
        self.angle += self.angular_velocity * time_speed;
    }

    pub fn position(&self, show_inclination: bool) -> DVec2 {
        let tilt = orbit::view_tilt(self.inclination_deg, show_inclination);
        DVec2::new(
            self.distance * self.angle.cos(),
            self.distance * self.angle.sin() * tilt,
        )
    }
}

// ── Registry ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    planets: Vec<Body>,
    dwarfs: Vec<Body>,
    asteroids: Vec<Asteroid>,
    scale: ScaleMode,
}

impl Registry {
    /// A registry with nothing in it, before the first rebuild.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(scale: ScaleMode, rng: &mut Rng) -> Self {
        let planets = PLANETS.iter().map(|spec| Body::spawn(spec, scale, rng)).collect();
        let dwarfs = DWARF_PLANETS.iter().map(|spec| Body::spawn(spec, scale, rng)).collect();
        let asteroids = (0..catalog::ASTEROID_COUNT).map(|_| Asteroid::scatter(rng)).collect();
        Self { planets, dwarfs, asteroids, scale }
    }

    pub fn scale(&self) -> ScaleMode {
        self.scale
    }

    pub fn planets(&self) -> &[Body] {
        &self.planets
    }

    pub fn dwarfs(&self) -> &[Body] {
        &self.dwarfs
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        let BodyId(index) = id;
        if index < self.planets.len() {
            self.planets.get(index)
        } else {
            self.dwarfs.get(index - self.planets.len())
        }
    }

    /// Every body, dwarfs included, with its id.
    pub fn all(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.planets.iter().chain(self.dwarfs.iter()).enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Bodies currently on display. Ids match [`Registry::all`].
    pub fn active(&self, include_dwarfs: bool) -> impl Iterator<Item = (BodyId, &Body)> {
        let count = self.active_count(include_dwarfs);
        self.all().take(count)
    }

    pub fn active_count(&self, include_dwarfs: bool) -> usize {
        if include_dwarfs {
            self.planets.len() + self.dwarfs.len()
        } else {
            self.planets.len()
        }
    }

    pub fn is_active(&self, id: BodyId, include_dwarfs: bool) -> bool {
        id.0 < self.active_count(include_dwarfs)
    }

    /// Advance one frame. Hidden dwarfs stay where they are.
    pub fn advance(&mut self, time_speed: f64, include_dwarfs: bool, show_inclination: bool) {
        for body in &mut self.planets {
            body.advance(time_speed, show_inclination);
        }
        if include_dwarfs {
            for body in &mut self.dwarfs {
                body.advance(time_speed, show_inclination);
            }
        }
        for asteroid in &mut self.asteroids {
            asteroid.advance(time_speed);
        }
    }
}
