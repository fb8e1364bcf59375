//! Background stars and shooting stars, in screen space.

use glam::DVec2;
use orrery_engine::{Rng, VectorColor};

use crate::catalog::{SHOOTING_STAR_COUNT, STAR_COUNT};

const TWINKLE_MIN: f64 = 0.3;
const TWINKLE_MAX: f64 = 1.0;
/// Shooting stars may leave the canvas by this much before respawning.
const OFFSCREEN_MARGIN: f64 = 100.0;

pub const STAR_WHITE: VectorColor = VectorColor::hex(0xffffff);
pub const STAR_BLUE: VectorColor = VectorColor::hex(0xbbddff);
pub const STAR_WARM: VectorColor = VectorColor::hex(0xffeecc);

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    /// Depth in [0, 1): deeper stars drift more with the pan.
    pub z: f64,
    pub radius: f64,
    /// Opacity change per frame; flips sign at the twinkle bounds.
    pub twinkle: f64,
    pub opacity: f64,
    pub color: VectorColor,
}

impl Star {
    fn scatter(width: f64, height: f64, rng: &mut Rng) -> Self {
        let pos = DVec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let z = rng.next_f64();
        let radius = rng.range(0.5, 2.0);
        let twinkle = rng.range(0.005, 0.02);
        let opacity = rng.next_f64();
        let color = if rng.chance(0.15) {
            if rng.chance(0.5) { STAR_BLUE } else { STAR_WARM }
        } else {
            STAR_WHITE
        };
        Self { pos, z, radius, twinkle, opacity, color }
    }

    fn twinkle(&mut self) {
        self.opacity += self.twinkle;
        if self.opacity > TWINKLE_MAX || self.opacity < TWINKLE_MIN {
            self.twinkle = -self.twinkle;
        }
    }

    /// Drawn radius: nearer stars look a little larger.
    pub fn drawn_radius(&self) -> f64 {
        self.radius * (1.0 + self.z * 0.5)
    }

    /// Fill alpha; opacity may overshoot the bounds for a frame before turning.
    pub fn alpha(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub pos: DVec2,
    /// Pixels per frame.
    pub velocity: DVec2,
    pub life: f64,
    pub max_life: f64,
}

impl ShootingStar {
    /// Spawn on a random canvas edge, heading anywhere.
    fn spawn(width: f64, height: f64, rng: &mut Rng) -> Self {
        let pos = match rng.next_int(4) {
            0 => DVec2::new(rng.range(0.0, width), 0.0),
            1 => DVec2::new(width, rng.range(0.0, height)),
            2 => DVec2::new(rng.range(0.0, width), height),
            _ => DVec2::new(0.0, rng.range(0.0, height)),
        };
        let heading = rng.range(0.0, std::f64::consts::TAU);
        let speed = rng.range(3.0, 8.0);
        Self {
            pos,
            velocity: DVec2::new(heading.cos(), heading.sin()) * speed,
            life: rng.range(60.0, 120.0),
            max_life: rng.range(60.0, 120.0),
        }
    }

    fn expired(&self, width: f64, height: f64) -> bool {
        self.life <= 0.0
            || self.pos.x < -OFFSCREEN_MARGIN
            || self.pos.x > width + OFFSCREEN_MARGIN
            || self.pos.y < -OFFSCREEN_MARGIN
            || self.pos.y > height + OFFSCREEN_MARGIN
    }

    /// Life and max life are drawn independently, so life can start above max.
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0) as f32
    }

    /// Far end of the streak.
    pub fn tail(&self) -> DVec2 {
        self.pos - self.velocity * 5.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Starfield {
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    width: f64,
    height: f64,
}

impl Starfield {
    pub fn generate(width: f64, height: f64, rng: &mut Rng) -> Self {
        let stars = (0..STAR_COUNT).map(|_| Star::scatter(width, height, rng)).collect();
        let shooting = (0..SHOOTING_STAR_COUNT).map(|_| ShootingStar::spawn(width, height, rng)).collect();
        Self { stars, shooting, width, height }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// One frame: twinkle, move shooting stars, replace any that expired.
    pub fn step(&mut self, rng: &mut Rng) {
        for star in &mut self.stars {
            star.twinkle();
        }
        let (width, height) = (self.width, self.height);
        for meteor in &mut self.shooting {
            meteor.pos += meteor.velocity;
            meteor.life -= 1.0;
            if meteor.expired(width, height) {
                *meteor = ShootingStar::spawn(width, height, rng);
            }
        }
    }
}
