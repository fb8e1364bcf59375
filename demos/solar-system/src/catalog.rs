/// Static body catalog: orbital elements, visual properties and trivia.
///
/// Display distances are hand-tuned (Earth at 140 units); the `real_*` fields
/// carry physical values for the realistic scale and the unit bridge.

use orrery_engine::VectorColor;

// ── Sun ──────────────────────────────────────────────────────────────

/// Sun display radius. The sun keeps this size in both scale modes.
pub const SUN_RADIUS: f64 = 50.0;

// ── Body shape ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    Dwarf,
}

/// A moon on a circular orbit around its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonSpec {
    pub name: &'static str,
    pub radius: f64,
    /// Distance from the parent's center, display units.
    pub distance: f64,
    /// Orbital period in Earth years.
    pub period: f64,
    pub color: VectorColor,
}

/// Which satellites a body carries. A body has either one moon drawn with the
/// grey moon shading, or a list of colored moons gated by the moon toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Satellites {
    None,
    Single(MoonSpec),
    List(&'static [MoonSpec]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingTone {
    /// Bright ice and dust bands.
    Warm,
    /// Faint dark bands, drawn at half opacity.
    Cool,
}

/// Ring system as ratios of the body radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner: f64,
    pub outer: f64,
    pub opacity: f64,
    pub tone: RingTone,
}

/// Immutable description of one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub kind: BodyKind,
    /// Stylized display radius.
    pub radius: f64,
    pub real_radius_km: f64,
    /// Semi-major axis in display units.
    pub semi_major_axis: f64,
    pub real_semi_major_au: f64,
    pub eccentricity: f64,
    /// Orbital period in Earth years.
    pub period: f64,
    pub inclination_deg: f64,
    pub axial_tilt_deg: f64,
    /// Phase at simulation time zero, radians.
    pub start_angle: f64,
    /// Shading stops from lit side to dark side.
    pub colors: &'static [VectorColor],
    pub rings: Option<RingSpec>,
    pub satellites: Satellites,
    /// Key handed to the texture provider, if this body has a texture.
    pub texture: Option<&'static str>,
    pub info: &'static str,
}

impl BodySpec {
    pub fn is_dwarf(&self) -> bool {
        self.kind == BodyKind::Dwarf
    }
}

// ── Planets ──────────────────────────────────────────────────────────

pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

const fn moon(name: &'static str, radius: f64, distance: f64, period: f64, rgb: u32) -> MoonSpec {
    MoonSpec { name, radius, distance, period, color: VectorColor::hex(rgb) }
}

const LUNA: MoonSpec = moon("Moon", 4.0, 20.0, 0.0748, 0xc0c0c0);
const CHARON: MoonSpec = moon("Charon", 2.0, 12.0, 0.0175, 0xa0a0a0);

static JOVIAN_MOONS: [MoonSpec; 4] = [
    moon("Io",       2.5, 35.0, 0.00485, 0xffdb58),
    moon("Europa",   2.3, 42.0, 0.00973, 0xe8dcc0),
    moon("Ganymede", 3.0, 50.0, 0.0196,  0x9d9d9d),
    moon("Callisto", 2.7, 60.0, 0.0457,  0x7a7a7a),
];
static SATURNIAN_MOONS: [MoonSpec; 2] = [
    moon("Titan", 3.0, 55.0, 0.0437, 0xffa500),
    moon("Rhea",  1.5, 45.0, 0.0124, 0xcccccc),
];
static URANIAN_MOONS: [MoonSpec; 2] = [
    moon("Titania", 1.8, 38.0, 0.0238, 0xaaddff),
    moon("Oberon",  1.7, 48.0, 0.0368, 0x88bbff),
];
static NEPTUNIAN_MOONS: [MoonSpec; 1] = [
    moon("Triton", 2.0, 40.0, 0.0161, 0xff88cc),
];

const fn rgb(hex: u32) -> VectorColor {
    VectorColor::hex(hex)
}

pub static PLANETS: [BodySpec; PLANET_COUNT] = [
    BodySpec {
        name: "Mercury", kind: BodyKind::Planet,
        radius: 5.0, real_radius_km: 2439.7,
        semi_major_axis: 70.0, real_semi_major_au: 0.387, eccentricity: 0.206, period: 0.241,
        inclination_deg: 7.0, axial_tilt_deg: 0.034, start_angle: 0.0,
        colors: &[rgb(0xc4c4c4), rgb(0x8a8a8a), rgb(0x5a5a5a)],
        rings: None,
        satellites: Satellites::None,
        texture: Some("mercury"),
        info: "Smallest planet with highly elliptical orbit. Orbital inclination: 7°",
    },
    BodySpec {
        name: "Venus", kind: BodyKind::Planet,
        radius: 12.0, real_radius_km: 6051.8,
        semi_major_axis: 100.0, real_semi_major_au: 0.723, eccentricity: 0.007, period: 0.615,
        inclination_deg: 3.4, axial_tilt_deg: 177.4, start_angle: std::f64::consts::PI * 0.3,
        colors: &[rgb(0xfff5e6), rgb(0xf4d7a0), rgb(0xd4b58c)],
        rings: None,
        satellites: Satellites::None,
        texture: Some("venus"),
        info: "Hottest planet. Rotates backwards! Inclination: 3.4°",
    },
    BodySpec {
        name: "Earth", kind: BodyKind::Planet,
        radius: 13.0, real_radius_km: 6371.0,
        semi_major_axis: 140.0, real_semi_major_au: 1.0, eccentricity: 0.017, period: 1.0,
        inclination_deg: 0.0, axial_tilt_deg: 23.5, start_angle: std::f64::consts::PI * 0.7,
        colors: &[rgb(0x6ec1ff), rgb(0x2e86c1), rgb(0x0a4a7a), rgb(0x133f73)],
        rings: None,
        satellites: Satellites::Single(LUNA),
        texture: Some("earth"),
        info: "Our home! Axial tilt: 23.5° (causes seasons). The Moon orbits in 27.3 days.",
    },
    BodySpec {
        name: "Mars", kind: BodyKind::Planet,
        radius: 8.0, real_radius_km: 3389.5,
        semi_major_axis: 180.0, real_semi_major_au: 1.524, eccentricity: 0.093, period: 1.881,
        inclination_deg: 1.9, axial_tilt_deg: 25.2, start_angle: std::f64::consts::PI * 1.2,
        colors: &[rgb(0xff9f80), rgb(0xff7f50), rgb(0xb03d1d)],
        rings: None,
        satellites: Satellites::None,
        texture: Some("mars"),
        info: "The Red Planet. Similar axial tilt to Earth (25.2°). Inclination: 1.9°",
    },
    BodySpec {
        name: "Jupiter", kind: BodyKind::Planet,
        radius: 25.0, real_radius_km: 69911.0,
        semi_major_axis: 240.0, real_semi_major_au: 5.203, eccentricity: 0.048, period: 11.86,
        inclination_deg: 1.3, axial_tilt_deg: 3.1, start_angle: std::f64::consts::PI * 1.8,
        colors: &[rgb(0xffecd2), rgb(0xffd9a0), rgb(0xd4a574), rgb(0xb07250)],
        rings: Some(RingSpec { inner: 1.4, outer: 1.5, opacity: 0.1, tone: RingTone::Cool }),
        satellites: Satellites::List(&JOVIAN_MOONS),
        texture: Some("jupiter"),
        info: "Largest planet with faint rings. 95 known moons! Axial tilt: only 3.1°",
    },
    BodySpec {
        name: "Saturn", kind: BodyKind::Planet,
        radius: 22.0, real_radius_km: 58232.0,
        semi_major_axis: 300.0, real_semi_major_au: 9.537, eccentricity: 0.054, period: 29.46,
        inclination_deg: 2.5, axial_tilt_deg: 26.7, start_angle: std::f64::consts::PI * 0.5,
        colors: &[rgb(0xfff8d4), rgb(0xf4e8b0), rgb(0xd4c08c)],
        rings: Some(RingSpec { inner: 1.3, outer: 2.3, opacity: 0.6, tone: RingTone::Warm }),
        satellites: Satellites::List(&SATURNIAN_MOONS),
        texture: Some("saturn"),
        info: "Famous for spectacular rings. Titan is larger than Mercury! Inclination: 2.5°",
    },
    BodySpec {
        name: "Uranus", kind: BodyKind::Planet,
        radius: 18.0, real_radius_km: 25362.0,
        semi_major_axis: 360.0, real_semi_major_au: 19.191, eccentricity: 0.047, period: 84.01,
        inclination_deg: 0.8, axial_tilt_deg: 97.8, start_angle: std::f64::consts::PI * 1.4,
        colors: &[rgb(0xd0f0ff), rgb(0xb0d8f0), rgb(0x4da3cc)],
        rings: Some(RingSpec { inner: 1.4, outer: 1.9, opacity: 0.15, tone: RingTone::Cool }),
        satellites: Satellites::List(&URANIAN_MOONS),
        texture: Some("uranus"),
        info: "Ice giant tilted on its side (97.8°)! Has 13 known rings. Inclination: 0.8°",
    },
    BodySpec {
        name: "Neptune", kind: BodyKind::Planet,
        radius: 17.0, real_radius_km: 24622.0,
        semi_major_axis: 420.0, real_semi_major_au: 30.069, eccentricity: 0.009, period: 164.8,
        inclination_deg: 1.8, axial_tilt_deg: 28.3, start_angle: std::f64::consts::PI * 0.9,
        colors: &[rgb(0x8cb3ff), rgb(0x66a3ff), rgb(0x3d6fcc), rgb(0x1c3fa0)],
        rings: Some(RingSpec { inner: 1.4, outer: 1.7, opacity: 0.1, tone: RingTone::Cool }),
        satellites: Satellites::List(&NEPTUNIAN_MOONS),
        texture: Some("neptune"),
        info: "Farthest planet. Triton orbits backwards! 164-year orbit. Inclination: 1.8°",
    },
];

// ── Dwarf planets ────────────────────────────────────────────────────

pub const PLUTO: usize = 0;
pub const CERES: usize = 1;
pub const DWARF_COUNT: usize = 2;

pub static DWARF_PLANETS: [BodySpec; DWARF_COUNT] = [
    BodySpec {
        name: "Pluto", kind: BodyKind::Dwarf,
        radius: 4.0, real_radius_km: 1188.3,
        semi_major_axis: 480.0, real_semi_major_au: 39.48, eccentricity: 0.248, period: 248.0,
        inclination_deg: 17.2, axial_tilt_deg: 122.5, start_angle: std::f64::consts::PI * 0.2,
        colors: &[rgb(0xe8d4b0), rgb(0xc8b090), rgb(0xa89070)],
        rings: None,
        satellites: Satellites::Single(CHARON),
        texture: None,
        info: "Dwarf planet with extreme 17.2° inclination and 248-year orbit!",
    },
    BodySpec {
        name: "Ceres", kind: BodyKind::Dwarf,
        radius: 3.0, real_radius_km: 473.0,
        semi_major_axis: 210.0, real_semi_major_au: 2.77, eccentricity: 0.076, period: 4.6,
        inclination_deg: 10.6, axial_tilt_deg: 4.0, start_angle: std::f64::consts::PI * 1.5,
        colors: &[rgb(0xb8b8b8), rgb(0x989898), rgb(0x787878)],
        rings: None,
        satellites: Satellites::None,
        texture: None,
        info: "Largest asteroid belt object. Dwarf planet in the asteroid belt!",
    },
];

// ── Asteroid belt ────────────────────────────────────────────────────

pub const ASTEROID_COUNT: usize = 200;
pub const ASTEROID_MIN_DISTANCE: f64 = 200.0;
pub const ASTEROID_MAX_DISTANCE: f64 = 215.0;
pub const ASTEROID_MIN_RADIUS: f64 = 0.8;
pub const ASTEROID_MAX_RADIUS: f64 = 2.5;
/// Radius of the faint guide ellipse drawn through the belt.
pub const BELT_GUIDE_RADIUS: f64 = 207.0;

// ── Background ───────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 400;
pub const SHOOTING_STAR_COUNT: usize = 3;
