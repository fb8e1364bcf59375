use glam::{DVec2, Vec2};
use orrery_engine::{DrawList, GradientStop, Paint, RadialDisc, TextAlign, TextureProvider, VectorColor};

use super::{font, px, rgba, DWARF_FOCUS_FONT, FOCUS_FONT, LABEL_FONT, MOON_FONT};
use crate::catalog::{RingSpec, RingTone, PLANETS, VENUS};
use crate::registry::{Body, BodyId, MoonStates};
use crate::simulation::Simulation;

// ── Halo ─────────────────────────────────────────────────────────────

const PLANET_FOCUS_RING: VectorColor = rgba(110, 193, 255, 0.3);
const DWARF_FOCUS_RING: VectorColor = rgba(255, 136, 255, 0.3);
const FOCUS_RING_SCALE: f64 = 2.5;
const FOCUS_RING_WIDTH: f32 = 2.0;
const GLOW_SCALE: f64 = 1.1;
const GLOW_ALPHA: f32 = 0x20 as f32 / 255.0;

// ── Rings ────────────────────────────────────────────────────────────

const RING_BANDS: usize = 5;
const RING_WIDTH: f32 = 2.0;
/// Ring flattening for a body with no axial tilt.
const FLAT_RING_TILT: f64 = 0.3;

// ── Shading ──────────────────────────────────────────────────────────

/// Highlight offset of the fallback disc, as a fraction of the radius.
const HIGHLIGHT_OFFSET: f32 = 0.35;
const HIGHLIGHT_RADIUS: f32 = 0.1;

const TERMINATOR: [GradientStop; 3] = [
    GradientStop::new(0.0, rgba(0, 0, 0, 0.0)),
    GradientStop::new(0.5, rgba(0, 0, 0, 0.4)),
    GradientStop::new(1.0, rgba(0, 0, 0, 0.7)),
];

// ── Moons ────────────────────────────────────────────────────────────

const LUNAR: [GradientStop; 3] = [
    GradientStop::new(0.0, VectorColor::hex(0xf0f0f0)),
    GradientStop::new(0.5, VectorColor::hex(0xc0c0c0)),
    GradientStop::new(1.0, VectorColor::hex(0x808080)),
];
const MOON_MIN_RADIUS: f64 = 1.5;
const LONE_MOON_MIN_RADIUS: f64 = 2.0;
const MOON_LABEL_SIZE: f32 = 10.0;
const MOON_LABEL_GAP: f64 = 9.0;

// ── Labels ───────────────────────────────────────────────────────────

const LABEL_SIZE: f32 = 12.0;
const FOCUS_LABEL_SIZE: f32 = 14.0;
/// Label baseline below the disc edge.
const LABEL_GAP: f64 = 18.0;

/// Every displayed body, drawn top of screen first so lower bodies overlap.
pub fn draw(sim: &Simulation, draw: &mut DrawList, textures: &dyn TextureProvider) {
    let incl = sim.settings.show_inclination;
    let mut order: Vec<(BodyId, &Body, DVec2)> = sim
        .registry
        .active(sim.settings.show_dwarf_planets)
        .map(|(id, body)| (id, body, sim.camera.to_screen(body.position(incl))))
        .collect();
    order.sort_by(|a, b| a.2.y.total_cmp(&b.2.y));

    for (id, body, at) in order {
        draw_body(sim, draw, textures, body, at, sim.camera.focus == Some(id));
    }
}

fn draw_body(sim: &Simulation, draw: &mut DrawList, textures: &dyn TextureProvider, body: &Body, at: DVec2, focused: bool) {
    let settings = &sim.settings;
    let r = sim.camera.scale(body.display_radius);
    let center = px(at);
    let radius = r as f32;
    let spec = body.spec;

    draw.vectors(|v| {
        if focused {
            let ring = if spec.is_dwarf() { DWARF_FOCUS_RING } else { PLANET_FOCUS_RING };
            v.stroke_circle(center, (r * FOCUS_RING_SCALE) as f32, FOCUS_RING_WIDTH, ring);
        }
        if settings.show_glow {
            if let Some(first) = spec.colors.first() {
                v.fill_circle(center, (r * GLOW_SCALE) as f32, first.with_alpha(GLOW_ALPHA));
            }
        }
        if let Some(rings) = &spec.rings {
            for (radii, color) in ring_bands(rings, spec.axial_tilt_deg, r) {
                v.stroke_ellipse(center, radii, RING_WIDTH, color);
            }
        }
    });

    let texture = spec.texture.and_then(|key| textures.texture(key));
    match texture {
        Some(sprite) => {
            draw.sprite(sprite.atlas, sprite.instance(center.x, center.y, radius * 2.0, body.rotation as f32));
            if has_terminator(body) {
                let dir = DVec2::from_angle(body.day_night_angle) * r;
                draw.vectors(|v| {
                    v.fill_circle(center, radius, Paint::linear(px(at - dir), px(at + dir), &TERMINATOR));
                });
            }
        }
        None => {
            let stops = shading_stops(spec.colors);
            let focus = center - Vec2::splat(radius * HIGHLIGHT_OFFSET);
            draw.vectors(|v| {
                v.fill_radial_disc(&RadialDisc::centered(center, radius, &stops).with_focus(focus, radius * HIGHLIGHT_RADIUS));
            });
        }
    }

    draw_moons(sim, draw, body, at);

    if settings.show_labels || focused {
        let (atlas, size) = match (focused, spec.is_dwarf()) {
            (false, _) => (LABEL_FONT, LABEL_SIZE),
            (true, false) => (FOCUS_FONT, FOCUS_LABEL_SIZE),
            (true, true) => (DWARF_FOCUS_FONT, FOCUS_LABEL_SIZE),
        };
        let anchor = Vec2::new(center.x, (at.y + r + LABEL_GAP) as f32 - size / 2.0);
        draw.text(spec.name, anchor, size, &font(atlas), TextAlign::Center, 1.0);
    }
}

fn draw_moons(sim: &Simulation, draw: &mut DrawList, body: &Body, at: DVec2) {
    let zoom = sim.camera.zoom();
    match &body.moons {
        MoonStates::None => {}
        MoonStates::Single(moon) => {
            let pos = px(at + moon.offset() * zoom);
            let radius = (moon.spec.radius * zoom).max(LONE_MOON_MIN_RADIUS) as f32;
            let focus = pos - Vec2::splat(radius * 0.3);
            draw.vectors(|v| {
                v.fill_radial_disc(&RadialDisc::centered(pos, radius, &LUNAR).with_focus(focus, radius * 0.1));
            });
        }
        MoonStates::List(moons) => {
            if !sim.settings.show_moons {
                return;
            }
            draw.vectors(|v| {
                for moon in moons {
                    let pos = px(at + moon.offset() * zoom);
                    let radius = (moon.spec.radius * zoom).max(MOON_MIN_RADIUS) as f32;
                    v.fill_circle(pos, radius, moon.spec.color);
                }
            });
            if sim.settings.show_labels {
                let moon_font = font(MOON_FONT);
                for moon in moons {
                    let pos = at + moon.offset() * zoom;
                    let above = (pos.y - moon.spec.radius * zoom - MOON_LABEL_GAP) as f32;
                    let anchor = Vec2::new(pos.x as f32, above);
                    draw.text(moon.spec.name, anchor, MOON_LABEL_SIZE, &moon_font, TextAlign::Center, 1.0);
                }
            }
        }
    }
}

/// Night-side shading applies to tilted bodies; Venus spins too slowly to show one.
fn has_terminator(body: &Body) -> bool {
    body.spec.axial_tilt_deg != 0.0 && body.spec.name != PLANETS[VENUS].name
}

/// Evenly spaced stops over the body's palette, lit side first.
fn shading_stops(colors: &[VectorColor]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop::new(i as f32 / last, *color))
        .collect()
}

/// Radii and color of each ring band around a body of on-screen radius `r`.
fn ring_bands(rings: &RingSpec, axial_tilt_deg: f64, r: f64) -> impl Iterator<Item = (Vec2, VectorColor)> + '_ {
    let tilt = if axial_tilt_deg != 0.0 {
        axial_tilt_deg.to_radians().cos().abs()
    } else {
        FLAT_RING_TILT
    };
    let step = (rings.outer - rings.inner) / RING_BANDS as f64;
    (0..RING_BANDS).map(move |i| {
        let band = r * (rings.inner + i as f64 * step);
        let fade = rings.opacity as f32 * (1.0 - 0.1 * i as f32);
        let shade = 10 * i as u8;
        let color = match rings.tone {
            RingTone::Warm => rgba(220 - shade, 180 - shade, 120 - shade, fade),
            RingTone::Cool => rgba(150, 150, 200 - 2 * shade, fade * 0.5),
        };
        (Vec2::new(band as f32, (band * tilt) as f32), color)
    })
}
