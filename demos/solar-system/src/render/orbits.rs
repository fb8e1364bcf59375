use glam::{DVec2, Vec2};
use orrery_engine::{DrawList, GradientStop, Paint, VectorColor};

use super::{px, rgba};
use crate::catalog::BELT_GUIDE_RADIUS;
use crate::orbit::{self, BASE_TILT};
use crate::registry::Body;
use crate::simulation::Simulation;

const FOCUSED_PLANET_ORBIT: VectorColor = rgba(110, 193, 255, 0.5);
const FOCUSED_DWARF_ORBIT: VectorColor = rgba(200, 150, 255, 0.5);
const PLANET_ORBIT: VectorColor = rgba(100, 100, 150, 0.15);
const DWARF_ORBIT: VectorColor = rgba(150, 100, 200, 0.15);
const FOCUSED_WIDTH: f32 = 2.0;
const ORBIT_WIDTH: f32 = 1.0;

const PREDICTION: VectorColor = rgba(255, 255, 100, 0.4);
const PREDICTION_WIDTH: f32 = 2.0;
const PREDICTION_DASH: [f32; 2] = [5.0, 5.0];

const BELT_GUIDE: VectorColor = rgba(150, 150, 150, 0.1);

/// Trail alpha at the newest point.
const PLANET_TRAIL_ALPHA: f32 = 0x40 as f32 / 255.0;
const DWARF_TRAIL_ALPHA: f32 = 0x30 as f32 / 255.0;
const PLANET_TRAIL_WIDTH: f32 = 1.5;
const DWARF_TRAIL_WIDTH: f32 = 1.0;

/// Orbit ellipses, the focused body's look-ahead arc, and the belt guide.
pub fn paths(sim: &Simulation, draw: &mut DrawList) {
    let settings = &sim.settings;
    let cam = &sim.camera;

    draw.vectors(|v| {
        for (id, body) in sim.registry.active(settings.show_dwarf_planets) {
            let focused = cam.focus == Some(id);
            let tilt = body.tilt(settings.show_inclination);
            let center = px(cam.to_screen(body.orbit.center()));
            let radii = px(body.orbit.radii(tilt) * cam.zoom());
            let (color, width) = match (focused, body.spec.is_dwarf()) {
                (true, false) => (FOCUSED_PLANET_ORBIT, FOCUSED_WIDTH),
                (true, true) => (FOCUSED_DWARF_ORBIT, FOCUSED_WIDTH),
                (false, false) => (PLANET_ORBIT, ORBIT_WIDTH),
                (false, true) => (DWARF_ORBIT, ORBIT_WIDTH),
            };
            v.stroke_ellipse(center, radii, width, color);

            if focused && settings.show_prediction {
                let arc: Vec<Vec2> = orbit::prediction_arc(&body.orbit, body.angle, tilt)
                    .into_iter()
                    .map(|p| px(cam.to_screen(p)))
                    .collect();
                v.stroke_dashed(&arc, &PREDICTION_DASH, PREDICTION_WIDTH, PREDICTION);
            }
        }

        let guide = DVec2::new(BELT_GUIDE_RADIUS, BELT_GUIDE_RADIUS * BASE_TILT) * cam.zoom();
        v.stroke_ellipse(px(cam.origin()), px(guide), ORBIT_WIDTH, BELT_GUIDE);
    });
}

/// Fading trails, oldest point transparent.
pub fn trails(sim: &Simulation, draw: &mut DrawList) {
    let cam = &sim.camera;
    draw.vectors(|v| {
        for (_, body) in sim.registry.active(sim.settings.show_dwarf_planets) {
            if body.trail.len() < 2 {
                continue;
            }
            let (Some(oldest), Some(newest)) = (body.trail.oldest(), body.trail.newest()) else {
                continue;
            };
            let points: Vec<Vec2> = body.trail.iter().map(|p| px(cam.to_screen(p))).collect();
            let stops = trail_stops(body);
            let width = if body.spec.is_dwarf() { DWARF_TRAIL_WIDTH } else { PLANET_TRAIL_WIDTH };
            let paint = Paint::linear(px(cam.to_screen(oldest)), px(cam.to_screen(newest)), &stops);
            v.stroke_polyline(&points, width, paint);
        }
    });
}

fn trail_stops(body: &Body) -> [GradientStop; 2] {
    let colors = body.spec.colors;
    let tail = colors.first().copied().unwrap_or(VectorColor::WHITE);
    let head = colors.get(1).copied().unwrap_or(tail);
    let alpha = if body.spec.is_dwarf() { DWARF_TRAIL_ALPHA } else { PLANET_TRAIL_ALPHA };
    [
        GradientStop::new(0.0, tail.with_alpha(0.0)),
        GradientStop::new(1.0, head.with_alpha(alpha)),
    ]
}
