use glam::Vec2;
use orrery_engine::{DrawList, TextAlign, VectorColor};

use super::{font, px, rgba, READOUT_FONT};
use crate::simulation::Simulation;

// ── Ruler ────────────────────────────────────────────────────────────

const FIRST_MARK: VectorColor = VectorColor::hex(0xff5555);
const SECOND_MARK: VectorColor = VectorColor::hex(0x55ff55);
const MARK_RADIUS: f32 = 8.0;
const MARK_WIDTH: f32 = 3.0;
const LINE_DASH: [f32; 2] = [10.0, 5.0];
const LINE_WIDTH: f32 = 2.0;
const READOUT_SIZE: f32 = 12.0;
/// Readout sits this far above the line midpoint.
const READOUT_LIFT: f32 = 12.0;

// ── Debug ────────────────────────────────────────────────────────────

const AXIS: VectorColor = rgba(255, 255, 255, 0.15);
const CROSS: VectorColor = rgba(255, 255, 0, 0.5);
const CROSS_SIZE: f32 = 4.0;

/// Selection marks, and once two bodies are picked, the dashed measurement line.
pub fn ruler(sim: &Simulation, draw: &mut DrawList) {
    let incl = sim.settings.show_inclination;
    let cam = &sim.camera;
    let marks: Vec<Vec2> = sim
        .ruler
        .points()
        .filter_map(|id| sim.registry.get(id))
        .map(|body| px(cam.to_screen(body.reference_position(incl))))
        .collect();
    let reading = sim.ruler.reading(&sim.registry, incl);

    draw.vectors(|v| {
        for (i, at) in marks.iter().enumerate() {
            let color = if i == 0 { FIRST_MARK } else { SECOND_MARK };
            v.stroke_circle(*at, MARK_RADIUS, MARK_WIDTH, color);
        }
        if let Some(reading) = &reading {
            let line = [px(cam.to_screen(reading.from_pos)), px(cam.to_screen(reading.to_pos))];
            v.stroke_dashed(&line, &LINE_DASH, LINE_WIDTH, VectorColor::YELLOW);
        }
    });

    if let Some(reading) = reading {
        let mid = px(cam.to_screen(reading.midpoint())) - Vec2::new(0.0, READOUT_LIFT);
        draw.text(&reading.short_label(), mid, READOUT_SIZE, &font(READOUT_FONT), TextAlign::Center, 1.0);
    }
}

/// Axes through the sun and a cross at each body's reference position.
pub fn debug(sim: &Simulation, draw: &mut DrawList) {
    let incl = sim.settings.show_inclination;
    let cam = &sim.camera;
    let origin = px(cam.origin());
    let (w, h) = (sim.width() as f32, sim.height() as f32);

    draw.vectors(|v| {
        v.stroke_polyline(&[Vec2::new(0.0, origin.y), Vec2::new(w, origin.y)], 1.0, AXIS);
        v.stroke_polyline(&[Vec2::new(origin.x, 0.0), Vec2::new(origin.x, h)], 1.0, AXIS);
        for (_, body) in sim.registry.active(sim.settings.show_dwarf_planets) {
            let at = px(cam.to_screen(body.reference_position(incl)));
            v.stroke_polyline(&[at - Vec2::X * CROSS_SIZE, at + Vec2::X * CROSS_SIZE], 1.0, CROSS);
            v.stroke_polyline(&[at - Vec2::Y * CROSS_SIZE, at + Vec2::Y * CROSS_SIZE], 1.0, CROSS);
        }
    });
}
