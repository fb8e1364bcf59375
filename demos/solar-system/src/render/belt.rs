use orrery_engine::DrawList;

use super::{px, rgba};
use crate::simulation::Simulation;

const MIN_RADIUS: f64 = 0.5;

/// Asteroid belt dots, each at its own brightness.
pub fn draw(sim: &Simulation, draw: &mut DrawList) {
    let incl = sim.settings.show_inclination;
    let cam = &sim.camera;
    draw.vectors(|v| {
        for rock in sim.registry.asteroids() {
            let at = px(cam.to_screen(rock.position(incl)));
            let radius = cam.scale(rock.radius).max(MIN_RADIUS) as f32;
            v.fill_circle(at, radius, rgba(170, 170, 170, rock.brightness as f32));
        }
    });
}
