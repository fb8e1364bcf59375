use glam::Vec2;
use orrery_engine::{DrawList, GradientStop, Paint, RadialDisc, VectorColor};

use super::{px, rgba};
use crate::simulation::Simulation;

/// Grid resolution for full-canvas gradients.
const SKY_CELLS: u32 = 16;
const BAND_CELLS: u32 = 8;

const SPACE: [GradientStop; 3] = [
    GradientStop::new(0.0, VectorColor::hex(0x0a0a1a)),
    GradientStop::new(0.5, VectorColor::hex(0x050510)),
    GradientStop::new(1.0, VectorColor::hex(0x000000)),
];

const MILKY_WAY: [GradientStop; 5] = [
    GradientStop::new(0.0, rgba(50, 30, 80, 0.1)),
    GradientStop::new(0.3, rgba(80, 60, 120, 0.15)),
    GradientStop::new(0.5, rgba(120, 100, 180, 0.2)),
    GradientStop::new(0.7, rgba(80, 60, 120, 0.15)),
    GradientStop::new(1.0, rgba(50, 30, 80, 0.1)),
];

/// Halo radius relative to the star, for glowing stars.
const STAR_HALO: f32 = 2.5;
const STAR_HALO_ALPHA: f32 = 0.4;
const METEOR_WIDTH: f32 = 2.0;
const METEOR_HEAD: f32 = 2.0;
/// Soft wide stroke under the streak.
const METEOR_GLOW_WIDTH: f32 = 6.0;
const METEOR_GLOW_ALPHA: f32 = 0.2;

/// Dark radial wash from the canvas center.
pub fn background(sim: &Simulation, draw: &mut DrawList) {
    let (w, h) = (sim.width() as f32, sim.height() as f32);
    let center = Vec2::new(w, h) / 2.0;
    draw.vectors(|v| {
        v.fill_rect_gradient(Vec2::ZERO, w, h, SKY_CELLS, Paint::radial(center, w.max(h), &SPACE));
    });
}

/// Faint diagonal band across the sky.
pub fn milky_way(sim: &Simulation, draw: &mut DrawList) {
    let (w, h) = (sim.width() as f32, sim.height() as f32);
    draw.vectors(|v| {
        v.fill_rect_gradient(Vec2::ZERO, w, h, BAND_CELLS, Paint::linear(Vec2::ZERO, Vec2::new(w, h), &MILKY_WAY));
    });
}

/// Parallax stars, then shooting stars.
pub fn stars(sim: &Simulation, draw: &mut DrawList) {
    let glow = sim.settings.show_glow;
    draw.vectors(|v| {
        for star in sim.starfield.stars() {
            let pos = px(sim.camera.parallax(star.pos, star.z));
            let radius = star.drawn_radius() as f32;
            let alpha = star.alpha();
            if glow && star.radius > 1.0 {
                let halo = [
                    GradientStop::new(0.0, star.color.with_alpha(alpha * STAR_HALO_ALPHA)),
                    GradientStop::new(1.0, star.color.with_alpha(0.0)),
                ];
                v.fill_radial_disc(&RadialDisc::centered(pos, radius * STAR_HALO, &halo));
            }
            v.fill_circle(pos, radius, star.color.with_alpha(alpha));
        }

        for meteor in sim.starfield.shooting_stars() {
            let alpha = meteor.alpha();
            let streak = [px(meteor.pos), px(meteor.tail())];
            if glow {
                v.stroke_polyline(&streak, METEOR_GLOW_WIDTH, VectorColor::WHITE.with_alpha(alpha * METEOR_GLOW_ALPHA));
            }
            v.stroke_polyline(&streak, METEOR_WIDTH, VectorColor::WHITE.with_alpha(alpha));
            v.fill_circle(streak[0], METEOR_HEAD, VectorColor::WHITE.with_alpha(alpha));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::RebuildCause;
    use orrery_engine::Rng;

    fn sim() -> Simulation {
        let mut rng = Rng::new(21);
        let mut sim = Simulation::new(900.0, 600.0);
        sim.rebuild(RebuildCause::Startup, &mut rng);
        sim
    }

    fn star_vertices(sim: &Simulation) -> u32 {
        let mut list = DrawList::new();
        stars(sim, &mut list);
        list.vertex_count()
    }

    #[test]
    fn background_covers_the_canvas() {
        let sim = sim();
        let mut list = DrawList::new();
        background(&sim, &mut list);
        assert!(list.vertex_count() > 0);
        let (mut max_x, mut max_y) = (0.0_f32, 0.0_f32);
        for i in 0..list.vertex_count() as usize {
            let vertex = list.vector_state().vertex(i).expect("vertex");
            max_x = max_x.max(vertex.x);
            max_y = max_y.max(vertex.y);
        }
        assert!((max_x - 900.0).abs() < 1e-3);
        assert!((max_y - 600.0).abs() < 1e-3);
    }

    #[test]
    fn glow_adds_halos_and_meteor_trails() {
        let mut sim = sim();
        let with_glow = star_vertices(&sim);
        sim.settings.show_glow = false;
        let without = star_vertices(&sim);
        assert!(without > 0);
        assert!(with_glow > without);
    }
}
