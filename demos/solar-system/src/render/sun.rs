use std::f64::consts::TAU;

use glam::{DVec2, Vec2};
use orrery_engine::{DrawList, GradientStop, Paint, RadialDisc};

use super::{px, rgba};
use crate::catalog::SUN_RADIUS;
use crate::simulation::Simulation;

// ── Lens flare ───────────────────────────────────────────────────────

const FLARE_GLOWS: usize = 3;
const FLARE_RAYS: usize = 8;
/// Ray length in pixels; not scaled by zoom.
const RAY_LENGTH: f64 = 200.0;
const RAY_HALF_ANGLE: f64 = 0.1;
/// Ray rotation per unit of simulation time.
const RAY_SPIN: f64 = 0.001;

const RAY: [GradientStop; 3] = [
    GradientStop::new(0.0, rgba(255, 230, 150, 0.1)),
    GradientStop::new(0.5, rgba(255, 200, 100, 0.05)),
    GradientStop::new(1.0, rgba(255, 180, 80, 0.0)),
];

// ── Disc ─────────────────────────────────────────────────────────────

const CORONA: [GradientStop; 3] = [
    GradientStop::new(0.0, rgba(255, 200, 50, 0.3)),
    GradientStop::new(0.5, rgba(255, 180, 0, 0.1)),
    GradientStop::new(1.0, rgba(255, 160, 0, 0.0)),
];

const PHOTOSPHERE: [GradientStop; 6] = [
    GradientStop::new(0.0, rgba(0xff, 0xfa, 0xcd, 1.0)),
    GradientStop::new(0.2, rgba(0xff, 0xf9, 0xa3, 1.0)),
    GradientStop::new(0.4, rgba(0xff, 0xf1, 0x76, 1.0)),
    GradientStop::new(0.6, rgba(0xff, 0xd5, 0x4f, 1.0)),
    GradientStop::new(0.8, rgba(0xff, 0xb3, 0x00, 1.0)),
    GradientStop::new(1.0, rgba(0xff, 0x8f, 0x00, 1.0)),
];

const SURFACE_BLOBS: usize = 8;
const BLOB_COLOR: orrery_engine::VectorColor = rgba(255, 140, 0, 0.1);
/// Blob drift in radians per second.
const BLOB_DRIFT: f64 = 0.1;

/// Three soft glows and a slowly turning star of rays.
pub fn lens_flare(sim: &Simulation, draw: &mut DrawList) {
    let origin = sim.camera.origin();
    let sun_r = sim.camera.scale(SUN_RADIUS);
    let spin = sim.time * RAY_SPIN;

    draw.vectors(|v| {
        for i in 0..FLARE_GLOWS {
            let fade = [
                GradientStop::new(0.0, rgba(255, 255, 200, 0.05 / (i + 1) as f32)),
                GradientStop::new(1.0, rgba(255, 200, 100, 0.0)),
            ];
            let radius = sun_r * (3 + i) as f64;
            v.fill_radial_disc(&RadialDisc::centered(px(origin), radius as f32, &fade));
        }

        for i in 0..FLARE_RAYS {
            let angle = i as f64 / FLARE_RAYS as f64 * TAU + spin;
            let tip = |a: f64| origin + DVec2::from_angle(a) * RAY_LENGTH;
            let wedge = [px(origin), px(tip(angle - RAY_HALF_ANGLE)), px(tip(angle + RAY_HALF_ANGLE))];
            v.fill_polygon(&wedge, Paint::linear(px(origin), px(tip(angle)), &RAY));
        }
    });
}

/// Corona, shaded disc and drifting surface blobs.
pub fn disc(sim: &Simulation, draw: &mut DrawList) {
    let origin = sim.camera.origin();
    let r = sim.camera.scale(SUN_RADIUS);
    let center = px(origin);
    let radius = r as f32;

    draw.vectors(|v| {
        if sim.settings.show_glow {
            let corona = RadialDisc::centered(center, radius * 2.0, &CORONA).with_focus(center, radius * 0.5);
            v.fill_radial_disc(&corona);
        }

        let focus = center - Vec2::splat(radius * 0.2);
        v.fill_radial_disc(&RadialDisc::centered(center, radius, &PHOTOSPHERE).with_focus(focus, radius * 0.1));

        for i in 0..SURFACE_BLOBS {
            let angle = (sim.elapsed * BLOB_DRIFT + i as f64) % TAU;
            let at = origin + DVec2::from_angle(angle) * r * 0.3;
            v.fill_circle(px(at), radius * 0.15, BLOB_COLOR);
        }
    });
}
