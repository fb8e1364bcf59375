/// Frame composition: one pass per layer, back to front.
///
/// Passes only read the simulation. Each toggle gates exactly one pass, so a
/// disabled layer leaves every other layer's geometry untouched.

mod belt;
mod bodies;
mod orbits;
mod overlay;
mod sky;
mod sun;

use glam::{DVec2, Vec2};
use orrery_engine::{AtlasId, FontConfig, RenderContext, StatusSink, VectorColor};

use crate::registry::ScaleMode;
use crate::simulation::Simulation;
use crate::telemetry::{self, FocusStats};

// ── Fonts ────────────────────────────────────────────────────────────
//
// Glyphs are sampled, not tinted, so each label style has its own atlas.

/// White, regular. Body labels.
pub const LABEL_FONT: AtlasId = AtlasId(1);
/// Blue, bold. Focused planet label.
pub const FOCUS_FONT: AtlasId = AtlasId(2);
/// Violet, bold. Focused dwarf planet label.
pub const DWARF_FOCUS_FONT: AtlasId = AtlasId(3);
/// Grey. Moon labels.
pub const MOON_FONT: AtlasId = AtlasId(4);
/// Yellow. Ruler readout.
pub const READOUT_FONT: AtlasId = AtlasId(5);

pub(crate) fn font(atlas: AtlasId) -> FontConfig {
    FontConfig::new(atlas)
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Color from 8-bit channels and a float alpha.
pub(crate) const fn rgba(r: u8, g: u8, b: u8, a: f32) -> VectorColor {
    VectorColor::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
}

pub(crate) fn px(p: DVec2) -> Vec2 {
    p.as_vec2()
}

// ── Frame ────────────────────────────────────────────────────────────

/// Record one frame and publish the status panel.
pub fn frame(sim: &Simulation, ctx: &mut RenderContext) {
    let settings = &sim.settings;

    sky::background(sim, ctx.draw);
    if settings.show_milky_way {
        sky::milky_way(sim, ctx.draw);
    }
    sky::stars(sim, ctx.draw);
    if settings.show_lens_flare {
        sun::lens_flare(sim, ctx.draw);
    }
    if settings.show_orbits {
        orbits::paths(sim, ctx.draw);
    }
    if settings.show_trails {
        orbits::trails(sim, ctx.draw);
    }
    sun::disc(sim, ctx.draw);
    bodies::draw(sim, ctx.draw, ctx.textures);
    belt::draw(sim, ctx.draw);
    if settings.distance_ruler {
        overlay::ruler(sim, ctx.draw);
    }
    if settings.show_debug {
        overlay::debug(sim, ctx.draw);
    }

    publish(sim, ctx.status);
}

fn publish(sim: &Simulation, status: &mut dyn StatusSink) {
    let settings = &sim.settings;
    status.set(telemetry::SIM_TIME, telemetry::sim_time_label(sim.time));
    status.set(telemetry::ZOOM, telemetry::factor_label(sim.camera.zoom()));
    status.set(telemetry::SPEED, telemetry::factor_label(sim.speed));
    status.set(
        telemetry::SCALE_MODE,
        ScaleMode::from_realistic(settings.realistic_scale).label().to_string(),
    );

    match sim.focused() {
        Some(body) => {
            FocusStats::of(body, settings.show_inclination).write(status);
            status.set(telemetry::FEATURE_INFO, telemetry::feature_info(body));
        }
        None => {
            telemetry::clear_focus(status);
            status.clear(telemetry::FEATURE_INFO);
        }
    }

    let reading = settings
        .distance_ruler
        .then(|| sim.ruler.reading(&sim.registry, settings.show_inclination))
        .flatten();
    match reading {
        Some(reading) => status.set(telemetry::RULER_DISTANCE, reading.label()),
        None => status.clear(telemetry::RULER_DISTANCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, MERCURY, PLANET_COUNT};
    use crate::registry::BodyId;
    use crate::settings::Setting;
    use crate::simulation::RebuildCause;
    use orrery_engine::{BatchKind, DrawList, NoTextures, Rng, SpriteComponent, StatusBoard, TextureProvider};

    fn sim() -> Simulation {
        let mut rng = Rng::new(17);
        let mut sim = Simulation::new(1280.0, 720.0);
        sim.rebuild(RebuildCause::Startup, &mut rng);
        for _ in 0..5 {
            sim.step(1.0 / 60.0, &mut rng);
        }
        sim
    }

    fn render_with(sim: &Simulation, textures: &dyn TextureProvider) -> (DrawList, StatusBoard) {
        let mut draw = DrawList::new();
        let mut status = StatusBoard::new();
        let mut ctx = RenderContext { draw: &mut draw, textures, status: &mut status };
        frame(sim, &mut ctx);
        (draw, status)
    }

    fn render(sim: &Simulation) -> (DrawList, StatusBoard) {
        render_with(sim, &NoTextures)
    }

    /// Vertices a single pass contributes on its own.
    fn pass_vertices(sim: &Simulation, pass: fn(&Simulation, &mut DrawList)) -> u32 {
        let mut draw = DrawList::new();
        pass(sim, &mut draw);
        draw.vertex_count()
    }

    struct Atlas(SpriteComponent);

    impl TextureProvider for Atlas {
        fn texture(&self, _key: &str) -> Option<&SpriteComponent> {
            Some(&self.0)
        }
    }

    #[test]
    fn frame_starts_with_background() {
        let sim = sim();
        let (draw, _) = render(&sim);
        assert_eq!(draw.batches()[0].kind(), BatchKind::Vectors);
        let first = draw.vector_state().vertex(0).expect("background vertex");
        assert_eq!(first.a, 1.0);
        assert!(draw.vertex_count() > 0);
    }

    #[test]
    fn toggles_remove_only_their_own_pass() {
        let base = sim();
        let (full, _) = render(&base);
        let gated: [(Setting, fn(&Simulation, &mut DrawList)); 4] = [
            (Setting::Orbits, orbits::paths),
            (Setting::Trails, orbits::trails),
            (Setting::LensFlare, sun::lens_flare),
            (Setting::MilkyWay, sky::milky_way),
        ];
        for (setting, pass) in gated {
            let mut sim = sim();
            sim.settings.set(setting, false);
            let (without, _) = render(&sim);
            assert_eq!(
                full.vertex_count() - without.vertex_count(),
                pass_vertices(&base, pass),
                "{setting:?}"
            );
        }
    }

    #[test]
    fn textured_bodies_draw_sprites_between_vector_passes() {
        let sim = sim();
        let (plain, _) = render(&sim);
        assert_eq!(plain.instance_count(), 0);

        let atlas = Atlas(SpriteComponent::default());
        let (textured, _) = render_with(&sim, &atlas);
        assert_eq!(textured.instance_count(), PLANET_COUNT as u32);
        let kinds: Vec<_> = textured.batches().iter().map(|b| b.kind()).collect();
        let first_sprite = kinds.iter().position(|k| *k == BatchKind::Sprites(AtlasId(0))).expect("sprite batch");
        assert!(first_sprite > 0);
        assert_eq!(kinds.last(), Some(&BatchKind::Vectors));
    }

    #[test]
    fn labels_add_glyphs() {
        let mut sim = sim();
        let (before, _) = render(&sim);
        sim.settings.set(Setting::Labels, true);
        let (after, _) = render(&sim);
        let glyphs: usize = sim.registry.planets().iter().map(|b| b.spec.name.len()).sum();
        assert_eq!(after.instance_count() - before.instance_count(), glyphs as u32);
    }

    #[test]
    fn status_panel_tracks_focus() {
        let mut sim = sim();
        let (_, status) = render(&sim);
        assert_eq!(status.get(telemetry::FOCUSED_BODY), Some("None"));
        assert_eq!(status.get(telemetry::SCALE_MODE), Some("Visual"));
        assert_eq!(status.get(telemetry::SPEED), Some("1.0x"));
        assert_eq!(status.get(telemetry::FEATURE_INFO), None);

        sim.camera.focus = Some(BodyId(EARTH));
        let (_, status) = render(&sim);
        assert_eq!(status.get(telemetry::FOCUSED_BODY), Some("Earth"));
        assert!(status.get(telemetry::FEATURE_INFO).is_some_and(|s| s.starts_with("Earth: ")));
        assert!(status.get(telemetry::ORBITAL_SPEED).is_some_and(|s| s.ends_with(" km/s")));
    }

    #[test]
    fn ruler_reading_reaches_status() {
        let mut sim = sim();
        sim.settings.set(Setting::DistanceRuler, true);
        sim.ruler.push(BodyId(MERCURY));
        let (_, status) = render(&sim);
        assert_eq!(status.get(telemetry::RULER_DISTANCE), None);

        sim.ruler.push(BodyId(EARTH));
        let (draw, status) = render(&sim);
        let text = status.get(telemetry::RULER_DISTANCE).expect("reading");
        assert!(text.starts_with("Mercury ↔ Earth\n"));
        assert!(draw.batches().iter().any(|b| b.kind() == BatchKind::Sprites(READOUT_FONT)));

        sim.settings.set(Setting::DistanceRuler, false);
        let (_, status) = render(&sim);
        assert_eq!(status.get(telemetry::RULER_DISTANCE), None);
    }

    #[test]
    fn rendering_is_pure() {
        let sim = sim();
        let (a, _) = render(&sim);
        let (b, _) = render(&sim);
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.batches(), b.batches());
    }
}
