use crate::api::status::StatusSink;
use crate::assets::registry::TextureProvider;
use crate::input::queue::InputQueue;
use crate::renderer::draw_list::DrawList;
use crate::systems::rng::Rng;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial canvas width in pixels.
    pub world_width: f32,
    /// Initial canvas height in pixels.
    pub world_height: f32,
    /// Maximum number of sprite instances per frame (default: 1024).
    pub max_instances: usize,
    /// Maximum number of vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of draw batches per frame (default: 256).
    pub max_batches: usize,
    /// Seed for the context RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 1024,
            max_vector_vertices: 65536,
            max_batches: 256,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step: apply queued input, then advance the simulation.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass that records the frame into the draw list.
    fn render(&self, ctx: &mut RenderContext);

    /// Apply host-supplied settings JSON. Games without settings ignore it.
    fn load_settings(&mut self, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

/// Mutable engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub rng: Rng,
    elapsed: f64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            elapsed: 0.0,
        }
    }

    /// Seconds of fixed steps run so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Account for one fixed step. Called by the runner after `Game::update()`.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt as f64;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a render pass may touch.
pub struct RenderContext<'a> {
    pub draw: &'a mut DrawList,
    pub textures: &'a dyn TextureProvider,
    pub status: &'a mut dyn StatusSink,
}
