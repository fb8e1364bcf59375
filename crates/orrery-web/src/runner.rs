use orrery_engine::bridge::protocol::{
    HEADER_BATCH_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_MAX_BATCHES, HEADER_MAX_INSTANCES, HEADER_MAX_VECTOR_VERTICES,
    HEADER_PROTOCOL_VERSION, HEADER_STATUS_VERSION, HEADER_VECTOR_VERTEX_COUNT,
    HEADER_WORLD_HEIGHT, HEADER_WORLD_WIDTH, PROTOCOL_VERSION,
};
use orrery_engine::{
    AssetManifest, DrawList, EngineContext, FixedTimestep, Game, GameConfig, InputEvent,
    InputQueue, ProtocolLayout, RenderContext, SpriteRegistry, StatusBoard,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    draw: DrawList,
    textures: SpriteRegistry,
    status: StatusBoard,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    world_width: f32,
    world_height: f32,
    frame: u64,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let draw = DrawList::with_capacity(
            config.max_vector_vertices,
            config.max_instances,
            config.max_batches,
        );

        Self {
            game,
            ctx: EngineContext::with_seed(config.seed),
            input: InputQueue::new(),
            draw,
            textures: SpriteRegistry::new(),
            status: StatusBoard::new(),
            timestep,
            world_width: config.world_width,
            world_height: config.world_height,
            layout,
            config,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.ctx = EngineContext::with_seed(self.config.seed);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.write_header();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            if width > 0.0 && height > 0.0 {
                self.world_width = width;
                self.world_height = height;
            }
        }
        self.input.push(event);
    }

    /// Replace the texture registry from a manifest. A bad manifest keeps the old one.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.textures = SpriteRegistry::from_manifest(&manifest);
                log::info!("loaded {} textures", self.textures.len());
            }
            Err(err) => log::warn!("ignoring asset manifest: {err}"),
        }
    }

    /// Hand settings JSON to the game. A bad document leaves settings untouched.
    pub fn load_settings(&mut self, json: &str) {
        if let Err(err) = self.game.load_settings(json) {
            log::warn!("ignoring settings: {err}");
        }
    }

    /// Run one frame: fixed updates, then record the frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Queued input is seen by the first step only; with zero steps it waits.
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.ctx.advance(self.timestep.dt());
            self.input.drain();
        }

        self.draw.clear();
        {
            let mut render_ctx = RenderContext {
                draw: &mut self.draw,
                textures: &self.textures,
                status: &mut self.status,
            };
            self.game.render(&mut render_ctx);
        }

        if self.draw.vertex_count() as usize > self.layout.max_vector_vertices {
            log::warn!(
                "frame has {} vector vertices, host buffer holds {}",
                self.draw.vertex_count(),
                self.layout.max_vector_vertices
            );
        }

        self.frame += 1;
        self.write_header();
    }

    fn write_header(&mut self) {
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.draw.instance_count() as f32;
        h[HEADER_MAX_VECTOR_VERTICES] = self.layout.max_vector_vertices as f32;
        h[HEADER_VECTOR_VERTEX_COUNT] = self.draw.vertex_count() as f32;
        h[HEADER_MAX_BATCHES] = self.layout.max_batches as f32;
        h[HEADER_BATCH_COUNT] = self.draw.batch_count() as f32;
        h[HEADER_WORLD_WIDTH] = self.world_width;
        h[HEADER_WORLD_HEIGHT] = self.world_height;
        h[HEADER_STATUS_VERSION] = self.status.version() as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    }

    /// Status fields as a JSON object.
    pub fn status_json(&self) -> String {
        self.status.to_json().unwrap_or_else(|err| {
            log::warn!("status serialization failed: {err}");
            String::from("{}")
        })
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.draw.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.draw.instance_count()
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.draw.vertices_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.draw.vertex_count()
    }

    pub fn batches_ptr(&self) -> *const f32 {
        self.draw.batches_ptr()
    }

    pub fn batch_count(&self) -> u32 {
        self.draw.batch_count()
    }

    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_batches(&self) -> u32 {
        self.layout.max_batches as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use orrery_engine::{StatusSink, VectorColor};

    /// Counts steps and pointer presses; draws one rect per frame.
    struct Probe {
        steps: u32,
        presses: u32,
        theme: String,
    }

    impl Game for Probe {
        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, _ctx: &mut EngineContext, input: &InputQueue) {
            self.steps += 1;
            self.presses += input
                .iter()
                .filter(|e| matches!(e, InputEvent::PointerDown { .. }))
                .count() as u32;
        }

        fn render(&self, ctx: &mut RenderContext) {
            ctx.draw.vectors(|v| v.fill_rect(Vec2::ZERO, 4.0, 4.0, VectorColor::WHITE));
            ctx.status.set("steps", self.steps.to_string());
        }

        fn load_settings(&mut self, json: &str) -> Result<(), serde_json::Error> {
            self.theme = serde_json::from_str(json)?;
            Ok(())
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut r = GameRunner::new(Probe { steps: 0, presses: 0, theme: String::new() });
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(Probe { steps: 0, presses: 0, theme: String::new() });
        r.tick(1.0);
        assert_eq!(r.game().steps, 0);
        assert_eq!(r.batch_count(), 0);
    }

    #[test]
    fn input_is_seen_once_even_with_catch_up_steps() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        r.tick(0.105); // six steps
        assert_eq!(r.game().steps, 6);
        assert_eq!(r.game().presses, 1);
    }

    #[test]
    fn input_waits_for_a_step() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        r.tick(0.001);
        assert_eq!(r.game().presses, 0);
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().presses, 1);
    }

    #[test]
    fn frame_output_and_status_are_published() {
        let mut r = runner();
        r.tick(1.0 / 60.0);
        assert_eq!(r.vector_vertex_count(), 6);
        assert_eq!(r.batch_count(), 1);
        assert_eq!(r.status_json(), r#"{"steps":"1"}"#);
        assert_eq!(r.header[HEADER_VECTOR_VERTEX_COUNT], 6.0);
        assert_eq!(r.header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
    }

    #[test]
    fn resize_updates_world_size() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 1280.0, height: 720.0 });
        r.push_input(InputEvent::Resize { width: 0.0, height: 720.0 });
        assert_eq!((r.world_width(), r.world_height()), (1280.0, 720.0));
    }

    #[test]
    fn bad_json_is_ignored() {
        let mut r = runner();
        r.load_settings("\"dark\"");
        assert_eq!(r.game().theme, "dark");
        r.load_settings("{ nope");
        assert_eq!(r.game().theme, "dark");
        r.load_manifest("{ nope");
        assert!(r.textures.is_empty());
    }
}
