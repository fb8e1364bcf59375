pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::status::{StatusBoard, StatusSink};
pub use components::sprite::{SpriteComponent, AtlasId};
pub use crate::core::time::FixedTimestep;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::draw_list::{BatchKind, DrawBatch, DrawList};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{NoTextures, SpriteRegistry, TextureProvider};
pub use bridge::protocol::ProtocolLayout;
pub use systems::rng::Rng;
pub use systems::text::{FontConfig, TextAlign};
pub use systems::vector::{
    GradientStop, Paint, RadialDisc, VectorColor, VectorState, VectorVertex,
};
