pub mod sprite;

pub use sprite::{AtlasId, SpriteComponent};
