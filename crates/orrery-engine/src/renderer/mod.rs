pub mod instance;
pub mod draw_list;

pub use draw_list::{BatchKind, DrawBatch, DrawList};
pub use instance::{RenderBuffer, RenderInstance};
