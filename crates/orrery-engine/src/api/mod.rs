pub mod game;
pub mod status;
