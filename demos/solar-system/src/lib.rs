use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod camera;
mod catalog;
mod game;
mod measurement;
mod orbit;
mod registry;
mod render;
mod settings;
mod simulation;
mod starfield;
mod telemetry;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
