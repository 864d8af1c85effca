pub mod components;
pub mod config;
pub mod engine;
pub mod game;
pub mod headless;
pub mod logger;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use game::*;
pub use headless::*;
pub use map::*;
pub use params::*;
pub use resources::*;
