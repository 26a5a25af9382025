//! Game Configuration
//!
//! Everything tunable about a session in one serde aggregate, so a single
//! JSON file can reconfigure movement, camera, level and timing.

pub mod game_config;

pub use game_config::GameConfig;
