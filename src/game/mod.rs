//! Game Module
//!
//! Game-level wiring on top of the engine: the JSON config aggregate, the
//! demo level, scripted input and the [`Stage`] frame loop that ties the
//! character, camera and world together.

pub mod config;
pub mod level;
pub mod script;
pub mod stage;

pub use config::GameConfig;
pub use level::{LevelConfig, PlatformConfig};
pub use script::{InputScript, ScriptEvent, ScriptPlayer};
pub use stage::{Stage, StageSnapshot};
