//! Player Module
//!
//! Character movement for side-view platformers.
//!
//! # Components
//!
//! - [`CharacterController2D`] - Ground/wall/ceiling probing controller with
//!   shaped jump gravity, multi-jump, crouch, wall-slide and wall-jump
//! - [`MovementConfig`] - Tuning constants for the controller
//! - [`CharacterState`] - Contact flags, facing and jump bookkeeping
//! - [`SimplePlayerMovement`] - Direct velocity movement with impulse jump

pub mod config;
pub mod controller;
pub mod simple;
pub mod state;

pub use config::{MovementConfig, PROBE_RADIUS, WALL_SLIDE_JUMPS};
pub use controller::{CharacterController2D, MoveIntent};
pub use simple::{SimpleMovementConfig, SimplePlayerMovement};
pub use state::{CharacterState, Facing, MotionState};
