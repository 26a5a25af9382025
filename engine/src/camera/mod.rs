//! Camera Module
//!
//! Side-view camera rig: bounded smooth follow plus a zoom shake.
//! Window-system agnostic; it only computes position and orthographic size.

pub mod follow;
pub mod shake;

pub use follow::{CameraConfig, CameraFollow, DEFAULT_DEPTH};
pub use shake::{CameraShake, ShakeConfig, ShakePhase};
