//! Ledgekit Engine Library
//!
//! Engine-independent 2D platformer movement: a character controller with
//! variable-height jumps, multi-jumps, crouching, wall sliding and wall
//! jumps, plus a bounded follow camera with a zoom shake.
//!
//! Nothing here owns a window or a physics engine. The host supplies a
//! [`physics::PhysicsQuery`] implementation and drives two clocks: a
//! variable per-frame tick and a fixed physics tick.
//!
//! # Modules
//!
//! - [`physics`] - query contract, AABB world, kinematic body, smooth damp
//! - [`timing`] - deferred timers and the fixed-step clock
//! - [`events`] - listener lists for landing and crouch notifications
//! - [`input`] - key codes, bindings and per-tick move intent
//! - [`player`] - `CharacterController2D` and `SimplePlayerMovement`
//! - [`camera`] - `CameraFollow` and `CameraShake`
//! - [`game`] - config, demo level, input scripts and the `Stage` loop
//!
//! # Example
//!
//! ```ignore
//! use ledgekit_engine::physics::{Body2D, LayerMask, StaticWorld, Vec2, with_depth};
//! use ledgekit_engine::player::{CharacterController2D, MovementConfig};
//! use ledgekit_engine::camera::{CameraConfig, CameraFollow};
//! use ledgekit_engine::input::{KeyCode, PlayerInput};
//! use ledgekit_engine::timing::{ClockConfig, FixedStepClock};
//!
//! let mut world = StaticWorld::new(Vec2::new(0.0, -9.81));
//! world.add_box(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0), LayerMask::GROUND);
//!
//! let mut body = Body2D::new(Vec2::new(0.0, 1.0), Vec2::new(0.25, 0.5));
//! world.register_body(&mut body, LayerMask::PLAYER);
//! let mut player = CharacterController2D::new(MovementConfig::default(), body)?;
//! let mut camera = CameraFollow::new(CameraConfig::default(), Default::default())?;
//! let mut clock = FixedStepClock::new(ClockConfig::default());
//! let mut input = PlayerInput::new();
//!
//! input.handle_key(KeyCode::D, true);
//!
//! // Each frame:
//! player.on_variable_tick(&world, dt, input.jump_held());
//! camera.on_variable_tick(dt);
//! for _ in 0..clock.advance(dt) {
//!     let step = clock.timestep();
//!     player.apply_move(&world, input.take_intent(), step);
//!     world.step_body(player.body_mut(), step, LayerMask::GROUND);
//!     player.on_fixed_tick(&world);
//!     camera.on_fixed_tick(with_depth(player.position(), 0.0));
//! }
//! ```

pub mod camera;
pub mod error;
pub mod events;
pub mod input;
pub mod physics;
pub mod player;
pub mod timing;

// Game-level wiring (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use error::ConfigError;
pub use events::{Event, ListenerId};
// Re-export commonly used input types
pub use input::{InputAction, KeyBindings, KeyCode, PlayerInput};
// Re-export player and camera types
pub use camera::{CameraConfig, CameraFollow};
pub use player::{CharacterController2D, MoveIntent, MovementConfig};
