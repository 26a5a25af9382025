//! Stage
//!
//! One playable session: level geometry, the character, the follow camera,
//! player input and the fixed-step clock, driven one variable frame at a
//! time.
//!
//! Each [`Stage::frame`] runs, in order:
//!
//! 1. scripted input due this frame
//! 2. character variable tick (gravity shaping, wall probe, timers)
//! 3. camera variable tick (shake)
//! 4. zero or more fixed ticks: move, integrate, ground probe, camera follow
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgekit_engine::game::{GameConfig, InputScript, Stage};
//!
//! let mut stage = Stage::new(&GameConfig::default(), InputScript::demo())?;
//! while stage.elapsed() < 10.0 {
//!     stage.frame(1.0 / 60.0);
//! }
//! println!("{:?}", stage.snapshot());
//! ```

use std::cell::Cell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::camera::CameraFollow;
use crate::error::ConfigError;
use crate::input::PlayerInput;
use crate::physics::{Body2D, LayerMask, StaticWorld, with_depth};
use crate::player::{CharacterController2D, Facing, MotionState};
use crate::timing::FixedStepClock;

use super::config::GameConfig;
use super::script::{InputScript, ScriptPlayer};

/// Readable summary of a stage at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageSnapshot {
    pub time: f32,
    pub fixed_ticks: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub motion: MotionState,
    pub facing: Facing,
    pub crouching: bool,
    pub remaining_jumps: u32,
    pub landings: u32,
    pub camera_position: Vec3,
    pub camera_size: f32,
}

/// A running session.
pub struct Stage {
    world: StaticWorld,
    controller: CharacterController2D,
    camera: CameraFollow,
    input: PlayerInput,
    clock: FixedStepClock,
    script: ScriptPlayer,
    /// Layers the body integrator treats as solid
    solid: LayerMask,
    shake_on_land: bool,
    landings: Rc<Cell<u32>>,
    shaken_for: u32,
    elapsed: f32,
}

impl Stage {
    /// Build the level, spawn the character and place the camera on it.
    pub fn new(config: &GameConfig, script: InputScript) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = config.level.build();
        let mut body = Body2D::new(config.level.spawn, config.level.player_half_extents);
        world.register_body(&mut body, LayerMask::PLAYER);

        let mut controller = CharacterController2D::new(config.movement, body)?;
        let landings = Rc::new(Cell::new(0));
        let counter = Rc::clone(&landings);
        controller.on_land().add_listener(move |_| counter.set(counter.get() + 1));

        let start = config.camera.constrain(with_depth(config.level.spawn, 0.0));
        let camera = CameraFollow::new(config.camera, start)?;

        tracing::info!(
            spawn = ?config.level.spawn,
            fixed_hz = config.clock.fixed_hz,
            events = script.events.len(),
            "stage ready"
        );

        Ok(Self {
            world,
            controller,
            camera,
            input: PlayerInput::new(),
            clock: FixedStepClock::new(config.clock),
            script: ScriptPlayer::new(script),
            solid: config.movement.ground_layer,
            shake_on_land: config.shake_on_land,
            landings,
            shaken_for: 0,
            elapsed: 0.0,
        })
    }

    pub fn world(&self) -> &StaticWorld {
        &self.world
    }

    pub fn controller(&self) -> &CharacterController2D {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CharacterController2D {
        &mut self.controller
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    /// Live input, for hosts feeding real key events alongside the script.
    pub fn input_mut(&mut self) -> &mut PlayerInput {
        &mut self.input
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn fixed_ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Landings seen since the stage was created.
    pub fn landings(&self) -> u32 {
        self.landings.get()
    }

    pub fn script_finished(&self) -> bool {
        self.script.is_finished()
    }

    /// Run one variable frame. Returns the number of fixed ticks it contained.
    pub fn frame(&mut self, delta_time: f32) -> u32 {
        let delta_time = delta_time.max(0.0);
        self.elapsed += delta_time;

        self.script.advance(delta_time, &mut self.input);

        self.controller.on_variable_tick(&self.world, delta_time, self.input.jump_held());
        self.camera.on_variable_tick(delta_time);

        let steps = self.clock.advance(delta_time);
        let fixed_dt = self.clock.timestep();
        for _ in 0..steps {
            self.fixed_tick(fixed_dt);
        }

        steps
    }

    /// Run frames of `frame_time` until `seconds` of session time have passed.
    pub fn run_for(&mut self, seconds: f32, frame_time: f32) -> u32 {
        if frame_time <= 0.0 {
            return 0;
        }
        let end = self.elapsed + seconds;
        let mut frames = 0;
        while self.elapsed < end {
            self.frame(frame_time.min(end - self.elapsed));
            frames += 1;
        }
        frames
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            time: self.elapsed,
            fixed_ticks: self.clock.ticks(),
            position: self.controller.position(),
            velocity: self.controller.velocity(),
            motion: self.controller.motion_state(),
            facing: self.controller.facing(),
            crouching: self.controller.is_crouching(),
            remaining_jumps: self.controller.remaining_jumps(),
            landings: self.landings.get(),
            camera_position: self.camera.position(),
            camera_size: self.camera.size(),
        }
    }

    fn fixed_tick(&mut self, fixed_dt: f32) {
        let intent = self.input.take_intent();
        self.controller.apply_move(&self.world, intent, fixed_dt);
        self.world.step_body(self.controller.body_mut(), fixed_dt, self.solid);
        self.controller.on_fixed_tick(&self.world);

        let landings = self.landings.get();
        if self.shake_on_land && landings != self.shaken_for {
            self.shaken_for = landings;
            self.camera.shake();
        }

        self.camera.on_fixed_tick(with_depth(self.controller.position(), 0.0));
    }
}
