//! 2D Character Controller
//!
//! Side-view platformer controller: run, crouch, jump with shaped gravity,
//! multi-jump, wall-slide and wall-jump. The host drives it with three calls:
//!
//! - [`on_variable_tick`](CharacterController2D::on_variable_tick) every
//!   frame: jump gravity shaping, wall probe, pending timers
//! - [`on_fixed_tick`](CharacterController2D::on_fixed_tick) every physics
//!   tick: ground probe and landing detection
//! - [`apply_move`](CharacterController2D::apply_move) once per tick with
//!   the player's intent
//!
//! The controller reads and writes its [`Body2D`]; integrating that body
//! is the host's job.
//!
//! # Jump Rules
//!
//! - Landing restores `number_of_jumps`.
//! - Wall-sliding restores `wall_slide_jumps` (default 2) every frame, so a
//!   wall jump can be followed by one air jump. This is intended.
//! - A jump sets vertical velocity to `jump_force` outright.
//! - A jump while wall-sliding also mirrors horizontal velocity away from
//!   the wall and starts the kick-off: input is locked and the sprite is
//!   mirrored for `wall_jump_lock` seconds, then both are restored.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ledgekit_engine::player::{CharacterController2D, MoveIntent, MovementConfig};
//!
//! let mut controller = CharacterController2D::new(MovementConfig::default(), body)?;
//! controller.on_land().add_listener(|_| println!("landed"));
//!
//! // Each frame:
//! controller.on_variable_tick(&world, delta_time, jump_held);
//! for _ in 0..clock.advance(delta_time) {
//!     controller.apply_move(&world, intent, fixed_dt);
//!     world.step_body(controller.body_mut(), fixed_dt, LayerMask::GROUND);
//!     controller.on_fixed_tick(&world);
//! }
//! ```

use glam::Vec2;
use tracing::{debug, trace};

use super::config::MovementConfig;
use super::state::{CharacterState, Facing, MotionState};
use crate::error::ConfigError;
use crate::events::Event;
use crate::physics::{Body2D, ColliderId, PhysicsQuery, smooth_damp};
use crate::timing::TimerQueue;

/// Player intent for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    /// Horizontal axis, -1 (left) to 1 (right)
    pub horizontal: f32,
    /// Crouch held
    pub crouch: bool,
    /// Jump pressed this tick
    pub jump: bool,
}

impl MoveIntent {
    pub fn new(horizontal: f32, crouch: bool, jump: bool) -> Self {
        Self {
            horizontal,
            crouch,
            jump,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKey {
    KickOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimedAction {
    /// End of the wall-jump kick-off: un-mirror and unlock input
    EndKickOff,
}

/// Platformer character controller over an abstract physics world.
#[derive(Debug)]
pub struct CharacterController2D {
    config: MovementConfig,
    state: CharacterState,
    body: Body2D,

    /// Carried velocity of the horizontal smoothing spring
    spring_velocity: Vec2,

    /// Horizontal input from the last accepted `apply_move`
    horizontal_input: f32,

    timers: TimerQueue<TimerKey, TimedAction>,

    on_land: Event<()>,
    on_crouch: Event<bool>,
}

impl CharacterController2D {
    /// Build a controller around `body`.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: MovementConfig, body: Body2D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CharacterState::new(config.number_of_jumps, config.jump_force),
            config,
            body,
            spring_velocity: Vec2::ZERO,
            horizontal_input: 0.0,
            timers: TimerQueue::new(),
            on_land: Event::new(),
            on_crouch: Event::new(),
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn motion_state(&self) -> MotionState {
        self.state.motion_state()
    }

    pub fn body(&self) -> &Body2D {
        &self.body
    }

    /// Mutable body access for the host integrator.
    pub fn body_mut(&mut self) -> &mut Body2D {
        &mut self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn is_touching_wall(&self) -> bool {
        self.state.touching_wall
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.state.wall_sliding
    }

    pub fn is_crouching(&self) -> bool {
        self.state.crouching
    }

    pub fn remaining_jumps(&self) -> u32 {
        self.state.remaining_jumps
    }

    /// Decayed jump force left by the last jump. Informational only.
    pub fn current_jump_force(&self) -> f32 {
        self.state.current_jump_force
    }

    pub fn is_input_locked(&self) -> bool {
        self.state.input_locked
    }

    /// Lock or unlock player input from outside (cutscenes, respawn).
    pub fn set_input_locked(&mut self, locked: bool) {
        self.state.input_locked = locked;
    }

    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    /// Seconds left in a wall-jump kick-off, if one is running.
    pub fn kick_off_remaining(&self) -> Option<f32> {
        self.timers.remaining(&TimerKey::KickOff)
    }

    /// Fired once on each transition from airborne to grounded.
    pub fn on_land(&mut self) -> &mut Event<()> {
        &mut self.on_land
    }

    /// Fired with the new value each time crouching starts or stops.
    pub fn on_crouch(&mut self) -> &mut Event<bool> {
        &mut self.on_crouch
    }

    /// Segment covered by the wall probe, for debug drawing.
    pub fn wall_check_gizmo(&self) -> (Vec2, Vec2) {
        let start = self.probe_point(self.config.wall_check_offset);
        let reach = self.state.facing.sign() * self.config.wall_check_distance;
        let end = start + Vec2::new(reach, 0.0);
        (start, end)
    }

    // ------------------------------------------------------------------
    // Ticks
    // ------------------------------------------------------------------

    /// Per-frame update: gravity shaping, wall probe, then pending timers.
    ///
    /// `jump_held` is the current state of the jump button; releasing it
    /// while rising cuts the jump short.
    pub fn on_variable_tick(
        &mut self,
        world: &impl PhysicsQuery,
        delta_time: f32,
        jump_held: bool,
    ) {
        self.apply_jump_gravity(world.gravity(), delta_time, jump_held);
        self.check_wall(world);

        for action in self.timers.advance(delta_time) {
            self.run_timed(action);
        }
    }

    /// Per-physics-tick update: ground probe and landing edge.
    ///
    /// While moving upward the character is treated as airborne and the
    /// probe is skipped, so leaving the ground never reads as a landing.
    pub fn on_fixed_tick(&mut self, world: &impl PhysicsQuery) {
        let was_grounded = self.state.grounded;
        self.state.grounded = false;

        if self.body.velocity.y > 0.0 {
            return;
        }

        let point = self.probe_point(self.config.ground_check_offset);
        let hits = world.overlap_circle_all(
            point,
            self.config.ground_check_radius,
            self.config.ground_layer,
        );
        self.state.grounded = self.any_foreign(&hits);

        if self.state.grounded {
            self.state.wall_sliding = false;
            if !was_grounded {
                debug!(position = ?self.body.position, "landed");
                self.on_land.invoke(());
            }
        }
    }

    /// Apply one tick of player intent.
    ///
    /// Does nothing while input is locked.
    pub fn apply_move(&mut self, world: &impl PhysicsQuery, intent: MoveIntent, delta_time: f32) {
        if self.state.input_locked {
            return;
        }

        self.horizontal_input = intent.horizontal;
        let mut horizontal = intent.horizontal;

        if self.state.grounded {
            self.state.remaining_jumps = self.config.number_of_jumps;
            self.state.current_jump_force = self.config.jump_force;
        }

        // A low ceiling keeps the character crouched
        let crouch = intent.crouch || self.ceiling_blocked(world);

        if self.state.grounded || self.config.air_control {
            if crouch {
                if !self.state.crouching {
                    self.state.crouching = true;
                    debug!("crouch start");
                    self.on_crouch.invoke(true);
                }
                horizontal *= self.config.crouch_speed;
                self.body.crouch_collider_enabled = false;
            } else {
                self.body.crouch_collider_enabled = true;
                if self.state.crouching {
                    self.state.crouching = false;
                    debug!("crouch end");
                    self.on_crouch.invoke(false);
                }
            }

            let target = Vec2::new(horizontal * self.config.run_speed, self.body.velocity.y);
            self.body.velocity = smooth_damp(
                self.body.velocity,
                target,
                &mut self.spring_velocity,
                self.config.movement_smoothing,
                delta_time,
            );

            if (horizontal > 0.0 && self.state.facing == Facing::Left)
                || (horizontal < 0.0 && self.state.facing == Facing::Right)
            {
                self.flip();
            }
        }

        if intent.jump && self.state.remaining_jumps > 0 {
            self.jump();
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn jump(&mut self) {
        self.state.grounded = false;

        if self.state.wall_sliding {
            self.body.velocity = Vec2::new(-self.body.velocity.x, self.config.jump_force);
            self.state.wall_sliding = false;
            self.start_kick_off();
            debug!(velocity = ?self.body.velocity, "wall jump");
        } else {
            self.body.velocity.y = self.config.jump_force;
            debug!(remaining = self.state.remaining_jumps - 1, "jump");
        }

        self.state.current_jump_force = self.config.jump_force * self.config.jump_force_decay;
        self.state.remaining_jumps -= 1;
    }

    fn apply_jump_gravity(&mut self, gravity: Vec2, delta_time: f32, jump_held: bool) {
        let velocity = &mut self.body.velocity;

        // Something pushing the character up (a bounce, a platform) ends the slide
        if self.state.wall_sliding && velocity.y < 0.0 {
            velocity.y = -self.config.wall_slide_speed;
            self.state.remaining_jumps = self.config.wall_slide_jumps;
        } else if velocity.y < 0.0 && !self.state.touching_wall {
            velocity.y += gravity.y * (self.config.fall_multiplier - 1.0) * delta_time;
        } else if velocity.y > 0.0 && !jump_held {
            velocity.y += gravity.y * (self.config.low_jump_multiplier - 1.0) * delta_time;
        }
    }

    fn check_wall(&mut self, world: &impl PhysicsQuery) {
        let origin = self.probe_point(self.config.wall_check_offset);
        let direction = Vec2::new(self.state.facing.sign(), 0.0);
        let touching = world
            .raycast(origin, direction, self.config.wall_check_distance, self.config.ground_layer)
            .is_some_and(|hit| Some(hit.collider) != self.body.collider);

        if touching != self.state.touching_wall {
            trace!(touching, "wall contact changed");
        }
        self.state.touching_wall = touching;

        self.state.wall_sliding = touching
            && !self.state.grounded
            && self.body.velocity.y < 0.0
            && self.horizontal_input != 0.0;
    }

    fn ceiling_blocked(&self, world: &impl PhysicsQuery) -> bool {
        let point = self.probe_point(self.config.ceiling_check_offset);
        let hits = world.overlap_circle_all(
            point,
            self.config.ceiling_check_radius,
            self.config.ground_layer,
        );
        self.any_foreign(&hits)
    }

    fn any_foreign(&self, hits: &[ColliderId]) -> bool {
        hits.iter().any(|&id| Some(id) != self.body.collider)
    }

    /// Probe offsets belong to the sprite, so x mirrors with facing.
    fn probe_point(&self, offset: Vec2) -> Vec2 {
        self.body.position + Vec2::new(offset.x * self.state.facing.sign(), offset.y)
    }

    fn flip(&mut self) {
        self.state.facing = self.state.facing.flipped();
    }

    fn start_kick_off(&mut self) {
        self.state.input_locked = true;
        self.flip();
        self.timers
            .schedule(TimerKey::KickOff, self.config.wall_jump_lock, TimedAction::EndKickOff);
    }

    fn run_timed(&mut self, action: TimedAction) {
        match action {
            TimedAction::EndKickOff => {
                self.flip();
                self.state.input_locked = false;
                debug!("wall jump kick-off finished");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{LayerMask, RayHit};
    use std::cell::RefCell;
    use std::rc::Rc;

    const DT: f32 = 0.02;
    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Scripted probe results around a body centered at the origin:
    /// overlap queries below the center answer as ground, above as ceiling.
    #[derive(Default)]
    struct ProbeStub {
        ground: Vec<ColliderId>,
        ceiling: bool,
        wall: bool,
    }

    impl PhysicsQuery for ProbeStub {
        fn gravity(&self) -> Vec2 {
            Vec2::new(0.0, -10.0)
        }

        fn raycast(
            &self,
            origin: Vec2,
            direction: Vec2,
            _max: f32,
            _mask: LayerMask,
        ) -> Option<RayHit> {
            self.wall.then(|| RayHit {
                collider: ColliderId(50),
                point: origin,
                normal: -direction,
                distance: 0.1,
            })
        }

        fn overlap_circle_all(
            &self,
            point: Vec2,
            _radius: f32,
            _mask: LayerMask,
        ) -> Vec<ColliderId> {
            if point.y < 0.0 {
                self.ground.clone()
            } else if self.ceiling {
                vec![ColliderId(60)]
            } else {
                Vec::new()
            }
        }
    }

    fn grounded_stub() -> ProbeStub {
        ProbeStub {
            ground: vec![ColliderId(1)],
            ..Default::default()
        }
    }

    fn controller() -> CharacterController2D {
        controller_with(MovementConfig::default())
    }

    fn controller_with(config: MovementConfig) -> CharacterController2D {
        let body = Body2D::new(Vec2::ZERO, Vec2::new(0.4, 0.5));
        CharacterController2D::new(config, body).unwrap()
    }

    fn counter<T: Clone + 'static>(event: &mut Event<T>) -> Rc<RefCell<Vec<T>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        event.add_listener(move |v| sink.borrow_mut().push(v));
        log
    }

    /// Airborne, falling, pressed against a wall with input toward it.
    fn wall_sliding_controller(world: &ProbeStub) -> CharacterController2D {
        let mut c = controller();
        c.body_mut().velocity = Vec2::new(3.0, -1.0);
        c.apply_move(world, MoveIntent::new(1.0, false, false), DT);
        c.on_variable_tick(world, DT, false);
        assert!(c.is_wall_sliding());
        c
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = MovementConfig {
            crouch_speed: -1.0,
            ..Default::default()
        };
        let body = Body2D::new(Vec2::ZERO, Vec2::new(0.4, 0.5));
        assert!(CharacterController2D::new(config, body).is_err());
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.remaining_jumps(), 1);
        assert_eq!(c.current_jump_force(), 12.0);
        assert_eq!(c.facing(), Facing::Right);
        assert_eq!(c.motion_state(), MotionState::Airborne);
        assert!(!c.is_input_locked());
    }

    #[test]
    fn test_grounded_jump_sets_velocity() {
        let world = grounded_stub();
        let mut c = controller();
        c.on_fixed_tick(&world);
        assert!(c.is_grounded());
        assert_eq!(c.remaining_jumps(), 1);

        c.apply_move(&world, MoveIntent::new(0.0, false, true), DT);

        assert!(approx_eq(c.velocity().y, 12.0));
        assert_eq!(c.remaining_jumps(), 0);
        assert!(!c.is_grounded());
        assert!(approx_eq(c.current_jump_force(), 12.0 * 0.6));
    }

    #[test]
    fn test_air_jump_consumes_allotment() {
        let world = ProbeStub::default();
        let mut c = controller();
        c.apply_move(&world, MoveIntent::new(0.0, false, true), DT);
        assert_eq!(c.remaining_jumps(), 0);

        c.body_mut().velocity.y = -1.0;
        c.apply_move(&world, MoveIntent::new(0.0, false, true), DT);
        assert_eq!(c.remaining_jumps(), 0);
        assert!(approx_eq(c.velocity().y, -1.0));
    }

    #[test]
    fn test_remaining_jumps_bounded() {
        let config = MovementConfig {
            number_of_jumps: 3,
            ..Default::default()
        };
        let world = grounded_stub();
        let mut c = controller_with(config);
        c.on_fixed_tick(&world);

        for _ in 0..10 {
            c.apply_move(&world, MoveIntent::new(0.0, false, true), DT);
            assert!(c.remaining_jumps() <= c.config().max_jumps());
        }
        assert_eq!(c.remaining_jumps(), 0);
    }

    #[test]
    fn test_landing_fires_once_per_transition() {
        let world = ProbeStub {
            ground: vec![ColliderId(1), ColliderId(2), ColliderId(3)],
            ..Default::default()
        };
        let mut c = controller();
        let landed = counter(c.on_land());

        for _ in 0..5 {
            c.on_fixed_tick(&world);
        }
        assert_eq!(landed.borrow().len(), 1);

        // Leave the ground, then come back down
        c.body_mut().velocity.y = 4.0;
        c.on_fixed_tick(&world);
        assert!(!c.is_grounded());
        c.body_mut().velocity.y = -1.0;
        c.on_fixed_tick(&world);
        c.on_fixed_tick(&world);
        assert_eq!(landed.borrow().len(), 2);
    }

    #[test]
    fn test_rising_skips_ground_probe() {
        let world = grounded_stub();
        let mut c = controller();
        let landed = counter(c.on_land());
        c.body_mut().velocity.y = 0.5;
        c.on_fixed_tick(&world);
        assert!(!c.is_grounded());
        assert!(landed.borrow().is_empty());
    }

    #[test]
    fn test_own_collider_is_not_ground() {
        let world = ProbeStub {
            ground: vec![ColliderId(9)],
            ..Default::default()
        };
        let mut c = controller();
        c.body_mut().collider = Some(ColliderId(9));
        c.on_fixed_tick(&world);
        assert!(!c.is_grounded());
    }

    #[test]
    fn test_fast_fall() {
        let world = ProbeStub::default();
        let mut c = controller();
        c.body_mut().velocity.y = -1.0;
        c.on_variable_tick(&world, 0.1, false);
        // -1 + (-10 * 1.5 * 0.1)
        assert!(approx_eq(c.velocity().y, -2.5));
    }

    #[test]
    fn test_low_jump_when_released() {
        let world = ProbeStub::default();
        let mut c = controller();
        c.body_mut().velocity.y = 5.0;
        c.on_variable_tick(&world, 0.1, true);
        assert!(approx_eq(c.velocity().y, 5.0));

        c.on_variable_tick(&world, 0.1, false);
        // 5 + (-10 * 1.0 * 0.1)
        assert!(approx_eq(c.velocity().y, 4.0));
    }

    #[test]
    fn test_wall_slide_caps_fall_and_refreshes_jumps() {
        let world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        assert_eq!(c.motion_state(), MotionState::WallSliding);

        c.on_variable_tick(&world, DT, false);
        assert!(approx_eq(c.velocity().y, -2.0));
        assert_eq!(c.remaining_jumps(), 2);
    }

    #[test]
    fn test_wall_slide_ends_when_input_released() {
        let world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        c.apply_move(&world, MoveIntent::new(0.0, false, false), DT);
        c.on_variable_tick(&world, DT, false);
        assert!(!c.is_wall_sliding());
    }

    #[test]
    fn test_wall_slide_ends_when_wall_lost() {
        let mut world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        world.wall = false;
        c.on_variable_tick(&world, DT, false);

        assert!(!c.is_touching_wall());
        assert!(!c.is_wall_sliding());
        assert_eq!(c.motion_state(), MotionState::Airborne);
    }

    #[test]
    fn test_wall_slide_ends_when_not_falling() {
        let world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        c.body_mut().velocity.y = 0.0;
        c.on_variable_tick(&world, DT, false);

        assert!(c.is_touching_wall());
        assert!(!c.is_wall_sliding());
        assert_eq!(c.velocity().y, 0.0);
    }

    #[test]
    fn test_wall_slide_ends_when_pushed_upward() {
        let world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        c.body_mut().velocity.y = 5.0;
        c.on_variable_tick(&world, DT, true);

        assert!(!c.is_wall_sliding());
        assert!(approx_eq(c.velocity().y, 5.0));
    }

    #[test]
    fn test_wall_slide_ends_on_landing() {
        let mut world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        world.ground = vec![ColliderId(1)];
        c.on_fixed_tick(&world);
        assert!(c.is_grounded());
        assert!(!c.is_wall_sliding());
    }

    #[test]
    fn test_wall_jump_kicks_off() {
        let world = ProbeStub {
            wall: true,
            ..Default::default()
        };
        let mut c = wall_sliding_controller(&world);
        c.on_variable_tick(&world, DT, false);
        c.body_mut().velocity.x = 3.0;
        let facing_before = c.facing();

        c.apply_move(&world, MoveIntent::new(0.0, false, true), DT);

        assert!(approx_eq(c.velocity().x, -3.0));
        assert!(approx_eq(c.velocity().y, 12.0));
        assert!(!c.is_wall_sliding());
        assert!(c.is_input_locked());
        assert_eq!(c.facing(), facing_before.flipped());
        assert_eq!(c.remaining_jumps(), 1);

        // Input is ignored during the kick-off
        c.apply_move(&world, MoveIntent::new(1.0, false, true), DT);
        assert_eq!(c.remaining_jumps(), 1);

        c.on_variable_tick(&world, 0.2, true);
        assert!(c.is_input_locked());
        c.on_variable_tick(&world, 0.15, true);
        assert!(!c.is_input_locked());
        assert_eq!(c.facing(), facing_before);
        assert_eq!(c.kick_off_remaining(), None);
    }

    #[test]
    fn test_ceiling_forces_crouch() {
        let world = ProbeStub {
            ground: vec![ColliderId(1)],
            ceiling: true,
            ..Default::default()
        };
        let mut c = controller();
        let crouches = counter(c.on_crouch());
        c.on_fixed_tick(&world);

        c.apply_move(&world, MoveIntent::new(0.0, false, false), DT);

        assert!(c.is_crouching());
        assert!(!c.body().crouch_collider_enabled);
        assert_eq!(*crouches.borrow(), vec![true]);
    }

    #[test]
    fn test_crouch_notifications_on_edges_only() {
        let world = grounded_stub();
        let mut c = controller();
        let crouches = counter(c.on_crouch());
        c.on_fixed_tick(&world);

        for _ in 0..3 {
            c.apply_move(&world, MoveIntent::new(0.0, true, false), DT);
        }
        for _ in 0..3 {
            c.apply_move(&world, MoveIntent::new(0.0, false, false), DT);
        }
        c.apply_move(&world, MoveIntent::new(0.0, true, false), DT);

        assert_eq!(*crouches.borrow(), vec![true, false, true]);
        assert!(!c.body().crouch_collider_enabled);
    }

    #[test]
    fn test_crouch_slows_movement() {
        let world = grounded_stub();
        let mut c = controller();
        c.on_fixed_tick(&world);
        for _ in 0..200 {
            c.apply_move(&world, MoveIntent::new(1.0, true, false), DT);
        }
        assert!((c.velocity().x - 3.6).abs() < 0.01);
    }

    #[test]
    fn test_run_reaches_full_speed_smoothly() {
        let world = grounded_stub();
        let mut c = controller();
        c.on_fixed_tick(&world);

        c.apply_move(&world, MoveIntent::new(1.0, false, false), DT);
        let first = c.velocity().x;
        assert!(first > 0.0 && first < 10.0);

        for _ in 0..200 {
            c.apply_move(&world, MoveIntent::new(1.0, false, false), DT);
        }
        assert!((c.velocity().x - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_facing_follows_input() {
        let world = grounded_stub();
        let mut c = controller();
        c.on_fixed_tick(&world);

        c.apply_move(&world, MoveIntent::new(-1.0, false, false), DT);
        assert_eq!(c.facing(), Facing::Left);
        c.apply_move(&world, MoveIntent::new(0.0, false, false), DT);
        assert_eq!(c.facing(), Facing::Left);
        c.apply_move(&world, MoveIntent::new(0.5, false, false), DT);
        assert_eq!(c.facing(), Facing::Right);
    }

    #[test]
    fn test_no_air_steering_without_air_control() {
        let world = ProbeStub::default();
        let mut c = controller();
        c.body_mut().velocity = Vec2::new(2.0, -1.0);
        c.apply_move(&world, MoveIntent::new(-1.0, true, false), DT);
        assert!(approx_eq(c.velocity().x, 2.0));
        assert_eq!(c.facing(), Facing::Right);
        assert!(!c.is_crouching());
    }

    #[test]
    fn test_air_control_steers() {
        let world = ProbeStub::default();
        let mut c = controller_with(MovementConfig {
            air_control: true,
            ..Default::default()
        });
        c.body_mut().velocity = Vec2::new(2.0, -1.0);
        c.apply_move(&world, MoveIntent::new(-1.0, false, false), DT);
        assert!(c.velocity().x < 2.0);
        assert_eq!(c.facing(), Facing::Left);
    }

    #[test]
    fn test_locked_input_is_noop() {
        let world = grounded_stub();
        let mut c = controller();
        c.on_fixed_tick(&world);
        c.set_input_locked(true);
        c.apply_move(&world, MoveIntent::new(1.0, true, true), DT);
        assert_eq!(c.velocity(), Vec2::ZERO);
        assert_eq!(c.horizontal_input(), 0.0);
        assert!(!c.is_crouching());
    }

    #[test]
    fn test_wall_probe_mirrors_with_facing() {
        let world = grounded_stub();
        let mut c = controller();
        let (start, end) = c.wall_check_gizmo();
        assert!(approx_eq(start.x, 0.3));
        assert!(approx_eq(end.x, 0.7));

        c.on_fixed_tick(&world);
        c.apply_move(&world, MoveIntent::new(-1.0, false, false), DT);
        let (start, end) = c.wall_check_gizmo();
        assert!(start.x < 0.0);
        assert!(end.x < start.x);
    }
}
