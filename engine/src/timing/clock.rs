//! Fixed-Step Clock
//!
//! Splits variable-length frames into a whole number of fixed physics
//! ticks using an accumulator. Leftover time carries into the next frame.
//! The number of ticks per frame is capped so a long stall cannot spiral.

use serde::{Deserialize, Serialize};

/// Default physics rate in ticks per second.
pub const DEFAULT_FIXED_HZ: u32 = 50;

/// Default cap on fixed ticks run for a single frame.
pub const DEFAULT_MAX_STEPS: u32 = 8;

/// Fixed timestep configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed ticks per second
    pub fixed_hz: u32,
    /// Maximum fixed ticks per frame; excess time is dropped
    pub max_steps: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fixed_hz: DEFAULT_FIXED_HZ,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Accumulator turning frame time into fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    timestep: f32,
    max_steps: u32,
    accumulator: f32,
    /// Total fixed ticks issued
    ticks: u64,
}

impl FixedStepClock {
    /// Clock running at `fixed_hz` ticks per second (at least 1).
    pub fn new(config: ClockConfig) -> Self {
        Self {
            timestep: 1.0 / config.fixed_hz.max(1) as f32,
            max_steps: config.max_steps.max(1),
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Length of one fixed tick in seconds.
    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fraction of a tick waiting in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }

    /// Add a frame's time and return how many fixed ticks to run now.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < self.max_steps {
            self.accumulator -= self.timestep;
            steps += 1;
        }

        if steps == self.max_steps && self.accumulator >= self.timestep {
            tracing::warn!(
                dropped = self.accumulator,
                "fixed step budget exhausted, dropping accumulated time"
            );
            self.accumulator = 0.0;
        }

        self.ticks += u64::from(steps);
        steps
    }
}
