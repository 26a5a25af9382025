//! Camera Shake
//!
//! A short zoom punch: the orthographic size contracts, then eases back.
//! Runs as a two-phase state machine advanced by frame time, independent
//! of the follow logic that moves the camera.
//!
//! Triggering while a shake is running cancels it and starts over from
//! the current size. The restore phase always returns to the base size,
//! so overlapping shakes never drift the zoom.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_non_negative, ensure_range};

/// Shake timing and depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Fraction of the base size removed at the peak of the shake (0..1)
    pub strength: f32,
    /// Seconds spent contracting
    pub shrink_duration: f32,
    /// Seconds spent restoring
    pub restore_duration: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            strength: 0.1,
            shrink_duration: 0.05,
            restore_duration: 0.1,
        }
    }
}

impl ShakeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_range("shake.strength", self.strength, 0.0, 1.0)?;
        ensure_non_negative("shake.shrink_duration", self.shrink_duration)?;
        ensure_non_negative("shake.restore_duration", self.restore_duration)?;
        Ok(())
    }
}

/// Current phase of the shake timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShakePhase {
    Idle,
    /// Contracting from `from` toward the shrunk size
    Shrinking { progress: f32, from: f32 },
    /// Expanding from `from` back to the base size
    Restoring { progress: f32, from: f32 },
}

/// Zoom shake state machine.
#[derive(Debug, Clone)]
pub struct CameraShake {
    config: ShakeConfig,
    base_size: f32,
    size: f32,
    phase: ShakePhase,
}

impl CameraShake {
    pub fn new(config: ShakeConfig, base_size: f32) -> Self {
        Self {
            config,
            base_size,
            size: base_size,
            phase: ShakePhase::Idle,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn base_size(&self) -> f32 {
        self.base_size
    }

    pub fn phase(&self) -> ShakePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != ShakePhase::Idle
    }

    /// Size at the peak of the contraction.
    pub fn shrunk_size(&self) -> f32 {
        self.base_size * (1.0 - self.config.strength)
    }

    /// Start a shake, replacing any shake in progress.
    pub fn trigger(&mut self) {
        self.phase = ShakePhase::Shrinking {
            progress: 0.0,
            from: self.size,
        };
    }

    /// Abort the shake and snap back to the base size.
    pub fn cancel(&mut self) {
        self.phase = ShakePhase::Idle;
        self.size = self.base_size;
    }

    /// Advance the timeline and return the current size.
    pub fn update(&mut self, delta_time: f32) -> f32 {
        let mut remaining = delta_time.max(0.0);

        loop {
            match self.phase {
                ShakePhase::Idle => break,
                ShakePhase::Shrinking { progress, from } => {
                    let target = self.shrunk_size();
                    let (progress, left) = step(progress, remaining, self.config.shrink_duration);
                    self.size = lerp(from, target, ease_out_quad(progress));
                    if progress < 1.0 {
                        self.phase = ShakePhase::Shrinking { progress, from };
                        break;
                    }
                    self.phase = ShakePhase::Restoring {
                        progress: 0.0,
                        from: target,
                    };
                    remaining = left;
                }
                ShakePhase::Restoring { progress, from } => {
                    let (progress, _) = step(progress, remaining, self.config.restore_duration);
                    self.size = lerp(from, self.base_size, ease_out_quad(progress));
                    if progress < 1.0 {
                        self.phase = ShakePhase::Restoring { progress, from };
                    } else {
                        self.phase = ShakePhase::Idle;
                        self.size = self.base_size;
                    }
                    break;
                }
            }
        }

        self.size
    }
}

/// Advance `progress` by `dt` over `duration`; returns the new progress
/// (capped at 1) and any time left over past the end of the phase.
fn step(progress: f32, dt: f32, duration: f32) -> (f32, f32) {
    if duration <= 0.0 {
        return (1.0, dt);
    }
    let raw = progress + dt / duration;
    if raw >= 1.0 {
        (1.0, (raw - 1.0) * duration)
    } else {
        (raw, 0.0)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
