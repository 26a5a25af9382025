//! Timing Module
//!
//! Tick-driven time keeping: a fixed-step clock that splits frames into
//! physics ticks, and a timer queue for actions that resume after a delay.

pub mod clock;
pub mod timer;

pub use clock::{ClockConfig, DEFAULT_FIXED_HZ, DEFAULT_MAX_STEPS, FixedStepClock};
pub use timer::{TimerHandle, TimerQueue};
