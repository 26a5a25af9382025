//! Critically damped smoothing
//!
//! Game-style `smooth_damp`: moves a value toward a target following a
//! critically damped spring, carrying the spring's velocity between calls.
//! The exponential decay uses the usual cubic approximation
//! `1 / (1 + x + 0.48x² + 0.235x³)` which is accurate for small `x`.

use super::types::Vec2;

/// Smallest smoothing time accepted; smaller values are raised to this.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Smoothly move `current` toward `target`.
///
/// # Arguments
///
/// * `current` - Value this tick
/// * `target` - Value to approach
/// * `spring_velocity` - Rate of change carried across calls; updated in place
/// * `smooth_time` - Approximate time to reach the target, in seconds
/// * `delta_time` - Tick length in seconds
///
/// The result never overshoots the target.
pub fn smooth_damp(
    current: Vec2,
    target: Vec2,
    spring_velocity: &mut Vec2,
    smooth_time: f32,
    delta_time: f32,
) -> Vec2 {
    if delta_time <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*spring_velocity + change * omega) * delta_time;
    *spring_velocity = (*spring_velocity - temp * omega) * exp;

    let mut output = target + (change + temp) * exp;

    // Clamp overshoot
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *spring_velocity = Vec2::ZERO;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_target() {
        let mut v = Vec2::ZERO;
        let mut x = Vec2::ZERO;
        let target = Vec2::new(10.0, 0.0);
        for _ in 0..120 {
            x = smooth_damp(x, target, &mut v, 0.05, 1.0 / 60.0);
        }
        assert!((x - target).length() < 1e-3);
    }

    #[test]
    fn test_moves_monotonically_without_overshoot() {
        let mut v = Vec2::ZERO;
        let mut x = Vec2::ZERO;
        let target = Vec2::new(5.0, -2.0);
        let mut last = x.distance(target);
        for _ in 0..60 {
            x = smooth_damp(x, target, &mut v, 0.1, 1.0 / 60.0);
            let d = x.distance(target);
            assert!(d <= last + 1e-6);
            assert!(x.x <= target.x + 1e-6);
            last = d;
        }
    }

    #[test]
    fn test_not_instant() {
        let mut v = Vec2::ZERO;
        let x = smooth_damp(Vec2::ZERO, Vec2::new(10.0, 0.0), &mut v, 0.05, 1.0 / 60.0);
        assert!(x.x > 0.0);
        assert!(x.x < 10.0);
        assert!(v.x > 0.0);
    }

    #[test]
    fn test_zero_delta_time_is_noop() {
        let mut v = Vec2::new(1.0, 1.0);
        let x = smooth_damp(Vec2::ONE, Vec2::ZERO, &mut v, 0.1, 0.0);
        assert_eq!(x, Vec2::ONE);
        assert_eq!(v, Vec2::new(1.0, 1.0));
    }
}
