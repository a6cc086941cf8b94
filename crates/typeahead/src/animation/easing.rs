//! Easing functions for panel moves.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a
//! transformed value that creates smoother-looking motion.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    #[default]
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to `0.0..=1.0` before easing.
///
/// # Example
///
/// ```
/// use typeahead::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_fixed() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(ease(easing, 0.0), 0.0);
            assert_eq!(ease(easing, 1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_slower_at_start() {
        assert!(ease(Easing::EaseIn, 0.5) < 0.5);
    }

    #[test]
    fn test_ease_out_faster_at_start() {
        assert!(ease(Easing::EaseOut, 0.5) > 0.5);
    }

    #[test]
    fn test_ease_in_out_midpoint_unchanged() {
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }
}
