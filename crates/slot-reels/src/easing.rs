//! Quadratic easing curves.
//!
//! Both map `[0, 1]` onto `[0, 1]`, are monotonic non-decreasing and are pure
//! functions of `t`, so the same elapsed time always yields the same frame.

/// Decelerating curve: `t(2 - t)`
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Accelerate then decelerate: `2t²` below the midpoint, `-1 + (4 - 2t)t` above.
/// Value and slope are continuous at `t = 0.5`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Elapsed / duration, clamped to `[0, 1]`
pub fn progress(elapsed_ms: u64, duration_ms: f32) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms as f32 / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f32> {
        (0..=1000).map(|i| i as f32 / 1000.0)
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
    }

    #[test]
    fn both_curves_are_monotonic() {
        let mut prev_out = ease_out_quad(0.0);
        let mut prev_in_out = ease_in_out_quad(0.0);
        for t in samples().skip(1) {
            let out = ease_out_quad(t);
            let in_out = ease_in_out_quad(t);
            assert!(out >= prev_out, "ease_out_quad decreased at {t}");
            assert!(in_out >= prev_in_out, "ease_in_out_quad decreased at {t}");
            prev_out = out;
            prev_in_out = in_out;
        }
    }

    #[test]
    fn in_out_is_smooth_at_midpoint() {
        let h = 1e-3;
        let left = (ease_in_out_quad(0.5) - ease_in_out_quad(0.5 - h)) / h;
        let right = (ease_in_out_quad(0.5 + h) - ease_in_out_quad(0.5)) / h;
        assert!((left - 2.0).abs() < 1e-2);
        assert!((right - 2.0).abs() < 1e-2);
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(0, 100.0), 0.0);
        assert_eq!(progress(50, 100.0), 0.5);
        assert_eq!(progress(500, 100.0), 1.0);
        assert_eq!(progress(10, 0.0), 1.0);
    }
}
