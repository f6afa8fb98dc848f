//! Timing constants and the pure math behind the site's animated effects.

/// Full run time of a stat counter.
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Counter sampling tick.
pub const COUNTER_FRAME_MS: u32 = 16;

/// Hero slideshow advance interval.
pub const SLIDE_INTERVAL_MS: u32 = 5_000;

/// Delay between a call-to-action click and the navigation it triggers,
/// long enough for the pending spinner to register.
pub const CTA_NAV_DELAY_MS: u32 = 800;

/// How long after a click a still-mounted button falls back to idle.
/// Only reached when the navigation never unloaded the page.
pub const CTA_PENDING_RESET_MS: u32 = 5_000;

/// Ease-out quartic curve, clamped to the unit interval.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counter value shown `elapsed_ms` into a run towards `target`.
pub fn counter_sample(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    (f64::from(target) * ease_out_quart(progress)).floor() as u32
}

/// Next slideshow index, wrapping around `len`.
pub fn next_slide(index: usize, len: usize) -> usize {
    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_to_unit_interval() {
        assert_eq!(ease_out_quart(-1.0), 0.0);
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.5), 1.0);
    }

    #[test]
    fn counter_starts_at_zero_and_converges_exactly() {
        assert_eq!(counter_sample(50, 0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_sample(50, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 50);
        // Past the duration the value stays pinned at the target.
        assert_eq!(counter_sample(50, COUNTER_DURATION_MS * 3, COUNTER_DURATION_MS), 50);
        assert_eq!(counter_sample(0, COUNTER_DURATION_MS / 2, COUNTER_DURATION_MS), 0);
    }

    #[test]
    fn counter_is_monotonic_over_the_whole_run() {
        for &target in &[1u32, 24, 99, 500, 50_000_000] {
            let mut previous = 0;
            let mut elapsed = 0;
            while elapsed <= COUNTER_DURATION_MS + COUNTER_FRAME_MS {
                let sample = counter_sample(target, elapsed, COUNTER_DURATION_MS);
                assert!(sample >= previous, "target {target} regressed at {elapsed}ms");
                assert!(sample <= target);
                previous = sample;
                elapsed += COUNTER_FRAME_MS;
            }
            assert_eq!(previous, target);
        }
    }

    #[test]
    fn slideshow_advances_by_one_and_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(1, 3), 2);
        assert_eq!(next_slide(2, 3), 0);

        // Stays in range over continuous operation.
        let mut index = 0;
        for _ in 0..10 {
            index = next_slide(index, 3);
            assert!(index < 3);
        }
    }
}
