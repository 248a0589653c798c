/// Frame-driven integer counter, 0 up to `target` over `duration_ms`.
///
/// The counter captures the timestamp of its first frame and derives every
/// later value from elapsed time, so it is independent of frame rate. The
/// displayed value never decreases and never exceeds the target, even if the
/// host hands us out-of-order timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    displayed: u32,
    done: bool,
}

impl Counter {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Counter {
            target,
            // A zero or negative duration degenerates to "finish on the
            // first frame" instead of dividing by zero.
            duration_ms: duration_ms.max(f64::MIN_POSITIVE),
            started_at: None,
            displayed: 0,
            done: false,
        }
    }

    /// Advances the counter to the frame at `now_ms` and returns the value
    /// to display. The first call pins the start time.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.displayed = self.target;
            self.done = true;
        } else {
            let value = (self.target as f64 * progress).floor() as u32;
            if value > self.displayed {
                self.displayed = value;
            }
            if self.displayed >= self.target {
                self.done = true;
            }
        }
        self.displayed
    }

    /// Once done, no further frames need to be scheduled.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_1000_over_1600ms() {
        let mut counter = Counter::new(1000, 1600.0);
        assert_eq!(counter.frame(0.0), 0);
        assert_eq!(counter.frame(800.0), 500);
        assert_eq!(counter.frame(1600.0), 1000);
        assert!(counter.is_done());
        assert_eq!(counter.frame(2000.0), 1000);
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        let mut counter = Counter::new(85, 1600.0);
        let timestamps = [0.0, 16.7, 200.0, 150.0, 900.0, 850.0, 1234.5, 1600.1, 5000.0];
        let mut last = 0;
        for t in timestamps {
            let value = counter.frame(t);
            assert!(value >= last, "value regressed at t={t}");
            assert!(value <= 85);
            last = value;
        }
        assert_eq!(last, 85);
    }

    #[test]
    fn start_time_is_first_frame_not_zero() {
        let mut counter = Counter::new(100, 1000.0);
        assert_eq!(counter.frame(40_000.0), 0);
        assert_eq!(counter.frame(40_500.0), 50);
        assert_eq!(counter.frame(41_000.0), 100);
    }

    #[test]
    fn zero_target_completes_on_first_frame() {
        let mut counter = Counter::new(0, 1600.0);
        assert_eq!(counter.frame(0.0), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn very_short_duration_finishes_immediately() {
        let mut counter = Counter::new(50, 1.0);
        counter.frame(10.0);
        assert_eq!(counter.frame(11.0), 50);
        assert!(counter.is_done());
    }
}
