use instant::Instant;
use std::time::Duration;

pub const FRAME_RATE: u32 = 60;
/// Longest frame delta handed to the physics; anything beyond is dropped.
pub const MAX_FRAME_DELTA: Duration = Duration::from_secs(1);

/// Paces frames to at most [`FRAME_RATE`] per second and measures the real
/// time between them.
pub struct FrameClock {
    last_frame: Instant,
    period: Duration,
}
impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            period: Duration::from_secs(1) / FRAME_RATE,
        }
    }
    pub fn next_frame(&self) -> Instant {
        self.last_frame + self.period
    }
    /// The time since the previous frame, or `None` if the next one is not
    /// due yet.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let elapsed = now.checked_duration_since(self.last_frame)?;
        if elapsed < self.period {
            return None;
        }
        self.last_frame = now;
        if elapsed > MAX_FRAME_DELTA {
            log::warn!(
                "Frame far behind, dropping {}ms",
                (elapsed - MAX_FRAME_DELTA).as_millis()
            );
            return Some(MAX_FRAME_DELTA);
        }
        Some(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_not_due_before_the_period() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.tick(start), None);
        assert_eq!(clock.tick(start + Duration::from_millis(10)), None);
        assert_eq!(clock.next_frame(), start + Duration::from_secs(1) / 60);
    }

    #[test]
    fn reports_the_measured_delta() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let late = start + Duration::from_millis(25);
        assert_eq!(clock.tick(late), Some(Duration::from_millis(25)));
        assert_eq!(clock.tick(late + Duration::from_millis(17)), Some(Duration::from_millis(17)));
    }

    #[test]
    fn long_stalls_are_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let after_stall = start + Duration::from_secs(5);
        assert_eq!(clock.tick(after_stall), Some(MAX_FRAME_DELTA));
        assert_eq!(clock.next_frame(), after_stall + Duration::from_secs(1) / 60);
    }
}
