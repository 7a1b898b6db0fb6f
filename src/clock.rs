//! Frame clock
//!
//! The simulation advances in fixed ticks. The clock converts wall time
//! between rendered frames into a tick count, clamping the delta so a stall
//! never runs more than a few ticks in one frame.

use crate::settings::Settings;

/// Absorbs float error so exact multiples of the frame length count fully
const TICK_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: f64,
    max_scale: f64,
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(frame_ms: f64, max_ticks_per_frame: u32) -> Self {
        Self {
            frame_ms,
            max_scale: max_ticks_per_frame as f64,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.frame_ms, settings.max_ticks_per_frame)
    }

    /// Elapsed time since the previous frame in nominal frames, clamped
    ///
    /// The first frame counts as exactly one.
    pub fn dt_scale(&mut self, now_ms: f64) -> f64 {
        let scale = match self.last_ms {
            Some(last) => ((now_ms - last) / self.frame_ms).clamp(0.0, self.max_scale),
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        scale
    }

    /// Ticks owed for a frame rendered at `now_ms`
    pub fn ticks_due(&mut self, now_ms: f64) -> u32 {
        let scale = self.dt_scale(now_ms);
        self.accumulator = (self.accumulator + scale).min(self.max_scale);
        let ticks = (self.accumulator + TICK_EPSILON).floor();
        self.accumulator = (self.accumulator - ticks).max(0.0);
        ticks as u32
    }

    /// Forget the previous frame (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new(16.0, 3);
        assert_eq!(clock.ticks_due(1000.0), 1);
    }

    #[test]
    fn test_steady_frames() {
        let mut clock = FrameClock::new(16.0, 3);
        clock.ticks_due(0.0);
        for i in 1..=10 {
            assert_eq!(clock.ticks_due(i as f64 * 16.0), 1);
        }
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new(16.0, 3);
        clock.ticks_due(0.0);
        assert_eq!(clock.dt_scale(5000.0), 3.0);
        assert_eq!(clock.ticks_due(10_000.0), 3);
        assert_eq!(clock.ticks_due(10_016.0), 1);
    }

    #[test]
    fn test_fast_frames_accumulate() {
        let mut clock = FrameClock::new(16.0, 3);
        clock.ticks_due(0.0);
        assert_eq!(clock.ticks_due(8.0), 0);
        assert_eq!(clock.ticks_due(16.0), 1);
    }

    #[test]
    fn test_time_going_backwards() {
        let mut clock = FrameClock::new(16.0, 3);
        clock.ticks_due(100.0);
        assert_eq!(clock.ticks_due(50.0), 0);
    }

    #[test]
    fn test_reset_treats_next_frame_as_first() {
        let mut clock = FrameClock::new(16.0, 3);
        clock.ticks_due(0.0);
        clock.ticks_due(8.0);
        clock.reset();
        assert_eq!(clock.dt_scale(90_000.0), 1.0);
        assert_eq!(clock.ticks_due(90_016.0), 1);
    }
}
