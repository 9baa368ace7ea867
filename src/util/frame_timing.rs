//! Frame pacing for the tour loop.

/// Caps the tour loop at a target frame rate and tracks a smoothed FPS.
///
/// Timestamps are caller-supplied milliseconds (a monotonic clock or the
/// browser's `requestAnimationFrame` time), so the pacer is deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Minimum spacing between rendered frames (0 = unlimited).
    interval_ms: f64,
    /// Timestamp the last accepted frame is aligned to.
    last_frame_ms: Option<f64>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FramePacer {
    /// Create a pacer for the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let interval_ms = if target_fps > 0 {
            1000.0 / f64::from(target_fps)
        } else {
            0.0
        };

        Self {
            interval_ms,
            last_frame_ms: None,
            smoothed_fps: if target_fps > 0 { target_fps as f32 } else { 60.0 },
            smoothing: 0.05,
        }
    }

    /// Spacing between rendered frames in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Decide whether a frame arriving at `now_ms` should run.
    ///
    /// An accepted frame re-aligns the clock to `now - (delta % interval)`
    /// so late frames don't push the cadence out of step.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_frame_ms else {
            self.last_frame_ms = Some(now_ms);
            return true;
        };

        let delta = now_ms - last;
        if delta < self.interval_ms {
            return false;
        }

        if delta > 0.0 {
            let instant_fps = (1000.0 / delta) as f32;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        self.last_frame_ms = Some(if self.interval_ms > 0.0 {
            now_ms - (delta % self.interval_ms)
        } else {
            now_ms
        });
        true
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
