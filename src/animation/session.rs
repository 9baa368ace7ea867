//! A single camera flight toward one placement.

use std::fmt;

use super::interpolation::{lerp_position, slerp_orientation, InterpolationContext};
use super::join::{CompletionJoin, JoinSlot};
use crate::camera::{look_rotation, CameraState};
use crate::options::TransitionOptions;
use crate::util::easing::EasingFunction;
use crate::viewpoint::Placement;

/// Runs once when a session finishes. Dropped unfired if superseded.
pub type CompletionHook = Box<dyn FnOnce(&CameraState)>;

/// Durations of the two tracks of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackDurations {
    /// Position and orientation track.
    pub position_ms: f64,
    /// Look-at target track.
    pub target_ms: f64,
}

impl TrackDurations {
    /// Both tracks share one duration.
    #[must_use]
    pub fn uniform(duration_ms: f64) -> Self {
        Self {
            position_ms: duration_ms,
            target_ms: duration_ms,
        }
    }

    /// The longer of the two; when the session finishes.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.position_ms.max(self.target_ms)
    }
}

impl From<f64> for TrackDurations {
    fn from(duration_ms: f64) -> Self {
        Self::uniform(duration_ms)
    }
}

impl From<&TransitionOptions> for TrackDurations {
    fn from(options: &TransitionOptions) -> Self {
        Self {
            position_ms: options.position_duration_ms,
            target_ms: options.target_duration_ms,
        }
    }
}

/// Camera pose for this frame and whether the flight has landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Interpolated camera.
    pub state: CameraState,
    /// True from the tick on which both tracks completed.
    pub finished: bool,
}

/// Time-parameterized interpolation from one camera pose to a placement.
///
/// Position and orientation share the position track; the look-at target
/// has its own. Each track eases its own raw progress, and the session
/// finishes when the slower one does. The clock starts on the first tick.
pub struct TransitionSession {
    start: CameraState,
    end: CameraState,
    durations: TrackDurations,
    easing: EasingFunction,
    started_at_ms: Option<f64>,
    elapsed_ms: f64,
    join: CompletionJoin,
    on_complete: Option<CompletionHook>,
}

impl TransitionSession {
    /// Start a flight from `from` to `to`. The end orientation looks from
    /// the placement's position toward its target.
    pub fn begin(
        from: &CameraState,
        to: Placement,
        durations: impl Into<TrackDurations>,
    ) -> Self {
        Self {
            start: *from,
            end: CameraState {
                position: to.position,
                orientation: look_rotation(to.position, to.look_at),
                look_at: to.look_at,
            },
            durations: durations.into(),
            easing: EasingFunction::default(),
            started_at_ms: None,
            elapsed_ms: 0.0,
            join: CompletionJoin::new(),
            on_complete: None,
        }
    }

    /// Use a different easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Register the hook run when both tracks have finished.
    #[must_use]
    pub fn on_complete(mut self, hook: impl FnOnce(&CameraState) + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Advance to `now_ms` and return the interpolated camera.
    ///
    /// The completion hook runs on the tick where the join fires and never
    /// again; later ticks keep returning the end pose.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        let started = *self.started_at_ms.get_or_insert(now_ms);
        self.elapsed_ms = (now_ms - started).max(0.0);

        let pos_ctx = InterpolationContext::at(
            self.elapsed_ms,
            self.durations.position_ms,
            self.easing,
        );
        let target_ctx = InterpolationContext::at(
            self.elapsed_ms,
            self.durations.target_ms,
            self.easing,
        );

        let state = CameraState {
            position: lerp_position(&pos_ctx, self.start.position, self.end.position),
            orientation: slerp_orientation(
                &pos_ctx,
                self.start.orientation,
                self.end.orientation,
            ),
            look_at: lerp_position(&target_ctx, self.start.look_at, self.end.look_at),
        };

        let mut fired = false;
        if pos_ctx.is_complete() {
            fired |= self.join.arrive(JoinSlot::Position);
        }
        if target_ctx.is_complete() {
            fired |= self.join.arrive(JoinSlot::Target);
        }
        if fired {
            if let Some(hook) = self.on_complete.take() {
                hook(&state);
            }
        }

        TickOutcome {
            state,
            finished: self.join.is_complete(),
        }
    }

    /// Raw progress of the slower track, in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let total = self.durations.total_ms();
        if total > 0.0 {
            (self.elapsed_ms / total).clamp(0.0, 1.0) as f32
        } else if self.started_at_ms.is_some() {
            1.0
        } else {
            0.0
        }
    }

    /// Milliseconds since the first tick.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Track durations.
    #[must_use]
    pub fn durations(&self) -> TrackDurations {
        self.durations
    }

    /// Pose the session lands on.
    #[must_use]
    pub fn destination(&self) -> &CameraState {
        &self.end
    }

    /// Whether both tracks have completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_complete()
    }
}

impl fmt::Debug for TransitionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSession")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("durations", &self.durations)
            .field("easing", &self.easing)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("join", &self.join)
            .field("has_hook", &self.on_complete.is_some())
            .finish()
    }
}
