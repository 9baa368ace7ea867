//! Active-transition lifecycle.

use super::session::{TickOutcome, TransitionSession};

/// Lifecycle of the transition engine.
#[derive(Debug, Default)]
pub enum TransitionState {
    /// No flight in progress.
    #[default]
    Idle,
    /// A flight is in progress.
    Transitioning(TransitionSession),
}

/// A session that was replaced before it landed. Its completion hook was
/// dropped without running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superseded {
    /// Raw progress the old session had reached.
    pub progress: f32,
    /// Milliseconds the old session had been running.
    pub elapsed_ms: f64,
}

/// Owns at most one [`TransitionSession`].
///
/// Starting a session while another is running discards the old one and
/// reports it as [`Superseded`]; there is no queueing and no blending of
/// destinations. A finished session is dropped on the tick it finishes.
#[derive(Debug, Default)]
pub struct TransitionEngine {
    state: TransitionState,
}

impl TransitionEngine {
    /// An idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `session` the active one.
    pub fn begin(&mut self, session: TransitionSession) -> Option<Superseded> {
        match std::mem::replace(
            &mut self.state,
            TransitionState::Transitioning(session),
        ) {
            TransitionState::Idle => None,
            TransitionState::Transitioning(old) => {
                let superseded = Superseded {
                    progress: old.progress(),
                    elapsed_ms: old.elapsed_ms(),
                };
                log::debug!(
                    "Superseding transition at {:.0}% ({:.0} ms in)",
                    superseded.progress * 100.0,
                    superseded.elapsed_ms
                );
                Some(superseded)
            }
        }
    }

    /// Advance the active session. `None` when idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<TickOutcome> {
        let TransitionState::Transitioning(session) = &mut self.state else {
            return None;
        };
        let outcome = session.tick(now_ms);
        if outcome.finished {
            self.state = TransitionState::Idle;
        }
        Some(outcome)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&TransitionSession> {
        match &self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning(session) => Some(session),
        }
    }

    /// Whether a flight is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning(_))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::camera::CameraState;
    use crate::viewpoint::Placement;

    fn to(x: f32) -> Placement {
        Placement {
            position: Vec3::new(x, 400.0, 300.0),
            look_at: Vec3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn idle_engine_does_nothing() {
        let mut engine = TransitionEngine::new();
        assert!(engine.tick(10.0).is_none());
        assert!(!engine.is_active());
    }

    #[test]
    fn finishing_tick_returns_to_idle() {
        let mut engine = TransitionEngine::new();
        let start = CameraState::default();
        assert!(engine
            .begin(TransitionSession::begin(&start, to(100.0), 200.0))
            .is_none());
        assert!(!engine.tick(0.0).unwrap().finished);
        assert!(engine.is_active());
        let last = engine.tick(200.0).unwrap();
        assert!(last.finished);
        assert!(matches!(engine.state(), TransitionState::Idle));
        assert!(engine.tick(300.0).is_none());
    }

    #[test]
    fn supersession_is_silent_and_lands_on_the_new_destination() {
        let a_fired = Rc::new(Cell::new(false));
        let b_fired = Rc::new(Cell::new(false));
        let mut engine = TransitionEngine::new();
        let start = CameraState::default();

        let flag = Rc::clone(&a_fired);
        let _ = engine.begin(
            TransitionSession::begin(&start, to(-500.0), 1000.0)
                .on_complete(move |_| flag.set(true)),
        );
        let _ = engine.tick(0.0);
        let mid = engine.tick(400.0).unwrap();
        assert!(!mid.finished);

        let flag = Rc::clone(&b_fired);
        let superseded = engine
            .begin(
                TransitionSession::begin(&mid.state, to(250.0), 1000.0)
                    .on_complete(move |_| flag.set(true)),
            )
            .unwrap();
        assert!((superseded.progress - 0.4).abs() < 1e-6);
        assert_eq!(superseded.elapsed_ms, 400.0);

        let mut last = None;
        for now in [400.0, 900.0, 1400.0, 2000.0] {
            if let Some(outcome) = engine.tick(now) {
                last = Some(outcome);
            }
        }
        let last = last.unwrap();
        assert!(last.finished);
        assert_eq!(last.state.position, to(250.0).position);
        assert_eq!(last.state.look_at, to(250.0).look_at);
        assert!(b_fired.get());
        assert!(!a_fired.get());
    }
}
