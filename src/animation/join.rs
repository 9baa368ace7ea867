//! Two-slot completion join for the position and target tweens.

/// One of the two independently timed tracks of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSlot {
    /// Camera position and orientation.
    Position,
    /// Look-at target.
    Target,
}

impl JoinSlot {
    const fn index(self) -> usize {
        match self {
            Self::Position => 0,
            Self::Target => 1,
        }
    }
}

/// Fires once, when both slots have arrived.
///
/// Arrivals are idempotent per slot, so a track that keeps reporting
/// completion on later frames can't trip the join early or twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionJoin {
    arrived: [bool; 2],
    fired: bool,
}

impl CompletionJoin {
    /// A join with both slots pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as arrived. Returns true on exactly one call: the
    /// first one that leaves no slot pending.
    pub fn arrive(&mut self, slot: JoinSlot) -> bool {
        self.arrived[slot.index()] = true;
        if self.fired || self.pending() > 0 {
            return false;
        }
        self.fired = true;
        true
    }

    /// Slots still outstanding.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.arrived.iter().filter(|&&done| !done).count()
    }

    /// Whether the join has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_both_slots() {
        let mut join = CompletionJoin::new();
        assert_eq!(join.pending(), 2);
        assert!(!join.arrive(JoinSlot::Position));
        assert!(!join.is_complete());
        assert!(join.arrive(JoinSlot::Target));
        assert!(join.is_complete());
    }

    #[test]
    fn repeated_arrivals_do_not_fire() {
        let mut join = CompletionJoin::new();
        assert!(!join.arrive(JoinSlot::Target));
        assert!(!join.arrive(JoinSlot::Target));
        assert_eq!(join.pending(), 1);
        assert!(join.arrive(JoinSlot::Position));
        assert!(!join.arrive(JoinSlot::Position));
        assert!(!join.arrive(JoinSlot::Target));
    }
}
