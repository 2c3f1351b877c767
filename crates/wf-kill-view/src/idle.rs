//! Run-once deferred actions
//!
//! Cursor changes and click resolution must not run inside the event-loop
//! turn that triggered them. They are parked in an [`IdleCall`] and executed
//! from an idle callback once the current turn has finished.

/// A single pending action plus the flag saying a wake-up is already queued
#[derive(Debug)]
pub struct IdleCall<T> {
    pending: Option<T>,
    in_flight: bool,
}

impl<T> Default for IdleCall<T> {
    fn default() -> Self {
        Self {
            pending: None,
            in_flight: false,
        }
    }
}

impl<T> IdleCall<T> {
    /// Park `action`, replacing any action that has not run yet
    pub fn schedule(&mut self, action: T) {
        self.pending = Some(action);
    }

    /// Mark the pending action as in flight.
    ///
    /// Returns `true` exactly once per pending action; the caller must then
    /// queue an idle callback that calls [`IdleCall::take`].
    pub fn arm(&mut self) -> bool {
        if self.pending.is_none() || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Take the pending action. Called from the idle callback.
    pub fn take(&mut self) -> Option<T> {
        self.in_flight = false;
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Drop the pending action without running it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_once_per_pending_action() {
        let mut idle = IdleCall::default();
        assert!(!idle.arm());

        idle.schedule(1);
        assert!(idle.arm());
        assert!(!idle.arm());

        assert_eq!(idle.take(), Some(1));
        assert_eq!(idle.take(), None);
        assert!(!idle.arm());
    }

    #[test]
    fn test_schedule_replaces_pending_action() {
        let mut idle = IdleCall::default();
        idle.schedule("cursor");
        assert!(idle.arm());

        // Still in flight, so no second wake-up
        idle.schedule("resolve");
        assert!(!idle.arm());

        assert_eq!(idle.take(), Some("resolve"));
    }

    #[test]
    fn test_cancelled_action_never_runs() {
        let mut idle = IdleCall::default();
        idle.schedule(7);
        assert!(idle.arm());
        idle.cancel();

        assert_eq!(idle.take(), None);
        idle.schedule(8);
        assert!(idle.arm());
    }
}
