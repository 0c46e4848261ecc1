//! Change tracking for the open panel.
//!
//! Field notifications only count as edits while the panel is `Ready`.
//! Programmatic sets during load happen in the `Loading` phase and are
//! swallowed, so a freshly opened panel is always clean.

/// Lifecycle phase of the panel the tracker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not open. Notifications are ignored.
    #[default]
    Closed,
    /// Populating fields from the store. Notifications are ignored.
    Loading,
    /// Open and accepting user edits.
    Ready,
}

/// The dirty flag plus the phase that gates it.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    phase: Phase,
    dirty: bool,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// End of load: the panel is open and clean.
    pub fn finish_load(&mut self) {
        self.phase = Phase::Ready;
        self.dirty = false;
    }

    /// Record a field or toggle change. Returns whether it counted as an edit.
    pub fn mark_changed(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.dirty = true;
        true
    }

    pub fn mark_committed(&mut self) {
        self.dirty = false;
    }

    /// Stop accepting notifications. The flag itself is left as-is.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_clean() {
        let tracker = ChangeTracker::new();
        assert_eq!(tracker.phase(), Phase::Closed);
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn changes_ignored_until_ready() {
        let mut tracker = ChangeTracker::new();
        assert!(!tracker.mark_changed());

        tracker.begin_load();
        assert!(!tracker.mark_changed());
        assert!(!tracker.is_dirty());

        tracker.finish_load();
        assert!(tracker.mark_changed());
        assert!(tracker.is_dirty());
    }

    #[test]
    fn finish_load_forces_clean() {
        let mut tracker = ChangeTracker::new();
        tracker.finish_load();
        tracker.mark_changed();

        tracker.begin_load();
        tracker.finish_load();
        assert!(!tracker.is_dirty());
    }

    #[test]
    fn commit_clears_dirty() {
        let mut tracker = ChangeTracker::new();
        tracker.finish_load();
        tracker.mark_changed();
        tracker.mark_committed();
        assert!(!tracker.is_dirty());
        assert_eq!(tracker.phase(), Phase::Ready);
    }

    #[test]
    fn close_keeps_flag_but_ignores_changes() {
        let mut tracker = ChangeTracker::new();
        tracker.finish_load();
        tracker.mark_changed();
        tracker.close();

        assert!(tracker.is_dirty());
        assert!(!tracker.mark_changed());
        assert_eq!(tracker.phase(), Phase::Closed);
    }
}
