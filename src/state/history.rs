// Extent history - back/forward navigation through previously viewed extents
use crate::model::Extent;
use chrono::{DateTime, Local};

/// One recorded stop in the view's travel: the extent the view settled
/// on and the extent it came from (`None` for the very first stop).
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub pre_extent: Option<Extent>,
    pub extent: Extent,
    pub recorded_at: DateTime<Local>,
}

/// Whether the next settle notification is the echo of our own
/// back/forward jump. At most one jump can be in flight, so a single
/// two-state value is enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavPhase {
    Idle,
    AwaitingJumpSettle,
}

/// Records every extent the view settles on after a user-driven move
/// and steps back and forward through that record.
///
/// The view fires the same settle notification whether it stopped
/// because the user panned/zoomed or because we sent it somewhere with
/// a back/forward jump. `NavPhase` tells the two apart: while a jump is
/// in flight the next settle only refreshes `last_extent` instead of
/// appending, otherwise every back step would itself become a new
/// history entry.
pub struct ExtentHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    last_extent: Option<Extent>,
    phase: NavPhase,
}

impl ExtentHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            last_extent: None,
            phase: NavPhase::Idle,
        }
    }

    /// Consumes one "view settled" notification.
    ///
    /// Organic moves append an entry and move the cursor to the tail.
    /// A new organic move while the cursor sits mid-history does not
    /// truncate the entries beyond it; they merely become unreachable
    /// through back/forward. (A truncating variant would give standard
    /// undo/redo semantics; see the pinning test below.)
    pub fn record_settled(&mut self, extent: Extent) {
        match self.phase {
            NavPhase::AwaitingJumpSettle => {
                self.last_extent = Some(extent);
            }
            NavPhase::Idle => {
                let pre_extent = self.last_extent;
                self.last_extent = Some(extent);
                self.entries.push(HistoryEntry {
                    pre_extent,
                    extent,
                    recorded_at: Local::now(),
                });
                self.cursor = Some(self.entries.len() - 1);
            }
        }
        self.phase = NavPhase::Idle;
    }

    /// Steps back one stop. Returns the extent the view should travel
    /// to, or `None` when there is nowhere earlier to go (empty log, or
    /// the entry at the cursor has no pre-extent). The no-op case
    /// changes no state.
    pub fn back(&mut self) -> Option<Extent> {
        let cursor = self.cursor?;
        let destination = self.entries[cursor].pre_extent?;
        self.phase = NavPhase::AwaitingJumpSettle;
        self.cursor = cursor.checked_sub(1);
        Some(destination)
    }

    /// Steps forward one stop. Returns the extent the view should
    /// travel to, or `None` at the tail of the log.
    pub fn forward(&mut self) -> Option<Extent> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.phase = NavPhase::AwaitingJumpSettle;
        self.cursor = Some(cursor + 1);
        Some(self.entries[cursor + 1].extent)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor
            .map(|c| self.entries[c].pre_extent.is_some())
            .unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor
            .map(|c| c + 1 < self.entries.len())
            .unwrap_or(false)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExtentHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpatialRef;

    const SR: SpatialRef = SpatialRef(4326);

    fn ext(i: f64) -> Extent {
        Extent::new(i, i, i + 10.0, i + 10.0, SR)
    }

    #[test]
    fn test_organic_moves_chain_pre_extents() {
        let mut history = ExtentHistory::new();
        let (a, b, c) = (ext(0.0), ext(1.0), ext(2.0));
        history.record_settled(a);
        history.record_settled(b);
        history.record_settled(c);

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[0].pre_extent, None);
        assert_eq!(history.entries()[0].extent, a);
        assert_eq!(history.entries()[1].pre_extent, Some(a));
        assert_eq!(history.entries()[1].extent, b);
        assert_eq!(history.entries()[2].pre_extent, Some(b));
        assert_eq!(history.entries()[2].extent, c);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn test_back_walks_to_the_first_stop_then_blocks() {
        let mut history = ExtentHistory::new();
        let (a, b, c) = (ext(0.0), ext(1.0), ext(2.0));
        for e in [a, b, c] {
            history.record_settled(e);
        }

        // Cursor 2: destination is entry 2's pre-extent.
        assert_eq!(history.back(), Some(b));
        history.record_settled(b);
        assert_eq!(history.cursor(), Some(1));

        assert_eq!(history.back(), Some(a));
        history.record_settled(a);
        assert_eq!(history.cursor(), Some(0));

        // Entry 0 has no pre-extent: silent no-op, nothing moves.
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_back_on_empty_history_is_noop() {
        let mut history = ExtentHistory::new();
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_jump_settle_does_not_append() {
        let mut history = ExtentHistory::new();
        let (a, b) = (ext(0.0), ext(1.0));
        history.record_settled(a);
        history.record_settled(b);

        let destination = history.back().unwrap();
        // The view travels there and settles; the log must not grow.
        history.record_settled(destination);
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(0));

        // The settle consumed the pending jump; the next settle is
        // organic again.
        history.record_settled(ext(5.0));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_back_then_forward_round_trip() {
        let mut history = ExtentHistory::new();
        let (a, b) = (ext(0.0), ext(1.0));
        history.record_settled(a);
        history.record_settled(b);

        assert_eq!(history.back(), Some(a));
        history.record_settled(a);
        // Forward restores exactly the extent back moved away from.
        assert_eq!(history.forward(), Some(b));
        history.record_settled(b);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_forward_at_tail_is_noop() {
        let mut history = ExtentHistory::new();
        history.record_settled(ext(0.0));
        assert_eq!(history.forward(), None);
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_forward_on_empty_history_is_noop() {
        let mut history = ExtentHistory::new();
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_can_go_flags_track_cursor() {
        let mut history = ExtentHistory::new();
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());

        history.record_settled(ext(0.0));
        history.record_settled(ext(1.0));
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());

        let d = history.back().unwrap();
        history.record_settled(d);
        assert!(!history.can_go_back());
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_new_move_after_back_orphans_forward_entries() {
        // Pins the retain-but-orphan behavior: an organic move while
        // the cursor is mid-history appends at the tail without
        // truncating the old forward entries. Standard undo/redo would
        // truncate instead; if that ever changes, this test and
        // record_settled change together.
        let mut history = ExtentHistory::new();
        let (a, b, c) = (ext(0.0), ext(1.0), ext(2.0));
        for e in [a, b, c] {
            history.record_settled(e);
        }

        let d = history.back().unwrap();
        history.record_settled(d);
        assert_eq!(history.cursor(), Some(1));

        // Organic move from mid-history.
        let x = ext(9.0);
        history.record_settled(x);
        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), Some(3));
        // The old tail entry survives but is no longer reachable by
        // stepping forward from the new tail.
        assert_eq!(history.entries()[2].extent, c);
        assert!(!history.can_go_forward());
        // The new entry chains from where the view actually was.
        assert_eq!(history.entries()[3].pre_extent, Some(b));
        assert_eq!(history.entries()[3].extent, x);
    }

    #[test]
    fn test_consecutive_backs_without_settle() {
        // The UI normally waits for the settle echo, but a fast double
        // click must not corrupt the cursor.
        let mut history = ExtentHistory::new();
        let (a, b, c) = (ext(0.0), ext(1.0), ext(2.0));
        for e in [a, b, c] {
            history.record_settled(e);
        }

        assert_eq!(history.back(), Some(b));
        assert_eq!(history.back(), Some(a));
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), Some(0));
    }
}
