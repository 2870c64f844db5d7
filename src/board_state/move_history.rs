//! Bounded most-recent-first log of applied moves.
//!
//! The history is an explicit push-front + trim-to-limit structure so the
//! record cap is visible in one place and testable away from the board.

use std::collections::VecDeque;
use std::fmt;

use crate::board_location::BoardLocation;

/// Number of records kept by a default history.
pub const HISTORY_LIMIT: usize = 50;

/// One completed move: which piece went where, what it overwrote (if
/// anything), and the wall-clock time it happened. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// `"<color> <kind>"` of the moved piece.
    pub piece_name: String,
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// `"<color> <kind>"` of the destination occupant, `None` if the
    /// destination was empty.
    pub replaced_name: Option<String>,
    /// Zero-padded `HH:MM:SS` local time.
    pub time: String,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({},{}) → ({},{})",
            self.piece_name, self.from.0, self.from.1, self.to.0, self.to.1
        )?;
        if let Some(replaced) = &self.replaced_name {
            write!(f, " takes {}", replaced)?;
        }
        Ok(())
    }
}

/// Most-recent-first sequence of move records capped at a fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    records: VecDeque<MoveRecord>,
    limit: usize,
}

impl MoveHistory {
    /// Empty history with the standard 50-record limit.
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Empty history with an explicit limit, for exercising the bounding
    /// behavior in isolation.
    pub fn with_limit(limit: usize) -> Self {
        MoveHistory {
            records: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Prepend a record; if the history now exceeds its limit, the oldest
    /// record is dropped. Each insert evicts at most one record.
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push_front(record);
        if self.records.len() > self.limit {
            self.records.pop_back();
        }
    }

    /// The records, index 0 being the most recent move.
    #[inline]
    pub fn records(&self) -> &VecDeque<MoveRecord> {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveHistory, MoveRecord, HISTORY_LIMIT};

    fn record(piece_name: &str) -> MoveRecord {
        MoveRecord {
            piece_name: piece_name.to_string(),
            from: (6, 0),
            to: (4, 0),
            replaced_name: None,
            time: "12:00:00".to_string(),
        }
    }

    #[test]
    fn newest_record_is_first() {
        let mut history = MoveHistory::new();
        history.record(record("white pawn"));
        history.record(record("black pawn"));

        assert_eq!(history.records()[0].piece_name, "black pawn");
        assert_eq!(history.records()[1].piece_name, "white pawn");
    }

    #[test]
    fn default_limit_is_fifty() {
        let mut history = MoveHistory::new();
        for _ in 0..60 {
            history.record(record("white pawn"));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn overflow_drops_only_the_oldest() {
        let mut history = MoveHistory::with_limit(3);
        for name in ["a", "b", "c", "d"] {
            history.record(record(name));
        }

        let names: Vec<&str> = history
            .records()
            .iter()
            .map(|r| r.piece_name.as_str())
            .collect();
        assert_eq!(names, ["d", "c", "b"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = MoveHistory::with_limit(3);
        history.record(record("white rook"));
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn display_includes_capture() {
        let mut taken = record("white pawn");
        taken.to = (1, 0);
        taken.replaced_name = Some("black pawn".to_string());

        assert_eq!(taken.to_string(), "white pawn (6,0) → (1,0) takes black pawn");
        assert_eq!(record("white pawn").to_string(), "white pawn (6,0) → (4,0)");
    }
}
