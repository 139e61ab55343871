use super::board::Board;
use super::player::Player;
use crate::error::HistoryError;

/// The ordered snapshots produced over a session, plus the index of the
/// snapshot currently in view.
///
/// Invariants: the sequence is never empty, entry 0 is always the empty
/// board, and `current` always points inside the sequence. Whose turn it is
/// is derived from `current` (even means X), never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl GameHistory {
    /// A fresh history: one empty board, in view.
    pub fn new() -> Self {
        GameHistory {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Append the next snapshot, discarding any snapshots after the one in
    /// view. Resuming play from a past position overwrites the old future;
    /// there is no redo afterwards, only a single linear timeline.
    pub fn push(&mut self, next: Board) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
    }

    /// Move the view to a past (or the latest) snapshot. The sequence is
    /// untouched; only the view pointer changes.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// The snapshot currently in view
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Whose turn it is at the snapshot in view: X on even move numbers
    pub fn current_turn(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Index of the snapshot in view (0 is the empty board)
    pub fn move_number(&self) -> usize {
        self.current
    }

    /// Number of snapshots recorded
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the snapshot in view is the newest one
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }

    /// All snapshots, oldest first (for rendering the move list)
    pub fn boards(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Mark;

    #[test]
    fn test_new_history_holds_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.move_number(), 0);
        assert_eq!(*history.current_board(), Board::new());
        assert!(history.is_at_latest());
    }

    #[test]
    fn test_push_advances_view() {
        let mut history = GameHistory::new();
        let next = Board::new().with_mark(4, Mark::X);
        history.push(next);

        assert_eq!(history.len(), 2);
        assert_eq!(history.move_number(), 1);
        assert_eq!(*history.current_board(), next);
    }

    #[test]
    fn test_turn_parity_alternates() {
        let mut history = GameHistory::new();
        assert_eq!(history.current_turn(), Player::X);

        history.push(Board::new().with_mark(0, Mark::X));
        assert_eq!(history.current_turn(), Player::O);

        history.push(history.current_board().with_mark(1, Mark::O));
        assert_eq!(history.current_turn(), Player::X);
    }

    #[test]
    fn test_jump_to_past_keeps_sequence() {
        let mut history = GameHistory::new();
        history.push(Board::new().with_mark(0, Mark::X));
        history.push(history.current_board().with_mark(1, Mark::O));

        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.move_number(), 1);
        assert!(!history.is_at_latest());
        assert_eq!(history.current_turn(), Player::O);
    }

    #[test]
    fn test_jump_to_current_changes_nothing() {
        let mut history = GameHistory::new();
        history.push(Board::new().with_mark(0, Mark::X));

        let before = history.clone();
        history.jump_to(history.move_number()).unwrap();
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut history = GameHistory::new();
        let err = history.jump_to(1).unwrap_err();
        assert_eq!(err, HistoryError::OutOfRange { index: 1, len: 1 });
        // State is untouched on error
        assert_eq!(history.move_number(), 0);
    }

    #[test]
    fn test_push_after_jump_discards_future() {
        let mut history = GameHistory::new();
        let m1 = Board::new().with_mark(0, Mark::X);
        let m2 = m1.with_mark(1, Mark::O);
        let m3 = m2.with_mark(2, Mark::X);
        history.push(m1);
        history.push(m2);
        history.push(m3);
        assert_eq!(history.len(), 4);

        history.jump_to(1).unwrap();
        let branch = m1.with_mark(4, Mark::O);
        history.push(branch);

        // Length is 3 (start, move 1, new move), not 5
        assert_eq!(history.len(), 3);
        assert_eq!(history.move_number(), 2);
        assert_eq!(history.boards()[0], Board::new());
        assert_eq!(history.boards()[1], m1);
        assert_eq!(history.boards()[2], branch);
    }
}
