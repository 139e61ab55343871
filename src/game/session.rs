use super::board::{Board, Mark, CELLS};
use super::history::GameHistory;
use super::player::Player;
use super::winner::{winner, winning_line};
use crate::error::{HistoryError, MoveError};

/// Where the game stands at the snapshot in view. Always derived fresh from
/// the board, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No winner yet and at least one empty cell; this player moves next
    InProgress(Player),
    Won(Player),
    /// Every cell filled with no completed line
    Drawn,
}

/// One game of tic-tac-toe: the move history plus the legality gate in
/// front of it.
///
/// [`Session::play`] is the only way a new snapshot enters the history, so
/// an occupied cell or a finished game can never be played through, no
/// matter what the caller does. Jumping to a past move and playing from
/// there rewrites the timeline from that point on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    history: GameHistory,
}

impl Session {
    /// Start a new game with an empty board, X to move.
    pub fn new() -> Self {
        Session {
            history: GameHistory::new(),
        }
    }

    /// The board currently in view
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    /// The player who moves next from the snapshot in view
    pub fn current_player(&self) -> Player {
        self.history.current_turn()
    }

    /// The full move history
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Derive the game status from the board in view.
    pub fn status(&self) -> GameStatus {
        if let Some((player, _)) = winning_line(self.board()) {
            GameStatus::Won(player)
        } else if self.board().is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress(self.current_player())
        }
    }

    /// The completed line and its owner, if the game is won
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        winning_line(self.board())
    }

    /// Place the current player's mark at `cell` (0-8).
    ///
    /// Legality is checked against the live board on every call: the game
    /// must have no winner and the cell must be empty and in range. On
    /// error nothing changes; on success the successor snapshot is appended
    /// to the history (discarding any future from a prior jump) and the
    /// turn passes.
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        if winner(self.board()).is_some() {
            return Err(MoveError::GameOver);
        }
        if cell >= CELLS {
            return Err(MoveError::OutOfRange(cell));
        }
        if self.board().get(cell) != Mark::Empty {
            return Err(MoveError::CellOccupied(cell));
        }

        let player = self.current_player();
        let next = self.board().with_mark(cell, player.mark());
        self.history.push(next);
        tracing::debug!(
            cell,
            player = player.name(),
            move_number = self.history.move_number(),
            "mark placed"
        );
        Ok(())
    }

    /// Move the view to a past snapshot; the sequence itself is untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)?;
        tracing::debug!(index, "jumped to move");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
