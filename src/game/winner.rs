use super::board::{Board, Mark};
use super::player::Player;

/// The eight completed lines of the grid: rows, columns, then diagonals.
/// Scan order is fixed; the first matching line is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the winner and the line they completed, if any.
///
/// Pure scan over [`WIN_LINES`]; nothing is cached. A full board with no
/// completed line still returns `None` — draw detection is the caller's
/// separate occupancy check ([`Board::is_full`]).
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if let Some(player) = Player::from_mark(mark) {
            if board.get(b) == mark && board.get(c) == mark {
                return Some((player, line));
            }
        }
    }
    None
}

/// Find the winner, if any.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
