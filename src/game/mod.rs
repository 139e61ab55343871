//! Core tic-tac-toe logic: board snapshots, the move history with time
//! travel, win detection, and the session state machine that gates moves.

mod board;
mod history;
mod player;
mod session;
mod winner;

pub use board::{Board, Mark, CELLS, SIDE};
pub use history::GameHistory;
pub use player::Player;
pub use session::{GameStatus, Session};
pub use winner::{winner, winning_line, WIN_LINES};
