//! Terminal UI: the interactive board, the move list with time travel, and
//! the status line.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
