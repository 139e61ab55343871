//! # Tic-Tac-Toe TUI
//!
//! A terminal tic-tac-toe game with a full move history and time travel:
//! every move is recorded as an immutable board snapshot, any past move can
//! be revisited, and playing on from a past position rewrites the timeline
//! from that point forward.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: board snapshots, win detection, history, session
//! - [`ui`] — Terminal UI: board, move list, status line
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
