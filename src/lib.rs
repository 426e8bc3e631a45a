//! # Connect Four
//!
//! Connect Four for two participants, each a human or a minimax bot of
//! difficulty 1-3, played in a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, win detection and the game session
//! - [`ai`]: Threat-counting evaluator, search tree and alpha-beta minimax
//! - [`ui`]: Terminal UI: game view and background bot moves
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
