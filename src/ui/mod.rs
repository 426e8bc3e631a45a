//! Terminal UI: the game view, keyboard input and background bot moves.

mod app;
mod game_view;

pub use app::App;
