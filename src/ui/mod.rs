//! Terminal UI: start menu, rules page, and the game view for playing
//! Connect Four against another human or the computer.

mod app;
mod game_view;
mod menu_view;

pub use app::{App, GameMode};
