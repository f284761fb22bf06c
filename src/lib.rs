//! # Connect Four Mini
//!
//! A Connect Four game with a minimax computer opponent and a terminal UI
//! built with Ratatui. The engine and the move search are plain synchronous
//! functions; the UI is a thin collaborator that feeds columns into the
//! engine and renders the resulting state.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, alpha-beta minimax opponent, random baseline
//! - [`ui`] — Terminal UI: menu, rules page, game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
