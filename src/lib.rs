//! Wraparound grid Snake: the game model plus a ratatui terminal front end.
//!
//! [`game::GameState`] owns the simulation and knows nothing about the
//! terminal; [`renderer`] and [`ui`] only read it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
