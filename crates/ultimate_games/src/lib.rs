//! Terminal front end and match simulator for Ultimate Tic-Tac-Toe.
//!
//! The binary wires these pieces together: [`GameConfig`] supplies match
//! settings, [`players`] provides human and engine seats, and the
//! [`Orchestrator`] runs games on a [`ultimate_tictactoe::GameSession`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
pub mod players;
mod simulation;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use orchestrator::{GameEvent, MAX_CONSECUTIVE_REJECTIONS, Orchestrator};
pub use simulation::{SimulationReport, run_simulation};
