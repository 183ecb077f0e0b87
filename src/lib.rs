//! Probability-density targeting engine for a Battleship CPU opponent.
//!
//! The crate is a library, not a process: a presentation layer supplies the
//! defender's ship layout, then repeatedly calls
//! [`BattleshipGame::take_turn`] and renders the reported shots. All
//! randomness flows through caller-provided [`rand::Rng`] values so games
//! are reproducible from a seed.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod matrix;
mod selector;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use matrix::*;
pub use selector::*;
pub use ship::*;
