//! Grid-based terminal Snake.
//!
//! The gameplay core is deliberately small: [`snake`] owns movement and the
//! strict collision rule, [`food`] owns spawning, [`game`] owns the
//! Running/GameOver state machine, and [`scheduler`] drives ticks at a fixed
//! logical rate. Everything else ([`renderer`], [`ui`], [`input`]) is a thin
//! projection of per-tick [`game::Snapshot`]s.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
