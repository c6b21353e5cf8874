//! # Langton's Ant
//!
//! A single ant walking a toroidal grid of black and white cells.
//!
//! On a white cell the ant turns clockwise, on a black cell counter-clockwise;
//! either way it flips the cell and steps forward, wrapping at the edges.
//! The simulation core is display-agnostic: frames go through the
//! [`display::Display`] trait, backed by a crossterm terminal or a headless
//! recorder.

pub mod ant;
pub mod cli;
pub mod direction;
pub mod display;
pub mod error;
pub mod simulation;
pub mod utils;
pub mod world;

pub use ant::{Ant, Highlight};
pub use cli::Args;
pub use direction::Direction;
pub use error::{Result, SimError};
pub use simulation::{SimConfig, SimulationEngine};
pub use world::{Color, Grid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::display::{Display, HeadlessDisplay, TerminalDisplay};
    pub use crate::{
        Ant, Args, Color, Direction, Grid, Highlight, Result, SimConfig, SimError,
        SimulationEngine,
    };
}
