//! Output side of the simulation.
//!
//! The engine only talks to a [`Display`]; the terminal backend and the
//! headless recorder both implement it.

pub mod headless;
pub mod terminal;

pub use headless::HeadlessDisplay;
pub use terminal::TerminalDisplay;

use crate::ant::Highlight;
use crate::error::Result;
use crate::utils::{ANT_GLYPH, CELL_GLYPH};
use crate::world::Color;
use std::time::Duration;

/// What to draw at one grid position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Cell(Color),
    Ant(Highlight),
}

impl Paint {
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Paint::Cell(_) => CELL_GLYPH,
            Paint::Ant(_) => ANT_GLYPH,
        }
    }
}

/// Character-grid display driven once per frame
pub trait Display {
    /// Draw one glyph at column `x`, row `y`
    fn draw(&mut self, x: usize, y: usize, paint: Paint) -> Result<()>;

    /// Write the status line over the top row
    fn draw_status(&mut self, text: &str) -> Result<()>;

    /// Make everything drawn since the last call visible
    fn present(&mut self) -> Result<()>;

    /// Hold the frame for `delay`.
    ///
    /// Returns [`SimError::Interrupted`](crate::error::SimError::Interrupted)
    /// if the user asks to quit while waiting.
    fn idle(&mut self, delay: Duration) -> Result<()> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(())
    }

    /// Block until a key is pressed
    fn wait_for_key(&mut self) -> Result<()>;
}
