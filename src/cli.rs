use crate::direction::Direction;
use crate::utils::{DEFAULT_COUNT, DEFAULT_DELAY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use clap::Parser;

/// CLI arguments for the Langton's ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's ant on a toroidal grid")]
pub struct Args {
    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of steps to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Pause between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Random seed for the starting direction
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed starting direction (up, right, down, left)
    #[arg(short = 'd', long)]
    pub direction: Option<Direction>,

    /// Run without a terminal and print a summary
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}
