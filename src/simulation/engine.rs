use crate::ant::Ant;
use crate::direction::Direction;
use crate::display::{Display, Paint};
use crate::error::Result;
use crate::simulation::config::SimConfig;
use crate::world::{Color, Grid};
use colored::Colorize;
use std::time::{Duration, Instant};

/// What one step changed: the flipped cell and where the ant went
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub from: (usize, usize),
    pub flipped_to: Color,
    pub direction: Direction,
    pub to: (usize, usize),
}

/// Outcome of a full run
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub steps: u32,
    pub black_cells: usize,
    pub ant_position: (usize, usize),
    pub direction: Direction,
    pub elapsed: Duration,
}

/// Owns the grid and the ant and sequences steps and frames
pub struct SimulationEngine {
    config: SimConfig,
    grid: Grid,
    ant: Ant,
    iteration: u32,
}

impl SimulationEngine {
    /// Build a white grid with the ant centred and facing `direction`
    pub fn new(config: SimConfig, direction: Direction) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let ant = Ant::centered(&grid, direction);
        Ok(Self {
            config,
            grid,
            ant,
            iteration: 0,
        })
    }

    /// Same as [`SimulationEngine::new`] with a uniformly random starting direction
    pub fn with_rng(config: SimConfig, rng: &mut fastrand::Rng) -> Result<Self> {
        let direction = Direction::from_index(rng.usize(..Direction::ALL.len()));
        Self::new(config, direction)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Steps taken so far
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Apply the turn rule once: turn on the current cell, flip it, move, refresh highlight
    pub fn step(&mut self) -> StepRecord {
        let from = self.ant.position();
        let under = self.grid.color_at(from.0, from.1);

        self.ant.turn(under);
        let flipped_to = self.grid.flip(from.0, from.1);
        self.ant.advance(&self.grid);
        self.ant.refresh_highlight(&self.grid);
        self.iteration += 1;

        StepRecord {
            from,
            flipped_to,
            direction: self.ant.direction,
            to: self.ant.position(),
        }
    }

    /// Paint every cell, then the status line
    pub fn render(&self, display: &mut dyn Display) -> Result<()> {
        for cell in self.grid.cells() {
            display.draw(cell.x, cell.y, Paint::Cell(cell.color))?;
        }
        display.draw_status(&format!("iteration: {}", self.iteration))
    }

    /// Run `config.count` frames, then wait for a key
    pub fn run(&mut self, display: &mut dyn Display) -> Result<RunSummary> {
        let start = Instant::now();
        log::info!(
            "starting {}x{} run: {} steps, ant at {:?} facing {}",
            self.grid.width(),
            self.grid.height(),
            self.config.count,
            self.ant.position(),
            self.ant.direction.as_str()
        );

        for _ in 0..self.config.count {
            self.render(display)?;
            display.draw(self.ant.x, self.ant.y, Paint::Ant(self.ant.highlight))?;

            let record = self.step();
            log::trace!(
                "step {}: {:?} now {}, moved {} to {:?}",
                self.iteration,
                record.from,
                record.flipped_to.as_str(),
                record.direction.as_str(),
                record.to
            );

            display.present()?;
            display.idle(self.config.delay)?;
        }

        let summary = self.summary(start.elapsed());
        log::info!(
            "run complete after {} steps, {} black cells",
            summary.steps,
            summary.black_cells
        );

        display.draw_status("simulation complete. press any key to exit")?;
        display.present()?;
        display.wait_for_key()?;

        Ok(summary)
    }

    fn summary(&self, elapsed: Duration) -> RunSummary {
        RunSummary {
            steps: self.iteration,
            black_cells: self.grid.count_black(),
            ant_position: self.ant.position(),
            direction: self.ant.direction,
            elapsed,
        }
    }

    /// Print run summary
    pub fn print_summary(&self, summary: &RunSummary) {
        let (x, y) = summary.ant_position;
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            format!("({}x{})", self.grid.width(), self.grid.height()).dimmed(),
            "|".dimmed(),
            format!("steps={}", summary.steps).cyan(),
            format!("black={}", summary.black_cells).cyan(),
            format!("ant=({},{}) {}", x, y, summary.direction.as_str()).cyan(),
        );
    }
}
