pub mod config;
pub mod engine;

pub use config::SimConfig;
pub use engine::{RunSummary, SimulationEngine, StepRecord};
