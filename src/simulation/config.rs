use crate::cli::Args;
use crate::error::{Result, SimError};
use crate::utils::{DEFAULT_COUNT, DEFAULT_DELAY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::time::Duration;

/// Grid size, run length and frame pacing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub count: u32,
    pub delay: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            count: DEFAULT_COUNT,
            delay: DEFAULT_DELAY,
        }
    }
}

impl SimConfig {
    /// Config for tests and headless runs: no frame delay
    pub fn headless(width: usize, height: usize, count: u32) -> Self {
        Self {
            width,
            height,
            count,
            delay: Duration::ZERO,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            count: args.count,
            delay: if args.headless {
                Duration::ZERO
            } else {
                Duration::from_millis(args.delay_ms)
            },
        }
    }

    /// Dimensions must be non-zero and addressable as terminal coordinates
    pub fn validate(&self) -> Result<()> {
        let limit = usize::from(u16::MAX);
        if self.width == 0 || self.height == 0 || self.width > limit || self.height > limit {
            return Err(SimError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();

        assert_eq!((config.width, config.height), (50, 25));
        assert_eq!(config.count, 11_000);
        assert_eq!(config.delay, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        assert!(SimConfig::headless(0, 10, 1).validate().is_err());
        assert!(SimConfig::headless(10, 0, 1).validate().is_err());
        assert!(SimConfig::headless(70_000, 10, 1).validate().is_err());
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "langtons_ant",
            "--width",
            "8",
            "--height",
            "6",
            "--count",
            "3",
        ]);
        let config = SimConfig::from_args(&args);

        assert_eq!(
            config,
            SimConfig {
                width: 8,
                height: 6,
                count: 3,
                delay: Duration::from_millis(100),
            }
        );

        let args = Args::parse_from(["langtons_ant", "--headless"]);
        assert_eq!(SimConfig::from_args(&args).delay, Duration::ZERO);
    }
}
