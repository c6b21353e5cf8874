use std::fmt;

/// Errors raised while setting up or driving the simulation
#[derive(Debug)]
pub enum SimError {
    /// Grid buffer could not be allocated
    Allocation { cells: usize },
    /// Terminal could not be put into drawing mode
    DisplayInit(std::io::Error),
    /// Drawing, flushing or reading a key failed
    Display(std::io::Error),
    /// Grid dimensions are zero or too large for the terminal
    InvalidDimensions { width: usize, height: usize },
    /// Unknown direction name
    InvalidDirection(String),
    /// User pressed Ctrl-C during the run
    Interrupted,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Allocation { cells } => {
                write!(f, "Cannot allocate grid of {} cells", cells)
            }
            SimError::DisplayInit(err) => write!(f, "Display init failed: {}", err),
            SimError::Display(err) => write!(f, "Display error: {}", err),
            SimError::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions: {}x{}", width, height)
            }
            SimError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            SimError::Interrupted => write!(f, "Interrupted"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::DisplayInit(err) | SimError::Display(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Display(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
