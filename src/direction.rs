use crate::error::SimError;
use crate::utils::wrap;
use std::str::FromStr;

/// Ant facing; the discriminants give the clockwise cycle order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl FromStr for Direction {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"up" => Ok(Direction::Up),
            b"right" => Ok(Direction::Right),
            b"down" => Ok(Direction::Down),
            b"left" => Ok(Direction::Left),
            _ => Err(SimError::InvalidDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// All directions in clockwise order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Position in the clockwise cycle
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Rotate by `delta` quarter turns; positive is clockwise
    #[inline]
    pub const fn rotate(self, delta: isize) -> Self {
        Self::ALL[wrap(self.index() as isize + delta, 4)]
    }

    #[inline]
    pub const fn clockwise(self) -> Self {
        self.rotate(1)
    }

    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        self.rotate(-1)
    }

    pub const fn opposite(self) -> Self {
        self.rotate(2)
    }

    /// Unit step as (dx, dy); y grows downward
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}
