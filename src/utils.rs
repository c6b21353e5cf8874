use std::time::Duration;

/// Default grid columns
pub const DEFAULT_WIDTH: usize = 50;
/// Default grid rows
pub const DEFAULT_HEIGHT: usize = 25;
/// Default number of simulated steps
pub const DEFAULT_COUNT: u32 = 11_000;
/// Default pause between frames
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Glyph drawn for an empty cell
pub const CELL_GLYPH: char = ' ';
/// Glyph drawn for the ant
pub const ANT_GLYPH: char = '#';

/// Non-negative modulo: maps any `value` into `[0, modulus)`.
///
/// `%` truncates toward zero, so `-1 % 4 == -1`; this folds it back to `3`.
#[inline]
pub const fn wrap(value: isize, modulus: usize) -> usize {
    let m = modulus as isize;
    (((value % m) + m) % m) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range() {
        assert_eq!(wrap(0, 4), 0);
        assert_eq!(wrap(3, 4), 3);
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1, 4), 3);
        assert_eq!(wrap(-4, 4), 0);
        assert_eq!(wrap(-5, 4), 3);
    }

    #[test]
    fn test_wrap_overflowing() {
        assert_eq!(wrap(4, 4), 0);
        assert_eq!(wrap(50, 50), 0);
        assert_eq!(wrap(51, 50), 1);
    }
}
