use crate::direction::Direction;
use crate::world::{Color, Grid};

/// Render color of the ant, tracking the cell underneath it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    RedOnWhite,
    RedOnBlack,
}

impl Highlight {
    #[inline]
    pub const fn over(color: Color) -> Self {
        match color {
            Color::White => Highlight::RedOnWhite,
            Color::Black => Highlight::RedOnBlack,
        }
    }
}

/// The single ant: position, facing and cached highlight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub highlight: Highlight,
}

impl Ant {
    /// Create an ant standing on a white cell
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self {
            x,
            y,
            direction,
            highlight: Highlight::RedOnWhite,
        }
    }

    /// Ant at the centre of `grid`
    pub fn centered(grid: &Grid, direction: Direction) -> Self {
        let mut ant = Self::new(grid.width() / 2, grid.height() / 2, direction);
        ant.refresh_highlight(grid);
        ant
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// White turns clockwise, black counter-clockwise
    #[inline]
    pub fn turn(&mut self, under: Color) {
        self.direction = match under {
            Color::White => self.direction.clockwise(),
            Color::Black => self.direction.counter_clockwise(),
        };
    }

    /// Advance one cell along the current direction, wrapping around the grid
    #[inline]
    pub fn advance(&mut self, grid: &Grid) {
        let (x, y) = grid.neighbor(self.x, self.y, self.direction);
        self.x = x;
        self.y = y;
    }

    /// Recompute the highlight from the cell currently underneath
    #[inline]
    pub fn refresh_highlight(&mut self, grid: &Grid) {
        self.highlight = Highlight::over(grid.color_at(self.x, self.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let grid = Grid::new(50, 25).unwrap();
        let ant = Ant::centered(&grid, Direction::Left);

        assert_eq!(ant.position(), (25, 12));
        assert_eq!(ant.direction, Direction::Left);
        assert_eq!(ant.highlight, Highlight::RedOnWhite);
    }

    #[test]
    fn test_ant_turn() {
        let mut ant = Ant::new(0, 0, Direction::Up);

        ant.turn(Color::White);
        assert_eq!(ant.direction, Direction::Right);

        ant.turn(Color::Black);
        ant.turn(Color::Black);
        assert_eq!(ant.direction, Direction::Left);
    }

    #[test]
    fn test_ant_advance_wraps() {
        let grid = Grid::new(6, 4).unwrap();

        let mut ant = Ant::new(0, 0, Direction::Left);
        ant.advance(&grid);
        assert_eq!(ant.position(), (5, 0));

        ant.direction = Direction::Right;
        ant.advance(&grid);
        assert_eq!(ant.position(), (0, 0));

        ant.direction = Direction::Up;
        ant.advance(&grid);
        assert_eq!(ant.position(), (0, 3));
    }

    #[test]
    fn test_advance_then_opposite_returns_everywhere() {
        let grid = Grid::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                for &d in &Direction::ALL {
                    let mut ant = Ant::new(x, y, d);
                    ant.advance(&grid);
                    ant.direction = d.opposite();
                    ant.advance(&grid);
                    assert_eq!(ant.position(), (x, y));
                }
            }
        }
    }

    #[test]
    fn test_refresh_highlight() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut ant = Ant::new(1, 1, Direction::Up);

        grid.flip(1, 1);
        ant.refresh_highlight(&grid);
        assert_eq!(ant.highlight, Highlight::RedOnBlack);

        grid.flip(1, 1);
        ant.refresh_highlight(&grid);
        assert_eq!(ant.highlight, Highlight::RedOnWhite);
    }
}
