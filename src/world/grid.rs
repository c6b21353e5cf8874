use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::utils::wrap;
use crate::world::cell::{Cell, Color};

/// Toroidal grid of two-state cells stored row-major in one buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Allocate a `width` x `height` grid with every cell white
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(SimError::InvalidDimensions { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SimError::Allocation { cells: len })?;
        cells.resize(len, Color::White);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Color at (x, y); callers keep coordinates in bounds
    #[inline]
    pub fn color_at(&self, x: usize, y: usize) -> Color {
        self.cells[self.offset(x, y)]
    }

    /// Toggle the cell and return its new color
    #[inline]
    pub fn flip(&mut self, x: usize, y: usize) -> Color {
        let idx = self.offset(x, y);
        let next = self.cells[idx].flipped();
        self.cells[idx] = next;
        next
    }

    /// Neighbouring coordinate one step along `direction`, wrapping at the edges
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> (usize, usize) {
        let (dx, dy) = direction.delta();
        (
            wrap(x as isize + dx, self.width),
            wrap(y as isize + dy, self.height),
        )
    }

    /// Row-major traversal of every cell
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &color)| Cell {
            x: i % width,
            y: i / width,
            color,
        })
    }

    /// Number of black cells
    pub fn count_black(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Color::Black).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells().count(), 12);
        assert!(grid.cells().all(|c| c.color == Color::White));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(SimError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut grid = Grid::new(5, 5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let before = grid.color_at(x, y);
                assert_eq!(grid.flip(x, y), before.flipped());
                grid.flip(x, y);
                assert_eq!(grid.color_at(x, y), before);
            }
        }
    }

    #[test]
    fn test_flip_touches_single_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.flip(1, 2);

        assert_eq!(grid.count_black(), 1);
        assert_eq!(grid.color_at(1, 2), Color::Black);
        assert_eq!(grid.color_at(2, 1), Color::White);
    }

    #[test]
    fn test_cells_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.flip(2, 0);

        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(
            cells[1],
            Cell {
                x: 1,
                y: 0,
                color: Color::White,
            }
        );
        assert_eq!(
            cells[2],
            Cell {
                x: 2,
                y: 0,
                color: Color::Black,
            }
        );
        assert_eq!(
            cells[3],
            Cell {
                x: 0,
                y: 1,
                color: Color::White,
            }
        );
        // restartable
        assert_eq!(grid.cells().count(), 6);
    }

    #[test]
    fn test_neighbor_wraps_edges() {
        let grid = Grid::new(5, 4).unwrap();

        assert_eq!(grid.neighbor(0, 0, Direction::Left), (4, 0));
        assert_eq!(grid.neighbor(4, 0, Direction::Right), (0, 0));
        assert_eq!(grid.neighbor(2, 0, Direction::Up), (2, 3));
        assert_eq!(grid.neighbor(2, 3, Direction::Down), (2, 0));
        assert_eq!(grid.neighbor(2, 2, Direction::Right), (3, 2));
    }

    #[test]
    fn test_neighbor_round_trip_at_edges_and_corners() {
        let (w, h) = (5, 4);
        let grid = Grid::new(w, h).unwrap();
        let mut positions = vec![(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)];
        positions.extend([(2, 0), (2, h - 1), (0, 1), (w - 1, 1)]);

        for &(x, y) in &positions {
            for &d in &Direction::ALL {
                let (nx, ny) = grid.neighbor(x, y, d);
                assert!(nx < w && ny < h);
                assert_eq!(grid.neighbor(nx, ny, d.opposite()), (x, y));
            }
        }
    }
}
