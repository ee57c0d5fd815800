use itertools::Itertools;

use crate::basic::{BoardDim, Point, Pos};
use crate::color::Color;

pub const BACKGROUND: Color = Color::WHITE;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    pub occupied: bool,
    pub color: Color,
}

impl Cell {
    const EMPTY: Self = Self {
        occupied: false,
        color: BACKGROUND,
    };
}

/// A grid of colored cells mapped onto a fixed screen area.
///
/// Coordinates use a top-left origin and are never wrapped here,
/// out-of-bounds access is a caller bug and panics.
pub struct Surface {
    dim: BoardDim,
    cell_dim: Point,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(screen_size: Point, dim: BoardDim) -> Self {
        assert!(dim.x > 0 && dim.y > 0, "invalid board dimensions {:?}", dim);
        Self {
            dim,
            cell_dim: Point {
                x: screen_size.x / dim.x as f32,
                y: screen_size.y / dim.y as f32,
            },
            cells: vec![Cell::EMPTY; (dim.x * dim.y) as usize],
        }
    }

    pub fn dim(&self) -> BoardDim {
        self.dim
    }

    /// Size of one cell in pixels
    pub fn cell_dim(&self) -> Point {
        self.cell_dim
    }

    fn idx(&self, pos: Pos) -> usize {
        assert!(self.dim.contains(pos), "cell {:?} out of bounds {:?}", pos, self.dim);
        (pos.y * self.dim.x + pos.x) as usize
    }

    /// Occupy a cell, fails without overwriting if the cell is
    /// already occupied and `force` is false
    pub fn set_cell(&mut self, pos: Pos, color: Color, force: bool) -> bool {
        let idx = self.idx(pos);
        if self.cells[idx].occupied && !force {
            return false;
        }
        self.cells[idx] = Cell { occupied: true, color };
        true
    }

    /// Reset a cell to the background, fails if it was already empty
    pub fn clear_cell(&mut self, pos: Pos) -> bool {
        let idx = self.idx(pos);
        if !self.cells[idx].occupied {
            return false;
        }
        self.cells[idx] = Cell::EMPTY;
        true
    }

    pub fn query(&self, pos: Pos) -> Cell {
        self.cells[self.idx(pos)]
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// All occupied cells, sorted in cell-index order
    pub fn occupied_cells(&self) -> Vec<Pos> {
        (0..self.dim.y)
            .cartesian_product(0..self.dim.x)
            .filter(|&(y, x)| self.cells[(y * self.dim.x + x) as usize].occupied)
            .map(|(y, x)| Pos { x, y })
            .collect()
    }

    /// The renderable contents of the grid: the top-left pixel corner
    /// and color of every occupied cell (each `cell_dim` in size)
    pub fn materialize(&self) -> Vec<(Point, Color)> {
        (0..self.dim.y)
            .cartesian_product(0..self.dim.x)
            .filter_map(|(y, x)| {
                let cell = self.cells[(y * self.dim.x + x) as usize];
                cell.occupied.then(|| {
                    let corner = Point {
                        x: x as f32 * self.cell_dim.x,
                        y: y as f32 * self.cell_dim.y,
                    };
                    (corner, cell.color)
                })
            })
            .collect()
    }
}

#[cfg(test)]
const TEST_SCREEN: Point = Point { x: 800., y: 800. };

#[test]
fn test_set_query_clear_round_trip() {
    let mut surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    let pos = Pos { x: 7, y: 11 };
    let red = Color::from_rgb(255, 0, 0);

    assert_eq!(surface.query(pos), Cell::EMPTY);
    assert!(surface.set_cell(pos, red, false));
    assert_eq!(surface.query(pos), Cell { occupied: true, color: red });
    assert!(surface.clear_cell(pos));
    assert_eq!(surface.query(pos), Cell::EMPTY);
    // clearing an empty cell fails
    assert!(!surface.clear_cell(pos));
}

#[test]
fn test_no_silent_overwrite() {
    let mut surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    let pos = Pos { x: 0, y: 0 };
    let red = Color::from_rgb(255, 0, 0);
    let green = Color::from_rgb(0, 255, 0);

    assert!(surface.set_cell(pos, red, false));
    assert!(!surface.set_cell(pos, green, false));
    assert_eq!(surface.query(pos).color, red);
    assert!(surface.set_cell(pos, green, true));
    assert_eq!(surface.query(pos).color, green);
}

#[test]
fn test_clear_all() {
    let mut surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    surface.set_cell(Pos { x: 1, y: 2 }, Color::BLACK, false);
    surface.set_cell(Pos { x: 39, y: 39 }, Color::BLACK, false);
    surface.clear_all();
    assert!(surface.occupied_cells().is_empty());
    assert!(surface.materialize().is_empty());
}

#[test]
fn test_materialize_geometry() {
    let mut surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    let red = Color::from_rgb(255, 0, 0);
    surface.set_cell(Pos { x: 2, y: 3 }, red, false);

    let rects = surface.materialize();
    assert_eq!(rects.len(), 1);
    let (corner, color) = rects[0];
    assert_eq!(corner.x, 40.);
    assert_eq!(corner.y, 60.);
    assert_eq!(color, red);
    assert_eq!(surface.cell_dim().x, 20.);
    assert_eq!(surface.cell_dim().y, 20.);
}

#[test]
fn test_occupied_cells_sorted() {
    let mut surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    for pos in [
        Pos { x: 5, y: 9 },
        Pos { x: 0, y: 0 },
        Pos { x: 39, y: 0 },
        Pos { x: 2, y: 9 },
    ] {
        surface.set_cell(pos, Color::BLACK, false);
    }
    let occupied = surface.occupied_cells();
    assert_eq!(
        occupied,
        vec![
            Pos { x: 0, y: 0 },
            Pos { x: 39, y: 0 },
            Pos { x: 2, y: 9 },
            Pos { x: 5, y: 9 },
        ]
    );
}

#[test]
#[should_panic]
fn test_out_of_bounds_panics() {
    let surface = Surface::new(TEST_SCREEN, BoardDim { x: 40, y: 40 });
    let _ = surface.query(Pos { x: 40, y: 0 });
}
