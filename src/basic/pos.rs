use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use super::dir::Dir;
use Dir::*;

// INVARIANT: origin is the top-left corner, x grows right, y grows down
#[derive(Eq, PartialEq, Copy, Clone, Add, Hash)]
pub struct Pos {
    pub x: isize,
    pub y: isize,
}

pub type BoardDim = Pos;

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// cell-index order: row-major, y before x, consistent with
// Surface cell layout (idx = y * width + x)
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Pos {
    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let d = dist as isize;
        let Self { x, y } = self;
        match dir {
            U => Self { x, y: y - d },
            D => Self { x, y: y + d },
            L => Self { x: x - d, y },
            R => Self { x: x + d, y },
        }
    }

    // basically mod width, mod height
    // if the point is n cells out of bounds, it will be n cells from the edge
    #[must_use]
    pub fn wrap_around(self, board_dim: BoardDim) -> Self {
        Self {
            x: self.x.rem_euclid(board_dim.x),
            y: self.y.rem_euclid(board_dim.y),
        }
    }

    // wraps around board edges
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dist: usize, board_dim: BoardDim) -> Self {
        self.translate(dir, dist).wrap_around(board_dim)
    }

    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }
}

#[test]
fn test_translate() {
    let pos = Pos { x: 5, y: 5 };
    [
        (U, 1, Pos { x: 5, y: 4 }),
        (D, 1, Pos { x: 5, y: 6 }),
        (L, 3, Pos { x: 2, y: 5 }),
        (R, 3, Pos { x: 8, y: 5 }),
    ]
    .iter()
    .for_each(|&(dir, dist, expect)| assert_eq!(pos.translate(dir, dist), expect));
}

#[test]
fn test_wrapping_translate() {
    let board_dim = BoardDim { x: 40, y: 30 };
    [
        ((0, 10), L, Pos { x: 39, y: 10 }),
        ((39, 10), R, Pos { x: 0, y: 10 }),
        ((10, 0), U, Pos { x: 10, y: 29 }),
        ((10, 29), D, Pos { x: 10, y: 0 }),
        ((20, 20), L, Pos { x: 19, y: 20 }),
    ]
    .iter()
    .for_each(|&((x, y), dir, expect)| {
        let pos = Pos { x, y };
        assert_eq!(pos.wrapping_translate(dir, 1, board_dim), expect);
    });
}

#[test]
fn test_contains() {
    let board_dim = BoardDim { x: 40, y: 40 };
    assert!(board_dim.contains(Pos { x: 0, y: 0 }));
    assert!(board_dim.contains(Pos { x: 39, y: 39 }));
    assert!(!board_dim.contains(Pos { x: 40, y: 0 }));
    assert!(!board_dim.contains(Pos { x: 0, y: -1 }));
}
