use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{BoardDim, Pos};

/// Pick a uniformly random unoccupied cell, `None` if the board is full.
///
/// `occupied_cells` must be sorted in cell-index order (`Pos`'s `Ord`)
/// and free of duplicates.
pub fn random_free_spot(
    occupied_cells: &[Pos],
    board_dim: BoardDim,
    rng: &mut impl Rng,
) -> Option<Pos> {
    let free_spaces = (board_dim.x * board_dim.y) as usize - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    // index into the free cells, shifted past each occupied cell below it
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for Pos { x, y } in occupied_cells {
        let idx = (y * board_dim.x + x) as usize;
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < (board_dim.x * board_dim.y) as usize);
    Some(Pos {
        x: new_idx as isize % board_dim.x,
        y: new_idx as isize / board_dim.x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn full_board_has_no_free_spot() {
        let board_dim = BoardDim { x: 3, y: 3 };
        let occupied = (0..3_isize)
            .cartesian_product(0..3_isize)
            .map(|(y, x)| Pos { x, y })
            .collect_vec();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_free_spot(&occupied, board_dim, &mut rng), None);
    }

    #[test]
    fn never_lands_on_an_occupied_cell() {
        let board_dim = BoardDim { x: 5, y: 5 };
        // sorted in cell-index order
        let occupied = vec![
            Pos { x: 0, y: 0 },
            Pos { x: 3, y: 0 },
            Pos { x: 1, y: 2 },
            Pos { x: 4, y: 2 },
            Pos { x: 2, y: 4 },
        ];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let pos = random_free_spot(&occupied, board_dim, &mut rng).unwrap();
            assert!(board_dim.contains(pos));
            assert!(!occupied.contains(&pos), "landed on occupied cell {:?}", pos);
        }
    }

    #[test]
    fn free_spots_are_uniform() {
        let board_dim = BoardDim { x: 5, y: 5 };
        let occupied = vec![
            Pos { x: 0, y: 0 },
            Pos { x: 3, y: 0 },
            Pos { x: 1, y: 2 },
            Pos { x: 4, y: 2 },
            Pos { x: 2, y: 4 },
        ];
        let free_cells = 20;
        let trials = 20_000;

        let mut rng = StdRng::seed_from_u64(2);
        let mut counts: HashMap<Pos, usize> = HashMap::new();
        for _ in 0..trials {
            let pos = random_free_spot(&occupied, board_dim, &mut rng).unwrap();
            *counts.entry(pos).or_default() += 1;
        }

        assert_eq!(counts.len(), free_cells);
        let expected = trials / free_cells;
        for (pos, count) in counts {
            // expected 1000 per cell, sd ~31; this is a ~5 sigma corridor
            assert!(
                (count as isize - expected as isize).abs() < 150,
                "cell {:?} was picked {} times, expected about {}",
                pos,
                count,
                expected
            );
        }
    }
}
