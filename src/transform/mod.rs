// Grid orientations. Only the four rotations are used; mirrored
// layouts are never explored.

use serde::{Deserialize, Serialize};

use crate::core::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Original,
    Cw90,
    Cw180,
    Cw270,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Original,
        Orientation::Cw90,
        Orientation::Cw180,
        Orientation::Cw270,
    ];
}

/// 90-degree clockwise rotation. Input cell `(r, c)` lands on
/// `(c, rows - 1 - r)` of a `cols x rows` result.
pub fn rotate_cw(g: &Grid) -> Grid {
    let rows = g.rows();
    Grid::from_fn(g.cols(), rows, |r, c| g.get(rows - 1 - c, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellPolicy;

    fn grid(rows: &[&[u8]]) -> Grid {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Grid::from_rows(&rows, CellPolicy::Strict).unwrap()
    }

    #[test]
    fn rotate_cw_moves_cells_clockwise() {
        let g = grid(&[&[1, 0, 0], &[0, 0, 1]]);
        let r = rotate_cw(&g);
        assert_eq!((r.rows(), r.cols()), (3, 2));
        assert_eq!(r.to_rows(), vec![vec![0, 1], vec![0, 0], vec![1, 0]]);
    }

    #[test]
    fn rotate_cw_maps_every_cell() {
        let g = Grid::from_cells(4, 3, &[(0, 0), (1, 2), (3, 1)]).unwrap();
        let r = rotate_cw(&g);
        for row in 0..g.rows() {
            for col in 0..g.cols() {
                assert_eq!(g.get(row, col), r.get(col, g.rows() - 1 - row));
            }
        }
    }

    #[test]
    fn four_rotations_round_trip() {
        let g = Grid::from_cells(6, 10, &[(2, 4), (4, 6), (5, 5), (0, 0), (0, 6)]).unwrap();
        let back = (0..4).fold(g.clone(), |acc, _| rotate_cw(&acc));
        assert_eq!(back, g);
    }

    #[test]
    fn single_cell_is_fixed() {
        let g = grid(&[&[1]]);
        assert_eq!(rotate_cw(&g), g);
    }
}
