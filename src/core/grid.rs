use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{IddqdError, Result};

/// How cell values other than 0 and 1 are treated when a grid is built
/// from raw numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellPolicy {
    /// Anything outside {0, 1} is an error.
    #[default]
    Strict,
    /// Any non-zero value counts as a hit cell.
    NonZeroIsHit,
}

impl CellPolicy {
    fn read(self, row: usize, col: usize, value: i64) -> Result<bool> {
        match (self, value) {
            (_, 0) => Ok(false),
            (_, 1) => Ok(true),
            (CellPolicy::NonZeroIsHit, _) => Ok(true),
            (CellPolicy::Strict, _) => Err(IddqdError::NonBinaryCell { row, col, value }),
        }
    }
}

/// Immutable binary grid, row-major. Both dimensions are at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    fn check_dims(rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(IddqdError::InvalidInput(format!(
                "grid must be at least 1x1, got {}x{}", rows, cols
            )));
        }
        Ok(())
    }

    /// Builds a grid from a cell function. Used by the transforms, which
    /// always produce well-formed dimensions.
    pub(crate) fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { rows, cols, cells }
    }

    /// All-zero grid of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dims(rows, cols)?;
        Ok(Self { rows, cols, cells: vec![false; rows * cols] })
    }

    /// All-zero grid with the listed `(row, col)` cells set to 1.
    pub fn from_cells(rows: usize, cols: usize, hits: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::zeros(rows, cols)?;
        for &(r, c) in hits {
            if r >= rows || c >= cols {
                return Err(IddqdError::InvalidInput(format!(
                    "cell ({}, {}) outside {}x{} grid", r, c, rows, cols
                )));
            }
            grid.cells[r * cols + c] = true;
        }
        Ok(grid)
    }

    /// Grid from nested rows of raw values, read through `policy`.
    pub fn from_rows<T: Copy + Into<i64>>(rows: &[Vec<T>], policy: CellPolicy) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        Self::check_dims(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(IddqdError::InvalidInput(format!(
                    "row {} has {} cells, expected {}", r, row.len(), cols
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                cells.push(policy.read(r, c, value.into())?);
            }
        }
        Ok(Self { rows: rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.cols + c]
    }

    pub fn row(&self, r: usize) -> &[bool] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Number of 1-valued cells.
    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Coordinates of every 1-valued cell, row-major.
    pub fn hits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter(|&(_, &cell)| cell).map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn transpose(&self) -> Grid {
        Grid::from_fn(self.cols, self.rows, |r, c| self.get(c, r))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|&cell| cell as u8).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = IddqdError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Grid::from_rows(&rows, CellPolicy::Strict)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 { writeln!(f)?; }
            let line: Vec<&str> = self.row(r).iter().map(|&cell| if cell { "1" } else { "0" }).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(Grid::zeros(0, 3), Err(IddqdError::InvalidInput(_))));
        assert!(matches!(Grid::zeros(3, 0), Err(IddqdError::InvalidInput(_))));
        assert!(matches!(Grid::from_rows::<u8>(&[], CellPolicy::Strict), Err(IddqdError::InvalidInput(_))));
        assert!(matches!(Grid::from_rows::<u8>(&[vec![]], CellPolicy::Strict), Err(IddqdError::InvalidInput(_))));
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![0, 1], vec![1]];
        assert!(matches!(Grid::from_rows(&rows, CellPolicy::Strict), Err(IddqdError::InvalidInput(_))));
    }

    #[test]
    fn strict_policy_rejects_non_binary() {
        let rows = vec![vec![0, 1], vec![2, 0]];
        match Grid::from_rows(&rows, CellPolicy::Strict) {
            Err(IddqdError::NonBinaryCell { row, col, value }) => {
                assert_eq!((row, col, value), (1, 0, 2));
            }
            other => panic!("expected NonBinaryCell, got {:?}", other),
        }
    }

    #[test]
    fn lenient_policy_maps_non_zero_to_hit() {
        let rows = vec![vec![0, 7], vec![255, 0]];
        let grid = Grid::from_rows(&rows, CellPolicy::NonZeroIsHit).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn policy_reads_values_outside_byte_range() {
        let rows: Vec<Vec<i64>> = vec![vec![0, 300], vec![-1, 1]];
        match Grid::from_rows(&rows, CellPolicy::Strict) {
            Err(IddqdError::NonBinaryCell { row, col, value }) => {
                assert_eq!((row, col, value), (0, 1, 300));
            }
            other => panic!("expected NonBinaryCell, got {:?}", other),
        }
        let grid = Grid::from_rows(&rows, CellPolicy::NonZeroIsHit).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![1, 1]]);
    }

    #[test]
    fn from_cells_sets_listed_cells() {
        let grid = Grid::from_cells(2, 3, &[(0, 2), (1, 0), (1, 0)]).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 1], vec![1, 0, 0]]);
        assert_eq!(grid.hit_count(), 2);
        assert_eq!(grid.hits().collect::<Vec<_>>(), vec![(0, 2), (1, 0)]);
    }

    #[test]
    fn from_cells_out_of_range() {
        assert!(Grid::from_cells(2, 2, &[(2, 0)]).is_err());
        assert!(Grid::from_cells(2, 2, &[(0, 2)]).is_err());
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = Grid::from_rows(&[vec![1, 0, 0], vec![0, 0, 1]], CellPolicy::Strict).unwrap();
        let t = grid.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.to_rows(), vec![vec![1, 0], vec![0, 0], vec![0, 1]]);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn display_matches_row_format() {
        let grid = Grid::from_rows(&[vec![1, 0], vec![0, 1]], CellPolicy::Strict).unwrap();
        assert_eq!(grid.to_string(), "1 0\n0 1");
    }

    #[test]
    fn serde_uses_nested_rows() {
        let grid = Grid::from_cells(2, 2, &[(0, 1)]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,1],[0,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>("[[0,3]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[0,-1]]").is_err());
    }
}
