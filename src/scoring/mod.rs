// Column scan scorer.
//
// Each column keeps a running count. Walking the grid row by row, a
// column's count grows by one for every 1-valued left/right neighbour in
// the current row. When the column's own cell is 1 it adds itself, the
// count is offered as a candidate best, and the column starts over.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Grid, Score};

/// Best run found by one scan, with the cell that closed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHit {
    pub hits: Score,
    pub row: usize,
    pub col: usize,
}

/// Scans the grid in row-major order and returns the best run, or `None`
/// when the grid has no 1-valued cell. Ties keep the earliest run.
pub fn scan_columns(grid: &Grid) -> Option<ColumnHit> {
    let cols = grid.cols();
    let mut current: Vec<Score> = vec![0; cols];
    let mut best: Option<ColumnHit> = None;

    for r in 0..grid.rows() {
        let row = grid.row(r);
        for c in 0..cols {
            if c + 1 < cols && row[c + 1] {
                current[c] += 1;
            }
            if c > 0 && row[c - 1] {
                current[c] += 1;
            }
            if row[c] {
                current[c] += 1;
                trace!(row = r, col = c, hits = current[c], "column hit");
                if best.map_or(true, |b| current[c] > b.hits) {
                    best = Some(ColumnHit { hits: current[c], row: r, col: c });
                }
                current[c] = 0;
            }
        }
    }
    best
}

/// Best run length of one orientation, `None` without a hit cell.
pub fn column_score(grid: &Grid) -> Option<Score> {
    scan_columns(grid).map(|hit| hit.hits)
}
