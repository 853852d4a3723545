// Four-orientation solver: score the grid as given, then after each of
// three clockwise quarter turns, and keep the running maximum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Grid, IddqdError, Result, Score};
use crate::scoring::{scan_columns, ColumnHit};
use crate::transform::{rotate_cw, Orientation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationScore {
    pub orientation: Orientation,
    pub best: Option<ColumnHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub rows: usize,
    pub cols: usize,
    pub hit_cells: usize,
    pub orientations: Vec<OrientationScore>,
    /// Overall best, `None` for an all-zero grid.
    pub best: Option<Score>,
    /// First orientation that reached `best`.
    pub best_orientation: Option<Orientation>,
}

impl SolveReport {
    pub fn into_score(self) -> Result<Score> {
        self.best.ok_or(IddqdError::NoHits)
    }
}

pub fn report(grid: &Grid) -> SolveReport {
    let mut orientations = Vec::with_capacity(Orientation::ALL.len());
    let mut best: Option<(Score, Orientation)> = None;
    let mut current = grid.clone();

    for (i, &orientation) in Orientation::ALL.iter().enumerate() {
        if i > 0 {
            current = rotate_cw(&current);
        }
        let hit = scan_columns(&current);
        debug!(?orientation, hits = ?hit.map(|h| h.hits), "orientation scored");
        if let Some(h) = hit {
            if best.map_or(true, |(b, _)| h.hits > b) {
                best = Some((h.hits, orientation));
            }
        }
        orientations.push(OrientationScore { orientation, best: hit });
    }

    SolveReport {
        rows: grid.rows(),
        cols: grid.cols(),
        hit_cells: grid.hit_count(),
        orientations,
        best: best.map(|(score, _)| score),
        best_orientation: best.map(|(_, orientation)| orientation),
    }
}

/// Maximum hit count over the four rotations. An all-zero grid is
/// `IddqdError::NoHits`.
pub fn solve(grid: &Grid) -> Result<Score> {
    report(grid).into_score()
}
