// Text grid descriptions:
//
//   <rows> <cols>
//   <row> <col>
//   ...
//
// Every coordinate line marks one cell as a hit; everything else is 0.

use crate::core::{Grid, IddqdError, Result};

fn parse_pair(line_no: usize, line: &str, what: &str) -> Result<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(IddqdError::parse(
            line_no,
            format!("expected 2 {} tokens, found {}", what, tokens.len()),
        ));
    }
    let num = |tok: &str| {
        tok.parse::<usize>()
            .map_err(|_| IddqdError::parse(line_no, format!("not a non-negative integer: {:?}", tok)))
    };
    Ok((num(tokens[0])?, num(tokens[1])?))
}

pub fn parse_description(text: &str) -> Result<Grid> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| IddqdError::parse(1, "missing \"<rows> <cols>\" header"))?;
    let (rows, cols) = parse_pair(line_no, header, "dimension")?;
    if rows == 0 || cols == 0 {
        return Err(IddqdError::parse(line_no, format!("empty grid {}x{}", rows, cols)));
    }

    let mut hits = Vec::new();
    for (line_no, line) in lines {
        let (r, c) = parse_pair(line_no, line, "coordinate")?;
        if r >= rows || c >= cols {
            return Err(IddqdError::parse(
                line_no,
                format!("cell ({}, {}) outside {}x{} grid", r, c, rows, cols),
            ));
        }
        hits.push((r, c));
    }
    Grid::from_cells(rows, cols, &hits)
}

/// Renders a grid back into the description format, hits in row-major order.
pub fn to_description(grid: &Grid) -> String {
    let mut out = format!("{} {}", grid.rows(), grid.cols());
    for (r, c) in grid.hits() {
        out.push_str(&format!("\n{} {}", r, c));
    }
    out
}
