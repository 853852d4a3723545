use std::path::Path;

use tracing::debug;

use super::description::parse_description;
use crate::core::{CellPolicy, Grid, Result};

/// Reads a grid from a file. `.json` files hold a nested `[[0, 1, ...]]`
/// matrix; anything else is a text description.
pub fn load_grid(path: impl AsRef<Path>, policy: CellPolicy) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().map(|ext| ext == "json").unwrap_or(false);
    debug!(path = %path.display(), is_json, "loading grid");
    if is_json {
        grid_from_json(&content, policy)
    } else {
        parse_description(&content)
    }
}

/// Same as `load_grid` for in-memory input; a leading `[` means JSON.
pub fn load_grid_str(content: &str, policy: CellPolicy) -> Result<Grid> {
    if content.trim_start().starts_with('[') {
        grid_from_json(content, policy)
    } else {
        parse_description(content)
    }
}

fn grid_from_json(content: &str, policy: CellPolicy) -> Result<Grid> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(content)?;
    Grid::from_rows(&rows, policy)
}
