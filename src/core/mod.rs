pub mod error;
pub mod grid;

pub use error::{IddqdError, Result};
pub use grid::{CellPolicy, Grid};

/// Hit count of one column run.
pub type Score = u32;
