pub mod core;
pub mod transform;
pub mod scoring;
pub mod solver;
pub mod perception;
pub mod config;
pub mod bench;

pub use crate::core::{CellPolicy, Grid, IddqdError, Result, Score};
pub use crate::solver::{report, solve, SolveReport};
