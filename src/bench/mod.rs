pub mod runner;

pub use runner::{run_benchmark, BenchmarkReport, FileOutcome, FileReport};
