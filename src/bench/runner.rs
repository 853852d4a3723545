// Batch runner: solves every grid file in a directory and summarises the
// scores. Files that fail to load are reported, not fatal.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::core::{CellPolicy, Score};
use crate::perception::load_grid;
use crate::solver::report;

#[derive(Debug)]
pub struct BenchmarkReport {
    pub total_files: usize,
    pub solved: usize,
    pub no_hits: usize,
    pub failed: usize,
    pub elapsed_ms: u64,
    /// (score, file count), highest score first.
    pub by_score: Vec<(Score, usize)>,
    pub per_file: Vec<FileReport>,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
    pub elapsed_us: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Solved { rows: usize, cols: usize, best: Score },
    NoHits { rows: usize, cols: usize },
    Failed(String),
}

fn is_grid_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|ext| ext == "txt" || ext == "json")
            .unwrap_or(false)
}

/// Runs every `.txt` / `.json` grid in `data_dir`, sorted by file name.
pub fn run_benchmark(
    data_dir: &Path,
    max_files: Option<usize>,
    policy: CellPolicy,
) -> anyhow::Result<BenchmarkReport> {
    let mut entries: Vec<_> = std::fs::read_dir(data_dir)
        .with_context(|| format!("cannot read grid directory {}", data_dir.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| is_grid_file(&e.path()))
        .collect();
    entries.sort_by_key(|e| e.file_name());

    if let Some(max) = max_files {
        entries.truncate(max);
    }

    let total_start = Instant::now();
    let mut per_file = Vec::with_capacity(entries.len());
    let mut score_counts: FxHashMap<Score, usize> = Default::default();

    for entry in &entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let start = Instant::now();

        let outcome = match load_grid(&path, policy) {
            Ok(grid) => {
                let rep = report(&grid);
                match rep.best {
                    Some(best) => {
                        *score_counts.entry(best).or_default() += 1;
                        FileOutcome::Solved { rows: rep.rows, cols: rep.cols, best }
                    }
                    None => FileOutcome::NoHits { rows: rep.rows, cols: rep.cols },
                }
            }
            Err(e) => {
                warn!(file = %name, error = %e, "skipping grid");
                FileOutcome::Failed(e.to_string())
            }
        };

        per_file.push(FileReport {
            name,
            outcome,
            elapsed_us: start.elapsed().as_micros() as u64,
        });
    }

    let elapsed_ms = total_start.elapsed().as_millis() as u64;
    let (mut solved, mut no_hits, mut failed) = (0, 0, 0);
    for f in &per_file {
        match f.outcome {
            FileOutcome::Solved { .. } => solved += 1,
            FileOutcome::NoHits { .. } => no_hits += 1,
            FileOutcome::Failed(_) => failed += 1,
        }
    }

    let mut by_score: Vec<(Score, usize)> = score_counts.into_iter().collect();
    by_score.sort_by(|a, b| b.0.cmp(&a.0));

    info!(files = per_file.len(), solved, no_hits, failed, elapsed_ms, "benchmark finished");

    Ok(BenchmarkReport {
        total_files: per_file.len(),
        solved,
        no_hits,
        failed,
        elapsed_ms,
        by_score,
        per_file,
    })
}

impl BenchmarkReport {
    pub fn print_summary(&self) {
        println!("=== IDDQD Grid Benchmark ===");
        println!("Files: {} | Solved: {} | No hits: {} | Failed: {}",
            self.total_files, self.solved, self.no_hits, self.failed);
        println!("Time: {}ms", self.elapsed_ms);
        println!("\nBy score:");
        for (score, count) in &self.by_score {
            println!("  {}: {} ({:.1}%)", score, count,
                *count as f64 / self.solved.max(1) as f64 * 100.0);
        }
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!("\nPer-file detail:");
        for f in &self.per_file {
            match &f.outcome {
                FileOutcome::Solved { rows, cols, best } => {
                    println!("  [OK] {} | {}x{} best={} time={}us", f.name, rows, cols, best, f.elapsed_us)
                }
                FileOutcome::NoHits { rows, cols } => {
                    println!("  [--] {} | {}x{} no hits time={}us", f.name, rows, cols, f.elapsed_us)
                }
                FileOutcome::Failed(msg) => println!("  [!!] {} | {}", f.name, msg),
            }
        }
    }
}
