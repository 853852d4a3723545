use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iddqd::bench::run_benchmark;
use iddqd::config::{OutputFormat, SolverConfig};
use iddqd::core::{CellPolicy, Grid};
use iddqd::perception::{load_grid, load_grid_str};
use iddqd::solver::report;

#[derive(Parser, Debug)]
#[command(name = "iddqd", version, about = "Best column hit run over the four rotations of a binary grid")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "iddqd=trace")
    #[arg(long, global = true)]
    log: Option<String>,

    /// Treat any non-zero JSON cell as a hit instead of rejecting it
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve one grid (text description or JSON matrix; "-" reads stdin)
    Solve {
        input: String,

        /// Print the full per-orientation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve every .txt / .json grid in a directory
    Bench {
        dir: PathBuf,

        #[arg(long)]
        max: Option<usize>,

        /// One line per file
        #[arg(long)]
        detail: bool,
    },
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(input: &str, policy: CellPolicy) -> Result<Grid> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).context("reading stdin")?;
        return Ok(load_grid_str(&content, policy)?);
    }
    load_grid(input, policy).with_context(|| format!("loading grid from {}", input))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = SolverConfig::load_or_default(cli.config.as_deref())
        .context("loading config")?;
    if cli.lenient {
        config.cell_policy = CellPolicy::NonZeroIsHit;
    }

    let filter = cli.log.clone().or_else(|| config.log_filter.clone()).unwrap_or_else(|| "warn".into());
    init_logging(&filter);

    match cli.command {
        Commands::Solve { input, json } => {
            if json {
                config.output = OutputFormat::Json;
            }
            let grid = read_input(&input, config.cell_policy)?;
            info!(rows = grid.rows(), cols = grid.cols(), hits = grid.hit_count(), "grid loaded");
            let rep = report(&grid);
            match config.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rep)?),
                OutputFormat::Text => println!("{}", rep.into_score()?),
            }
        }
        Commands::Bench { dir, max, detail } => {
            let rep = run_benchmark(&dir, max, config.cell_policy)?;
            if detail {
                rep.print_detail();
            } else {
                rep.print_summary();
            }
            if rep.failed > 0 {
                anyhow::bail!("{} grid file(s) failed to load", rep.failed);
            }
        }
    }
    Ok(())
}
