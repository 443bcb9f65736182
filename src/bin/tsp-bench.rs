//! TSP benchmark runner CLI.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{fmt::Formatter, Builder};
use log::{Level, LevelFilter};
use u_tsp::bench::{analysis, record, BenchmarkConfig, BenchmarkRunner, Instance};
use u_tsp::random::create_rng;
use u_tsp::two_opt::Evaluation;

#[derive(Parser)]
#[command(name = "tsp-bench")]
#[command(about = "Benchmark nearest neighbor, 2-opt, simulated annealing and Held-Karp")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random instances as tsp_<N>.txt files
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "data/random")]
        output: PathBuf,

        /// Instance sizes
        #[arg(short, long, value_delimiter = ',', default_values_t = vec![10, 15, 20, 50, 100, 500])]
        sizes: Vec<usize>,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Run the benchmark and write results as CSV
    Run {
        /// Directory with tsp_<N>.txt instances; generated in memory if omitted
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// JSON benchmark configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Instance sizes (overrides the configuration)
        #[arg(short, long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Random seed (overrides the configuration)
        #[arg(long)]
        seed: Option<u64>,

        /// 2-opt candidate evaluation (overrides the configuration)
        #[arg(long, value_enum)]
        two_opt: Option<EvaluationArg>,

        /// Output CSV file
        #[arg(long, default_value = "results/results.csv")]
        csv: PathBuf,
    },

    /// Print best-known costs and optimality gaps from a results CSV
    Analyze {
        /// Results CSV file
        #[arg(default_value = "results/results.csv")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EvaluationArg {
    /// Constant-time edge delta
    Delta,
    /// Recompute the full tour cost per candidate
    Full,
}

impl From<EvaluationArg> for Evaluation {
    fn from(arg: EvaluationArg) -> Self {
        match arg {
            EvaluationArg::Delta => Evaluation::Delta,
            EvaluationArg::Full => Evaluation::FullRecompute,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            output,
            sizes,
            seed,
        } => {
            let mut rng = create_rng(seed);
            for n in sizes {
                let path = Instance::path_in(&output, n);
                Instance::generate(n, &mut rng)
                    .save(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
        }

        Commands::Run {
            data,
            config,
            sizes,
            seed,
            two_opt,
            csv,
        } => {
            let mut config = match config {
                Some(path) => BenchmarkConfig::from_json_file(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => BenchmarkConfig::default(),
            };
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(arg) = two_opt {
                config.two_opt_evaluation = arg.into();
            }

            let records = match data {
                Some(dir) => {
                    let mut instances = Vec::new();
                    for &n in &config.sizes {
                        let path = Instance::path_in(&dir, n);
                        if !path.exists() {
                            log::warn!("{} not found, skipping N={n}", path.display());
                            continue;
                        }
                        let instance = Instance::load(&path)
                            .with_context(|| format!("failed to read {}", path.display()))?;
                        println!("Running tests for N={}...", instance.len());
                        instances.push(instance);
                    }
                    BenchmarkRunner::run_instances(&instances, &config)?
                }
                None => {
                    println!("Running tests for N in {:?}...", config.sizes);
                    BenchmarkRunner::run(&config)?
                }
            };

            record::write_csv_file(&csv, &records)
                .with_context(|| format!("failed to write {}", csv.display()))?;
            println!("Results saved to: {}", csv.display());
        }

        Commands::Analyze { file } => {
            let records = record::read_csv_file(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            if records.is_empty() {
                println!("No results in {}", file.display());
            } else {
                print!("{}", analysis::render_report(&records));
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("logger init failed")
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
