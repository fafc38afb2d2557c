use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use krypto::{EquationSolver, Solution, SolverConfig, parse_number_list};
use log::{LevelFilter, info, warn};

/// Verbosity of the search log
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Krypto - Find equations over a set of numbers that evaluate to a target
#[derive(Parser, Debug)]
#[command(name = "krypto")]
#[command(
    about = "Find left-to-right arithmetic equations over a set of numbers that evaluate to a target"
)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct CliArgs {
    /// Numbers to draw from, separated by spaces or commas
    #[arg(required = true, num_args = 1..)]
    pub numbers: Vec<String>,

    /// Target value every equation must reach
    #[arg(short, long)]
    pub target: i64,

    /// Use exactly this many numbers (default: every count from --min-operands up)
    #[arg(short = 'k', long)]
    pub operands: Option<usize>,

    /// Smallest operand count tried when --operands is not given
    #[arg(long, default_value_t = 2)]
    pub min_operands: usize,

    /// Spread the search across all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub operands: Option<usize>,
    pub min_operands: usize,
    pub parallel: bool,
    pub log_level: LogLevel,
}

/// Turn raw arguments into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let numbers = parse_number_list(&args.numbers.join(",")).context("Invalid number list")?;

    if args.min_operands < 2 {
        bail!("--min-operands must be at least 2, got {}", args.min_operands);
    }

    Ok(CliConfig {
        numbers,
        target: args.target,
        operands: args.operands,
        min_operands: args.min_operands,
        parallel: args.parallel,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logging")
}

/// Solutions for a single operand count, sequential or parallel
fn solve_count(
    solver: &EquationSolver,
    config: &CliConfig,
    operand_count: usize,
) -> Result<Vec<Solution>> {
    if config.parallel {
        return solver
            .search_parallel(&config.numbers, config.target, operand_count)
            .with_context(|| format!("Search with {} operands failed", operand_count));
    }

    let mut solutions = solver
        .search(&config.numbers, config.target, operand_count)
        .with_context(|| format!("Search with {} operands failed", operand_count))?;
    let found: Vec<Solution> = solutions.by_ref().collect();

    let stats = solutions.stats();
    info!(
        "{} operands: {} candidates, {} skipped, {} solutions",
        operand_count,
        stats.considered(),
        stats.skipped(),
        stats.matched()
    );
    Ok(found)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(config.log_level)?;

    let solver = EquationSolver::new(SolverConfig {
        min_operands: config.min_operands,
    });

    let counts: Vec<usize> = match config.operands {
        Some(count) => vec![count],
        None => solver.operand_counts(config.numbers.len()).collect(),
    };

    info!(
        "Searching for equations over {:?} that equal {}",
        config.numbers, config.target
    );

    let mut total = 0usize;
    for operand_count in counts {
        for solution in solve_count(&solver, &config, operand_count)? {
            println!("{}", solution);
            total += 1;
        }
    }

    if total == 0 {
        warn!("No matching equation found");
        println!("No solutions.");
    }
    Ok(())
}
