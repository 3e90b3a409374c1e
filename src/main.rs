//! # Gridkit Demo Entry Point
//!
//! Builds a grid from command line options, seeds it with random digits, and
//! prints the neighbours of a chosen cell.

use clap::Parser;
use gridkit::{Bounded2DGrid, GridConfig, GridError, GridResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "dev-tools")]
use tracing::{info, Level};
#[cfg(not(feature = "dev-tools"))]
use log::info;

/// Command line arguments for the gridkit demo.
#[derive(Parser, Debug)]
#[command(name = "gridkit")]
#[command(about = "Fixed-size 2D grid with toroidal addressing and neighbour queries")]
#[command(version)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = gridkit::config::DEFAULT_GRID_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = gridkit::config::DEFAULT_GRID_HEIGHT)]
    height: usize,

    /// Wrap coordinates around the grid edges
    #[arg(long)]
    wrap: bool,

    /// Random seed for the cell contents
    #[arg(short, long)]
    seed: Option<u64>,

    /// Column of the cell to inspect
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Row of the cell to inspect
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    y: i32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> GridResult<()> {
    initialize_logging(&args.log_level)?;

    info!("Starting gridkit v{}", gridkit::VERSION);

    let config = GridConfig::new(args.width, args.height).with_wrapping(args.wrap);
    let mut grid: Bounded2DGrid<u8> = Bounded2DGrid::from_config(&config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Seeding {}x{} grid with seed {}", grid.width(), grid.height(), seed);
    let mut rng = StdRng::seed_from_u64(seed);
    for cell in grid.iter_mut() {
        *cell = rng.gen_range(0..10);
    }

    println!("{}", grid);
    println!();

    let center = grid.get_item(args.x, args.y)?;
    println!("cell ({}, {}) = {}", args.x, args.y, center);
    println!(
        "manhattan:  {}",
        join(grid.manhattan_neighbours(args.x, args.y)?)
    );
    println!(
        "chessboard: {}",
        join(grid.chessboard_neighbours(args.x, args.y)?)
    );

    Ok(())
}

fn join(values: Vec<&u8>) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Initializes logging at the requested level.
fn initialize_logging(log_level: &str) -> GridResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            other => {
                return Err(GridError::InvalidArgument(format!(
                    "unknown log level '{}'",
                    other
                )))
            }
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let level: log::LevelFilter = log_level.parse().map_err(|_| {
            GridError::InvalidArgument(format!("unknown log level '{}'", log_level))
        })?;

        env_logger::Builder::new()
            .filter_level(level)
            .format_target(false)
            .init();
    }

    Ok(())
}
