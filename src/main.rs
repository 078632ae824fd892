use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, error, info, trace};
use mimalloc::MiMalloc;
use owo_colors::OwoColorize;
use shadow_rs::shadow;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, LevelPadding, TermLogger,
    TerminalMode, WriteLogger,
};
use snail_grid::io::config_schema::SnailConfig;
use snail_grid::io::fill::fill_random;
use snail_grid::io::print::{print_grid, print_spiral};
use snail_grid::io::read_dimensions::read_dimensions;
use snail_grid::Grid;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

shadow!(build);

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Fills a grid with random numbers and sorts them along a clockwise spiral.
#[derive(Parser, Debug)]
#[clap(name = "snail_grid", version = build::PKG_VERSION)]
struct Cli {
    /// Number of rows. Asked for on standard input when missing.
    #[clap(short, long, allow_hyphen_values = true)]
    rows: Option<i64>,

    /// Number of columns. Asked for on standard input when missing.
    #[clap(short, long, allow_hyphen_values = true)]
    columns: Option<i64>,

    /// Path to an optional TOML config file.
    #[clap(long, default_value = "snail_grid.toml")]
    config: PathBuf,

    /// Seed for the random fill, overriding the config file.
    #[clap(long)]
    seed: Option<u64>,

    /// Only log warnings and errors.
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse_from(wild::args());

    init_log(if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Trace
    });

    debug!(
        "snail_grid {} ({}) built {}",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BUILD_TIME
    );

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();

    let mut config = SnailConfig::load(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.fill.seed = Some(seed);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (rows, columns) = match (cli.rows, cli.columns) {
        (Some(rows), Some(columns)) => (rows, columns),
        _ => read_dimensions(&mut stdin.lock(), &mut out)?,
    };

    let mut grid = Grid::new(rows, columns)
        .with_context(|| anyhow!("Unable to create a {}x{} grid", rows, columns))?;
    debug!("Created {} grid", grid.dimensions());

    fill_random(&mut grid, &config.fill)?;

    info!(":: Unsorted ::");
    writeln!(out, "{}", "Unsorted".bold())?;
    print_grid(&mut out, &grid, config.print.cell_width)?;

    info!(":: Sorting Along Spiral ::");
    grid.sort_spiral()
        .with_context(|| anyhow!("Unable to sort {} grid", grid.dimensions()))?;

    writeln!(out, "{}", "Sorted".bold())?;
    print_grid(&mut out, &grid, config.print.cell_width)?;

    if config.print.show_spiral {
        writeln!(out, "{}", "Spiral order".bold())?;
        print_spiral(&mut out, &grid)?;
    }

    info!(":: Finished ::");
    info!("Time Elapsed: {:?}", Instant::now().duration_since(start));

    Ok(())
}

fn init_log(level: LevelFilter) {
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Right)
        .build();

    let log_file_name = "snail_grid.log";
    let write_logger = File::create(log_file_name)
        .map(|file| WriteLogger::new(LevelFilter::Trace, config.clone(), file));

    let term_logger = TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto);

    match write_logger {
        Ok(write_logger) => {
            CombinedLogger::init(vec![term_logger, write_logger]).expect("safe");
            trace!("Log contents will be saved to {}", log_file_name);
        }
        Err(e) => {
            CombinedLogger::init(vec![term_logger]).expect("safe");
            error!(
                "Failed to create log file at {} due to: {}",
                log_file_name, e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_seed() {
        let cli = Cli::parse_from(["snail_grid", "--rows", "3", "-c", "4", "--seed", "9"]);
        assert_eq!(cli.rows, Some(3));
        assert_eq!(cli.columns, Some(4));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config, PathBuf::from("snail_grid.toml"));
        assert!(!cli.quiet);
    }

    #[test]
    fn negative_dimensions_reach_validation() {
        let cli = Cli::parse_from(["snail_grid", "--rows", "-3", "--columns", "2"]);
        assert_eq!(cli.rows, Some(-3));
        assert!(Grid::<i32>::new(cli.rows.unwrap(), cli.columns.unwrap()).is_err());
    }
}
