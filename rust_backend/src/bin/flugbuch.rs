use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use flugbuch_rust::algorithms::{compute_page_summaries, merge_assignments_with_stats, overfull_pages};
use flugbuch_rust::config::LogbookConfig;
use flugbuch_rust::core::count_incomplete;
use flugbuch_rust::io::LogbookLoader;
use flugbuch_rust::report::render_page_summaries;

const USAGE: &str = "Usage: flugbuch <import.json> [previous.json] [--config flugbuch.toml]";

#[derive(Debug)]
struct Args {
    import_path: PathBuf,
    previous_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut positional = Vec::new();
    let mut config_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a file argument")?;
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let import_path = positional.next().context(USAGE)?;
    let previous_path = positional.next();
    if positional.next().is_some() {
        bail!("Too many arguments\n{}", USAGE);
    }

    Ok(Command::Run(Args {
        import_path,
        previous_path,
        config_path,
    }))
}

fn load_config(path: Option<&Path>) -> Result<LogbookConfig> {
    let config = match path {
        Some(path) => LogbookConfig::from_file(path)?,
        None => LogbookConfig::from_default_location()?,
    };
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config_path.as_deref())?;

    let import = LogbookLoader::load_import(&args.import_path, &config.import)?;
    println!("Import file: {}", args.import_path.display());
    println!("Checksum:    {}", import.checksum);
    println!("Flights:     {}", import.num_flights);

    let flights = match &args.previous_path {
        Some(previous_path) => {
            let previous = LogbookLoader::load_snapshot(previous_path)?;
            let (merged, stats) = merge_assignments_with_stats(&previous, import.flights);
            println!(
                "Assignments: {} carried over, {} new flights",
                stats.matched, stats.unmatched
            );
            merged
        }
        None => import.flights,
    };

    let incomplete = count_incomplete(&flights);
    if incomplete > 0 {
        println!("Incomplete:  {} flights without role, time of day or page", incomplete);
    }

    for (page, count) in overfull_pages(&flights, config.logbook.flights_per_page) {
        log::warn!(
            "Page {} holds {} flights (limit {})",
            page,
            count,
            config.logbook.flights_per_page
        );
    }

    println!();
    print!("{}", render_page_summaries(&compute_page_summaries(&flights)));
    Ok(())
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args)? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("✗ Flugbuch failed: {:#}", e);
            Err(e)
        }
    }
}
