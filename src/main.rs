//! Headless shelf-match runner (default binary).
//!
//! Loads the tunables, installs logging and auto-plays one or more levels,
//! restarting at the next level whenever one is completed.

use anyhow::Result;
use tracing::info;

use shelf_match::cli::{parse_run_args, USAGE};
use shelf_match::core::GameConfig;
use shelf_match::logger::init_cli_logger;
use shelf_match::runner::run;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = parse_run_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    init_cli_logger(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(?config, level = args.level, levels = args.levels, "starting");

    let summaries = run(config, &args)?;
    let completed = summaries.iter().filter(|s| s.completed).count();
    let total: u32 = summaries.iter().map(|s| s.score).sum();
    info!(played = summaries.len(), completed, total_score = total, "done");
    Ok(())
}
