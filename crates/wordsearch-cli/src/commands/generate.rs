use crate::cli::GenerateArgs;
use crate::config::{self, AppConfig, WordSource};
use crate::error::{CliError, Result};
use crate::render;
use crate::utils::progress::CliProgressHandler;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use wordsearch::{core::models::puzzle::PuzzleResult, engine::progress::ProgressReporter, workflows};

pub fn run(args: GenerateArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = config::build_config(&args)?;

    let lines = read_words(&app_config.words)?;
    info!("Read {} input line(s).", lines.len());

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core generation workflow...");
    let result = workflows::generate::run(&lines, &app_config.core_config, &reporter)?;
    report_summary(&result);

    write_output(&app_config, &result)
}

fn read_words(source: &WordSource) -> Result<Vec<String>> {
    match source {
        WordSource::Inline(words) => Ok(words.clone()),
        WordSource::File(path) => {
            info!("Loading word list from {:?}", path);
            let content = std::fs::read_to_string(path)?;
            Ok(content.lines().map(str::to_string).collect())
        }
        WordSource::Stdin => {
            info!("Reading word list from stdin...");
            io::stdin()
                .lock()
                .lines()
                .collect::<std::io::Result<Vec<_>>>()
                .map_err(CliError::from)
        }
    }
}

fn report_summary(result: &PuzzleResult) {
    info!(
        "Generated a {}x{} puzzle with {} placed word(s), overlap score {}, seed {}.",
        result.rows,
        result.cols,
        result.placed_words.len(),
        result.overlap_score,
        result.seed
    );
    if result.timed_out {
        warn!("The time budget ran out before the search finished; the result is best-effort.");
    }
    if !result.is_fully_placed() {
        warn!(
            "{} word(s) could not be placed: {}",
            result.unplaced_words.len(),
            result.unplaced_words.join(", ")
        );
    }
}

fn write_output(app_config: &AppConfig, result: &PuzzleResult) -> Result<()> {
    let rendered = render::render(result, app_config.format)?;
    match &app_config.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Puzzle written to {:?}", path);
            eprintln!("✓ Puzzle written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
