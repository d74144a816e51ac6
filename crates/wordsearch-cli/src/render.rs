use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use std::fmt::{self, Write};
use wordsearch::core::models::puzzle::PuzzleResult;

pub fn render(result: &PuzzleResult, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => {
            let mut out = String::new();
            write_text(&mut out, result).map_err(|e| CliError::Other(e.into()))?;
            out
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn write_text(out: &mut impl Write, result: &PuzzleResult) -> fmt::Result {
    for row in &result.grid {
        let spaced: Vec<String> = row.chars().map(String::from).collect();
        writeln!(out, "{}", spaced.join(" "))?;
    }

    writeln!(
        out,
        "\nGrid: {}x{}  Seed: {}  Overlap score: {}{}",
        result.rows,
        result.cols,
        result.seed,
        result.overlap_score,
        if result.timed_out { "  (time budget exhausted)" } else { "" }
    )?;

    writeln!(out, "\nPlaced ({}):", result.placements.len())?;
    for placement in &result.placements {
        let direction = placement
            .direction()
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("({}, {})", placement.dr, placement.dc));
        writeln!(
            out,
            "  {:<16} row {:>2}, col {:>2}, {}",
            placement.word, placement.row, placement.col, direction
        )?;
    }

    if !result.unplaced_words.is_empty() {
        writeln!(out, "\nUnplaced ({}):", result.unplaced_words.len())?;
        for word in &result.unplaced_words {
            writeln!(out, "  {}", word)?;
        }
    }
    Ok(())
}
