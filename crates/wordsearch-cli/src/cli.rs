use crate::utils::parser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Word Search Generator Contributors",
    version,
    about = "wordsearch - Generate word search puzzles with mandatory and optional words under a time budget.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and the progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a puzzle from a list of words.
    Generate(GenerateArgs),
    /// Check a generated puzzle (JSON) for consistency.
    Verify(VerifyArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON result.
    #[default]
    Json,
    /// Human-readable grid followed by the word lists.
    Text,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    // --- Input / Output ---
    /// Words to place. Prefix a word with the mandatory marker (default '*') to require it.
    /// When omitted, words are read from --input or from stdin, one per line.
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Read words from this file, one per line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "words")]
    pub input: Option<PathBuf>,

    /// Write the puzzle to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    // --- Grid Overrides ---
    /// Fixed number of rows. Requires --cols; the grid never grows beyond it.
    #[arg(long, value_name = "N", requires = "cols", conflicts_with = "size")]
    pub rows: Option<usize>,

    /// Fixed number of columns. Requires --rows.
    #[arg(long, value_name = "N", requires = "rows", conflicts_with = "size")]
    pub cols: Option<usize>,

    /// Fixed grid size written as ROWSxCOLS (e.g., 12x15).
    #[arg(long, value_name = "RxC", value_parser = parser::parse_grid_size)]
    pub size: Option<(usize, usize)>,

    // --- Search Overrides ---
    /// Time budget for the whole search, in milliseconds.
    #[arg(short = 't', long, value_name = "MS")]
    pub time_ms: Option<u64>,

    /// Seed for the random generator, for reproducible puzzles.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Fail instead of reporting a mandatory word that can never fit.
    #[arg(long)]
    pub strict: bool,

    /// Prefer placements that share letters with words already on the grid.
    #[arg(long)]
    pub prefer_overlap: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.backtrack-depth=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to a puzzle in JSON format, as written by `generate`.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn generate_accepts_positional_words_and_overrides() {
        let cli = parse(&[
            "wordsearch", "-vv", "generate", "*HELLO", "world", "--size", "8x9", "-t", "500",
            "--seed", "7", "--strict", "-S", "search.backtrack-depth=4",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.words, vec!["*HELLO", "world"]);
        assert_eq!(args.size, Some((8, 9)));
        assert_eq!(args.time_ms, Some(500));
        assert_eq!(args.seed, Some(7));
        assert!(args.strict);
        assert!(!args.prefer_overlap);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.set_values, vec!["search.backtrack-depth=4"]);
    }

    #[test]
    fn rows_and_cols_must_come_together() {
        assert!(Cli::try_parse_from(["wordsearch", "generate", "--rows", "5"]).is_err());
        let cli = parse(&["wordsearch", "generate", "--rows", "5", "--cols", "6", "-f", "text"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!((args.rows, args.cols), (Some(5), Some(6)));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn size_conflicts_with_rows_and_cols() {
        assert!(
            Cli::try_parse_from([
                "wordsearch", "generate", "--rows", "5", "--cols", "6", "--size", "5x6"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["wordsearch", "generate", "--size", "0x6"]).is_err());
    }

    #[test]
    fn input_file_conflicts_with_positional_words() {
        assert!(Cli::try_parse_from(["wordsearch", "generate", "CAT", "-i", "words.txt"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["wordsearch", "-q", "-v", "verify", "p.json"]).is_err());
        let cli = parse(&["wordsearch", "--log-file", "run.log", "verify", "p.json"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(matches!(cli.command, Commands::Verify(VerifyArgs { ref input }) if input == &PathBuf::from("p.json")));
    }
}
