use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, WordSource};
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use std::str::FromStr;
use std::time::Duration;
use wordsearch::engine::config as core_config;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let grid_file = file_config.grid.take().unwrap_or_default();
    let search_file = file_config.search.take().unwrap_or_default();
    let fill_file = file_config.fill.take().unwrap_or_default();

    let (rows, cols) = match (args.size, args.rows, args.cols) {
        (Some((rows, cols)), _, _) => (Some(rows), Some(cols)),
        (None, Some(rows), Some(cols)) => (Some(rows), Some(cols)),
        _ => (grid_file.rows, grid_file.cols),
    };
    let ceiling = match (rows, cols) {
        (None, None) => None,
        (Some(rows), Some(cols)) => core_config::GridCeiling::new(rows, cols),
        _ => {
            return Err(CliError::Config(
                "`grid.rows` and `grid.cols` must be given together".to_string(),
            ));
        }
    };

    let time_ms = args
        .time_ms
        .or(search_file.time_ms)
        .unwrap_or(defaults.time_ms);
    let seed = args.seed.or(search_file.seed);
    let strict = args.strict || search_file.strict.unwrap_or(defaults.strict);
    let prefer_overlap =
        args.prefer_overlap || search_file.prefer_overlap.unwrap_or(defaults.prefer_overlap);
    let alphabet = fill_file.alphabet.unwrap_or(defaults.alphabet);

    let core_config = core_config::GenerationConfigBuilder::new()
        .mandatory_marker(
            file_config
                .mandatory_marker
                .unwrap_or(defaults.mandatory_marker),
        )
        .ceiling(ceiling)
        .min_side(grid_file.min_side.unwrap_or(defaults.min_side))
        .max_side(grid_file.max_side.unwrap_or(defaults.max_side))
        .growth_step(grid_file.growth_step.unwrap_or(defaults.growth_step))
        .packing_factor(grid_file.packing_factor.unwrap_or(defaults.packing_factor))
        .time_budget(Duration::from_millis(time_ms))
        .seed(seed)
        .backtrack_depth(
            search_file
                .backtrack_depth
                .unwrap_or(defaults.backtrack_depth),
        )
        .backtrack_attempts(
            search_file
                .backtrack_attempts
                .unwrap_or(defaults.backtrack_attempts),
        )
        .prefer_overlap(prefer_overlap)
        .strict(strict)
        .alphabet(alphabet.chars())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let words = if !args.words.is_empty() {
        WordSource::Inline(args.words.clone())
    } else if let Some(path) = &args.input {
        WordSource::File(path.clone())
    } else {
        WordSource::Stdin
    };

    Ok(AppConfig {
        words,
        output: args.output.clone(),
        format: args.format,
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "mandatory-marker" => {
                config.mandatory_marker = Some(parse_value(key, value, "character")?);
            }
            "grid.rows" => {
                config.grid.get_or_insert_with(Default::default).rows =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.cols" => {
                config.grid.get_or_insert_with(Default::default).cols =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.min-side" => {
                config.grid.get_or_insert_with(Default::default).min_side =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.max-side" => {
                config.grid.get_or_insert_with(Default::default).max_side =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.growth-step" => {
                config.grid.get_or_insert_with(Default::default).growth_step =
                    Some(parse_value(key, value, "integer")?);
            }
            "grid.packing-factor" => {
                config.grid.get_or_insert_with(Default::default).packing_factor =
                    Some(parse_value(key, value, "float")?);
            }
            "search.time-ms" => {
                config.search.get_or_insert_with(Default::default).time_ms =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.seed" => {
                config.search.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.backtrack-depth" => {
                config.search.get_or_insert_with(Default::default).backtrack_depth =
                    Some(parse_value(key, value, "integer")?);
            }
            "search.backtrack-attempts" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .backtrack_attempts = Some(parse_value(key, value, "integer")?);
            }
            "search.prefer-overlap" => {
                config.search.get_or_insert_with(Default::default).prefer_overlap =
                    Some(parse_value(key, value, "boolean")?);
            }
            "search.strict" => {
                config.search.get_or_insert_with(Default::default).strict =
                    Some(parse_value(key, value, "boolean")?);
            }
            "fill.alphabet" => {
                config.fill.get_or_insert_with(Default::default).alphabet =
                    Some(value.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
