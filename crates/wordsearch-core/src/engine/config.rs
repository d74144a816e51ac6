use crate::core::io::word_list::DEFAULT_MANDATORY_MARKER;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MIN_SIDE: usize = 10;
pub const DEFAULT_MAX_SIDE: usize = 50;
pub const DEFAULT_GROWTH_STEP: usize = 1;
pub const DEFAULT_PACKING_FACTOR: f64 = 2.0;
pub const DEFAULT_BACKTRACK_DEPTH: usize = 3;
pub const DEFAULT_BACKTRACK_ATTEMPTS: usize = 6;
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Upper bound on the cell count of any grid, explicit or derived.
pub const MAX_GRID_CELLS: usize = 1 << 20;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// An explicit grid size that generation must never exceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCeiling {
    pub rows: usize,
    pub cols: usize,
}

impl GridCeiling {
    /// Returns a ceiling only when both dimensions are positive.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        (rows > 0 && cols > 0).then_some(Self { rows, cols })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizingConfig {
    pub ceiling: Option<GridCeiling>,
    pub min_side: usize,
    pub max_side: usize,
    pub growth_step: usize,
    pub packing_factor: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub time_budget: Duration,
    pub seed: Option<u64>,
    pub backtrack_depth: usize,
    pub backtrack_attempts: usize,
    pub prefer_overlap: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillConfig {
    pub alphabet: Vec<char>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub mandatory_marker: char,
    pub sizing: SizingConfig,
    pub search: SearchConfig,
    pub fill: FillConfig,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    mandatory_marker: Option<char>,
    ceiling: Option<GridCeiling>,
    min_side: Option<usize>,
    max_side: Option<usize>,
    growth_step: Option<usize>,
    packing_factor: Option<f64>,
    time_budget: Option<Duration>,
    seed: Option<u64>,
    backtrack_depth: Option<usize>,
    backtrack_attempts: Option<usize>,
    prefer_overlap: Option<bool>,
    strict: Option<bool>,
    alphabet: Option<Vec<char>>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mandatory_marker(mut self, marker: char) -> Self {
        self.mandatory_marker = Some(marker);
        self
    }
    pub fn ceiling(mut self, ceiling: Option<GridCeiling>) -> Self {
        self.ceiling = ceiling;
        self
    }
    pub fn min_side(mut self, side: usize) -> Self {
        self.min_side = Some(side);
        self
    }
    pub fn max_side(mut self, side: usize) -> Self {
        self.max_side = Some(side);
        self
    }
    pub fn growth_step(mut self, step: usize) -> Self {
        self.growth_step = Some(step);
        self
    }
    pub fn packing_factor(mut self, factor: f64) -> Self {
        self.packing_factor = Some(factor);
        self
    }
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn backtrack_depth(mut self, depth: usize) -> Self {
        self.backtrack_depth = Some(depth);
        self
    }
    pub fn backtrack_attempts(mut self, attempts: usize) -> Self {
        self.backtrack_attempts = Some(attempts);
        self
    }
    pub fn prefer_overlap(mut self, enabled: bool) -> Self {
        self.prefer_overlap = Some(enabled);
        self
    }
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = Some(enabled);
        self
    }
    pub fn alphabet(mut self, alphabet: impl IntoIterator<Item = char>) -> Self {
        self.alphabet = Some(alphabet.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let sizing = SizingConfig {
            ceiling: self.ceiling,
            min_side: self.min_side.unwrap_or(DEFAULT_MIN_SIDE),
            max_side: self.max_side.unwrap_or(DEFAULT_MAX_SIDE),
            growth_step: self.growth_step.unwrap_or(DEFAULT_GROWTH_STEP),
            packing_factor: self.packing_factor.unwrap_or(DEFAULT_PACKING_FACTOR),
        };
        if sizing.min_side == 0 {
            return Err(invalid("min_side", "must be at least 1"));
        }
        if sizing.max_side < sizing.min_side {
            return Err(invalid(
                "max_side",
                format!(
                    "{} is smaller than min_side ({})",
                    sizing.max_side, sizing.min_side
                ),
            ));
        }
        if sizing.growth_step == 0 {
            return Err(invalid("growth_step", "must be at least 1"));
        }
        if !sizing.packing_factor.is_finite() || sizing.packing_factor <= 0.0 {
            return Err(invalid(
                "packing_factor",
                format!("{} is not a positive number", sizing.packing_factor),
            ));
        }
        if let Some(ceiling) = sizing.ceiling {
            check_cell_count("ceiling", ceiling.rows, ceiling.cols)?;
        }
        check_cell_count("max_side", sizing.max_side, sizing.max_side)?;

        let search = SearchConfig {
            time_budget: self
                .time_budget
                .ok_or(ConfigError::MissingParameter("time_budget"))?,
            seed: self.seed,
            backtrack_depth: self.backtrack_depth.unwrap_or(DEFAULT_BACKTRACK_DEPTH),
            backtrack_attempts: self
                .backtrack_attempts
                .unwrap_or(DEFAULT_BACKTRACK_ATTEMPTS),
            prefer_overlap: self.prefer_overlap.unwrap_or(false),
            strict: self.strict.unwrap_or(false),
        };

        let alphabet = self
            .alphabet
            .unwrap_or_else(|| DEFAULT_ALPHABET.chars().collect());
        if alphabet.is_empty() {
            return Err(invalid("alphabet", "must contain at least one letter"));
        }
        if let Some(bad) = alphabet.iter().find(|c| !c.is_alphabetic()) {
            return Err(invalid("alphabet", format!("'{}' is not a letter", bad)));
        }

        let mandatory_marker = self.mandatory_marker.unwrap_or(DEFAULT_MANDATORY_MARKER);
        if mandatory_marker.is_alphabetic() || mandatory_marker.is_whitespace() {
            return Err(invalid(
                "mandatory_marker",
                format!("'{}' would be indistinguishable from a word", mandatory_marker),
            ));
        }

        Ok(GenerationConfig {
            mandatory_marker,
            sizing,
            search,
            fill: FillConfig { alphabet },
        })
    }
}

fn check_cell_count(parameter: &'static str, rows: usize, cols: usize) -> Result<(), ConfigError> {
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(invalid(
            parameter,
            format!("a {}x{} grid exceeds {} cells", rows, cols, MAX_GRID_CELLS),
        )),
    }
}

fn invalid(parameter: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        parameter,
        reason: reason.into(),
    }
}
