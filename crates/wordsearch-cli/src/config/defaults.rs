use wordsearch::core::io::word_list::DEFAULT_MANDATORY_MARKER;
use wordsearch::engine::config as core_config;

pub struct DefaultsConfig {
    pub mandatory_marker: char,
    pub time_ms: u64,
    pub min_side: usize,
    pub max_side: usize,
    pub growth_step: usize,
    pub packing_factor: f64,
    pub backtrack_depth: usize,
    pub backtrack_attempts: usize,
    pub prefer_overlap: bool,
    pub strict: bool,
    pub alphabet: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mandatory_marker: DEFAULT_MANDATORY_MARKER,
            time_ms: 2000,
            min_side: core_config::DEFAULT_MIN_SIDE,
            max_side: core_config::DEFAULT_MAX_SIDE,
            growth_step: core_config::DEFAULT_GROWTH_STEP,
            packing_factor: core_config::DEFAULT_PACKING_FACTOR,
            backtrack_depth: core_config::DEFAULT_BACKTRACK_DEPTH,
            backtrack_attempts: core_config::DEFAULT_BACKTRACK_ATTEMPTS,
            prefer_overlap: false,
            strict: false,
            alphabet: core_config::DEFAULT_ALPHABET.to_string(),
        }
    }
}
