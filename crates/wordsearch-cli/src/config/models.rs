use crate::cli::OutputFormat;
use std::path::PathBuf;
use wordsearch::engine::config as core_config;

/// Where the raw word lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Inline(Vec<String>),
    File(PathBuf),
    Stdin,
}

#[derive(Debug)]
pub struct AppConfig {
    pub words: WordSource,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub core_config: core_config::GenerationConfig,
}
