use crate::core::models::word::{Word, WordList};
use std::fmt;
use thiserror::Error;

/// Default character that marks a line as a mandatory word.
pub const DEFAULT_MANDATORY_MARKER: char = '*';

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("No valid words found after normalization ({dropped} line(s) dropped)")]
    Empty { dropped: usize },
}

/// A line that was dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// The line contained no letters once the marker and non-alphabetic characters were removed.
    NoLetters { line: usize, raw: String },
    /// The line normalized to a word that was already present.
    Duplicate {
        line: usize,
        text: String,
        first_line: usize,
    },
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeWarning::NoLetters { line, raw } => {
                write!(f, "line {}: '{}' contains no letters and was skipped", line, raw)
            }
            NormalizeWarning::Duplicate {
                line,
                text,
                first_line,
            } => write!(
                f,
                "line {}: duplicate of '{}' (first seen on line {}) was merged",
                line, text, first_line
            ),
        }
    }
}

/// The outcome of normalizing a raw word list.
#[derive(Debug, Clone)]
pub struct NormalizedWords {
    pub words: WordList,
    pub warnings: Vec<NormalizeWarning>,
}

/// Normalizes a single raw entry.
///
/// Surrounding whitespace is trimmed, a leading `marker` flags the word as mandatory, and
/// only alphabetic characters are kept, upper-cased. Returns `None` for blank lines and
/// `Some(None)` for non-blank lines that contain no letters.
fn normalize_entry(raw: &str, marker: char) -> Option<Option<Word>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (mandatory, body) = match trimmed.strip_prefix(marker) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let text: String = body
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();
    if text.is_empty() {
        Some(None)
    } else {
        Some(Some(Word::new(text, mandatory)))
    }
}

/// Parses raw lines into a normalized word list.
///
/// # Arguments
///
/// * `lines` - The raw entries, one word per entry, in input order.
/// * `marker` - The character that flags an entry as mandatory.
///
/// # Return
///
/// Returns the deduplicated words in order of first appearance, together with a warning for
/// every entry that was dropped or merged. Line numbers in warnings are 1-based.
///
/// # Errors
///
/// Returns [`NormalizeError::Empty`] if no word survives normalization.
pub fn parse_lines<I, S>(lines: I, marker: char) -> Result<NormalizedWords, NormalizeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordList::new();
    let mut first_lines: Vec<usize> = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line = idx + 1;
        let raw = raw.as_ref();
        let Some(entry) = normalize_entry(raw, marker) else {
            continue;
        };
        let Some(word) = entry else {
            warnings.push(NormalizeWarning::NoLetters {
                line,
                raw: raw.trim().to_string(),
            });
            continue;
        };
        let text = word.text().to_string();
        match words.insert(word) {
            Ok(_) => first_lines.push(line),
            Err(existing) => warnings.push(NormalizeWarning::Duplicate {
                line,
                text,
                first_line: first_lines[existing],
            }),
        }
    }

    if words.is_empty() {
        return Err(NormalizeError::Empty {
            dropped: warnings.len(),
        });
    }
    Ok(NormalizedWords { words, warnings })
}
