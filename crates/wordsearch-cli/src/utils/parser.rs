use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid grid size '{0}'. Expected 'ROWSxCOLS' (e.g., '12x15').")]
    InvalidGridSize(String),

    #[error("Grid dimensions in '{0}' must both be greater than zero.")]
    ZeroDimension(String),

    #[error("Invalid override '{0}'. Expected 'KEY=VALUE'.")]
    InvalidKeyValue(String),

    #[error("Key cannot be empty in override '{0}'.")]
    EmptyKey(String),
}

/// Parses a grid size written as `ROWSxCOLS`, accepting `x`, `X` or `*` as separator.
pub fn parse_grid_size(s: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidGridSize(s.to_string());
    let (rows, cols) = s
        .trim()
        .split_once(['x', 'X', '*'])
        .ok_or_else(invalid)?;
    let rows: usize = rows.trim().parse().map_err(|_| invalid())?;
    let cols: usize = cols.trim().parse().map_err(|_| invalid())?;
    if rows == 0 || cols == 0 {
        return Err(ParseError::ZeroDimension(s.to_string()));
    }
    Ok((rows, cols))
}

/// Splits a `KEY=VALUE` override at the first `=`. The value may be empty.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(s.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(s.to_string()));
    }
    Ok((key, value.trim()))
}
