use punkapi::{BrewDate, IdList};

pub const MAX_TEXT_LENGTH: usize = 100;

/// Flag values rejected before any request is built.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("input exceeds maximum length of {0} bytes")]
    TooLong(usize),
    #[error("input is empty after sanitization")]
    Empty,
    #[error("invalid brew date '{0}', expected mm-yyyy (e.g. 10-2011)")]
    BrewDate(String),
    #[error("invalid beer id '{0}', expected a positive integer")]
    BeerId(String),
    #[error("unknown output format '{0}'. Valid values: table, json, csv, markdown")]
    OutputFormat(String),
}

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, ValidationError> {
    if input.len() > max_len {
        return Err(ValidationError::TooLong(max_len));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(sanitized)
}

/// Validate a free-text filter (beer name, yeast, hops, malt, food).
pub fn validate_text(input: &str) -> Result<String, ValidationError> {
    sanitize_text(input, MAX_TEXT_LENGTH)
}

/// Validate a brew date: `mm-yyyy` or `m-yyyy`, normalized to `mm-yyyy`.
pub fn validate_brew_date(input: &str) -> Result<BrewDate, ValidationError> {
    input
        .trim()
        .parse::<BrewDate>()
        .map_err(|_| ValidationError::BrewDate(input.to_string()))
}

/// Validate an id list given as `1,2,3` or `1|2|3`.
pub fn validate_ids(input: &str) -> Result<IdList, ValidationError> {
    let ids = input
        .split([',', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .ok()
                .filter(|id| *id > 0)
                .ok_or_else(|| ValidationError::BeerId(s.to_string()))
        })
        .collect::<Result<Vec<u64>, _>>()?;
    if ids.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(IdList::from(ids))
}
