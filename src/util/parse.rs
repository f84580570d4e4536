use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// Discord snowflakes are stored as TEXT; this converts them back at the model boundary.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored id, keeping `None` as `None`.
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}
