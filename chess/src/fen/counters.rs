use super::FenError;

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Halfmove clock: ASCII digits only, accepted up to `u32::MAX`.
///
/// The range is wider than a signed 32-bit clock; `2147483648` and above are
/// valid here and only values past `u32::MAX` are `HalfmoveOutOfRange`.
pub(super) fn parse_halfmove(field: &str) -> Result<u32, FenError> {
    if !is_digits(field) {
        return Err(FenError::HalfmoveNotNumeric {
            found: field.to_string(),
        });
    }
    field.parse().map_err(|_| FenError::HalfmoveOutOfRange {
        found: field.to_string(),
    })
}

/// Fullmove number: ASCII digits only, `1..=u32::MAX`.
pub(super) fn parse_fullmove(field: &str) -> Result<u32, FenError> {
    if !is_digits(field) {
        return Err(FenError::FullmoveNotNumeric {
            found: field.to_string(),
        });
    }
    let value: u32 = field.parse().map_err(|_| FenError::FullmoveOutOfRange {
        found: field.to_string(),
    })?;
    if value < 1 {
        return Err(FenError::FullmoveMustBePositive { found: value });
    }
    Ok(value)
}
