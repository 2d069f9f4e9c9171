use crate::errors::CoerceError;

/// Convert one raw cell to a number. Surrounding whitespace is
/// tolerated. A failure is scoped to the single cell: callers skip the
/// value and report it, nothing substitutes a zero or NaN.
///
/// A finite-looking literal whose parse overflows to infinity (for
/// example `1e999`) is `OutOfRange`; spelled-out infinities and NaN are
/// rejected as `NotANumber` since they are not valid table data.
pub fn coerce(cell: &str) -> Result<f64, CoerceError> {
    let text = cell.trim();
    if text.is_empty() || is_non_finite_literal(text) {
        return Err(CoerceError::NotANumber);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_infinite() => Err(CoerceError::OutOfRange),
        Ok(value) => Ok(value),
        Err(_) => Err(CoerceError::NotANumber),
    }
}

fn is_non_finite_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
        || unsigned.eq_ignore_ascii_case("nan")
}
