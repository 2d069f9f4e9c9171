/// Cap `rows` to the first `cap` entries, keeping original order. A cap
/// of zero or below means unlimited. Callers apply this after the
/// header row is stripped, so the cap bounds data rows only.
pub fn limit<T>(mut rows: Vec<T>, cap: i64) -> Vec<T> {
    if cap > 0 && rows.len() as i64 > cap {
        rows.truncate(cap as usize);
    }
    rows
}
