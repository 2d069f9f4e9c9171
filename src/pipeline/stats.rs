/// Mean and population standard deviation of `values`, computed with
/// the sum-of-squares identity `sqrt(sum(v^2)/n - mean^2)`. The formula
/// is kept bit-compatible with the historical implementation: for
/// near-constant large-magnitude data the subtraction can cancel to a
/// small negative and the square root then yields NaN. Empty input is
/// defined as `(0.0, 0.0)`.
pub fn summarize(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sq_sum = values.iter().map(|v| v * v).sum::<f64>();
    let stddev = (sq_sum / n - mean * mean).sqrt();
    (mean, stddev)
}
