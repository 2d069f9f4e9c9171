/// Min-max rescale `values` to [0,1], in place: the minimum maps to 0.0
/// and the maximum to 1.0. A constant column collapses to all zeros
/// rather than dividing by zero, losing the original value. Empty input
/// is a no-op.
pub fn normalize(values: &mut [f64]) {
    let Some(&first) = values.first() else {
        return;
    };
    let mut min = first;
    let mut max = first;
    for &v in values.iter() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if max == min {
        for v in values.iter_mut() {
            *v = 0.0;
        }
    } else {
        let span = max - min;
        for v in values.iter_mut() {
            *v = (*v - min) / span;
        }
    }
}
