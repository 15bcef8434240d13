//! Numeric tolerance helpers shared by the solver and path lookup.

/// Magnitude below which a scalar is treated as zero.
pub const EPSILON: f64 = 1e-6;

/// Check if a value is zero within [`EPSILON`].
#[inline]
pub fn nearly_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Check if two values are equal within [`EPSILON`].
#[inline]
pub fn nearly_equal(a: f64, b: f64) -> bool {
    nearly_zero(a - b)
}

/// Index of the largest value, first one wins on ties. Returns 0 for an empty slice.
pub fn index_of_max(values: &[f64]) -> usize {
    let mut index_max = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[index_max] {
            index_max = i;
        }
    }
    index_max
}
