//! Fixed monthly seasonal shapes, January first, normalized to [-1, 1].

/// Temperature shape: winter trough, July peak.
pub(crate) const TEMP_PATTERN: [f64; 12] = [
    -0.8, -0.7, -0.4, 0.0, 0.4, 0.8, 1.0, 0.9, 0.5, 0.1, -0.3, -0.7,
];

/// Rainfall shape: wet winters, dry summers.
pub(crate) const RAINFALL_PATTERN: [f64; 12] = [
    0.2, 0.1, 0.0, -0.2, -0.3, -0.4, -0.3, -0.2, 0.0, 0.2, 0.3, 0.3,
];

/// Sunshine shape: deep winter trough, July peak.
pub(crate) const SUNSHINE_PATTERN: [f64; 12] = [
    -0.9, -0.7, -0.3, 0.2, 0.6, 0.9, 1.0, 0.9, 0.4, -0.1, -0.6, -0.9,
];

/// Frost-day shape: high in winter, zero through summer.
pub(crate) const FROST_PATTERN: [f64; 12] = [
    0.8, 0.7, 0.4, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.4, 0.7,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_are_normalized() {
        for pattern in [TEMP_PATTERN, RAINFALL_PATTERN, SUNSHINE_PATTERN, FROST_PATTERN] {
            for v in pattern {
                assert!((-1.0..=1.0).contains(&v), "shape value out of range: {v}");
            }
        }
    }

    #[test]
    fn summer_has_no_frost() {
        // May through September (indices 4..=8)
        for v in &FROST_PATTERN[4..=8] {
            assert_eq!(*v, 0.0);
        }
    }
}
