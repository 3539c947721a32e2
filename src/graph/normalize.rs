// src/graph/normalize.rs
//! Linear value rescaling shared by thickness, spotlight and cutoff mapping.

/// Maps `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// Returns `range_min` when the domain is degenerate.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn linear_rescale(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
) -> f64 {
    if domain_max == domain_min {
        return range_min;
    }
    (value - domain_min) / (domain_max - domain_min) * (range_max - range_min) + range_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert!((linear_rescale(5.0, 0.0, 10.0, 0.0, 100.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_domain_returns_range_min() {
        for (x, m, lo, hi) in [(3.0, 3.0, 1.5, 15.0), (-7.0, 0.0, 2.0, 1.0), (1e9, 5.0, 0.0, 0.0)] {
            assert!((linear_rescale(x, m, m, lo, hi) - lo).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_endpoints_map_to_range_endpoints() {
        assert!((linear_rescale(1.0, 1.0, 8.0, 1.5, 15.0) - 1.5).abs() < 1e-9);
        assert!((linear_rescale(8.0, 1.0, 8.0, 1.5, 15.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_extrapolates_outside_domain() {
        assert!((linear_rescale(20.0, 0.0, 10.0, 0.0, 1.0) - 2.0).abs() < 1e-9);
    }
}
