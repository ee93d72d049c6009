use serde::{Deserialize, Serialize};

/// Maps `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// A zero-width domain maps every value to `range_min`, so flat data renders
/// as a flat line instead of propagating NaN into pixel coordinates.
#[must_use]
pub fn scale(value: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    let span = domain_max - domain_min;
    if span == 0.0 {
        return range_min;
    }
    range_min + (value - domain_min) / span * (range_max - range_min)
}

/// Linear domain-to-pixel mapping.
///
/// The range may be inverted (`range_min > range_max`), which is how the
/// vertical axis maps larger values closer to the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Zero-based scale whose upper domain bound is the largest value
    /// clamped at zero, or `1.0` when `values` is empty.
    #[must_use]
    pub fn zero_based(values: &[f64], range: (f64, f64)) -> Self {
        Self::new((0.0, crate::core::types::zero_based_max(values)), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max == self.domain_min
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        scale(
            value,
            self.domain_min,
            self.domain_max,
            self.range_min,
            self.range_max,
        )
    }

    /// Maps a pixel back into the domain.
    ///
    /// Returns `None` when either the domain or the range has zero width.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<f64> {
        if self.is_degenerate() || self.range_max == self.range_min {
            return None;
        }
        Some(scale(
            pixel,
            self.range_min,
            self.range_max,
            self.domain_min,
            self.domain_max,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, scale};

    #[test]
    fn degenerate_domain_maps_to_range_min() {
        assert_eq!(scale(42.0, 42.0, 42.0, 300.0, 0.0), 300.0);
        assert_eq!(scale(0.0, 0.0, 0.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn invert_is_none_for_zero_width_range() {
        let scale = LinearScale::new((0.0, 10.0), (5.0, 5.0));
        assert!(scale.invert(5.0).is_none());
    }
}
