use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::scale;

pub const DEFAULT_TICK_COUNT: usize = 5;

/// One axis tick: its domain value and the pixel it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

impl AxisTick {
    #[must_use]
    pub fn label(self) -> String {
        format_tick_label(self.value)
    }
}

pub type AxisTicks = SmallVec<[AxisTick; 8]>;

/// Produces `tick_count + 1` evenly spaced ticks from `domain_min` to
/// `domain_max`, each paired with its pixel position on `[range_min, range_max]`.
///
/// `tick_count == 0` yields a single tick at `domain_min`.
#[must_use]
pub fn generate_ticks(
    domain_min: f64,
    domain_max: f64,
    tick_count: usize,
    range_min: f64,
    range_max: f64,
) -> AxisTicks {
    if tick_count == 0 {
        let mut ticks = AxisTicks::new();
        ticks.push(AxisTick {
            value: domain_min,
            pixel: scale(domain_min, domain_min, domain_max, range_min, range_max),
        });
        return ticks;
    }

    let step = (domain_max - domain_min) / tick_count as f64;
    (0..=tick_count)
        .map(|i| {
            let value = domain_min + i as f64 * step;
            AxisTick {
                value,
                pixel: scale(value, domain_min, domain_max, range_min, range_max),
            }
        })
        .collect()
}

/// Formats an axis value with zero decimal places.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let formatted = format!("{value:.0}");
    // "-0" shows up for tiny negative steps.
    if formatted == "-0" {
        return "0".to_owned();
    }
    formatted
}

/// Formats a data value the way point labels show it: truncated toward zero.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}
