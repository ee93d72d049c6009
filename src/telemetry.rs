//! Opt-in log output for hosts that do not configure `tracing` themselves.
//!
//! Layout and draw decisions (skipped series, degenerate plot areas, ignored
//! gestures) are reported through `tracing` events under the `healthchart`
//! target. Hosts with their own subscriber need nothing from this module.

/// Environment variable read for the filter directive, e.g. `healthchart=trace`.
pub const LOG_FILTER_ENV: &str = "HEALTHCHART_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "healthchart=info";

/// Installs a compact `tracing-subscriber` formatter (feature `telemetry`).
///
/// Returns `false` without the feature, or when the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
