//! Environment configuration loading from .env files
//!
//! Loads configuration values from .env or environment variables.
//! Used for the measurement seed, log filter and collapse floor.

use std::env;
use once_cell::sync::Lazy;
use qsim_state::MeasurementConfig;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Default log filter when neither RUST_LOG nor QSIM_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "qsim=info";

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Parse an optional seed value; empty or invalid values mean "no seed"
pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    value.map(str::trim).and_then(|v| v.parse().ok())
}

/// Parse the collapse floor, accepting only finite non-negative values
pub fn parse_min_probability(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Load measurement seed from environment
/// Default: none (entropy seeding)
pub fn seed() -> Option<u64> {
    ensure_loaded();
    parse_seed(env::var("QSIM_SEED").ok().as_deref())
}

/// Load default log filter from environment
/// Default: "qsim=info"
pub fn log_filter() -> String {
    ensure_loaded();
    env::var("QSIM_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Load collapse probability floor from environment
/// Default: 1e-12
pub fn min_probability() -> f64 {
    ensure_loaded();
    parse_min_probability(env::var("QSIM_MIN_PROBABILITY").ok().as_deref())
        .unwrap_or_else(|| MeasurementConfig::default().min_probability)
}

/// Measurement configuration assembled from the environment
pub fn measurement_config() -> MeasurementConfig {
    MeasurementConfig {
        min_probability: *MIN_PROBABILITY,
        ..MeasurementConfig::default()
    }
}

/// Cached values
pub static SEED: Lazy<Option<u64>> = Lazy::new(seed);
pub static MIN_PROBABILITY: Lazy<f64> = Lazy::new(min_probability);
