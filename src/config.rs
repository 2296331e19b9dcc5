#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::OnceLock, time::Duration};

use crate::constants::{
    CHECK_TIMEOUT_ENV, DEFAULT_CHECK_TIMEOUT_MS, DEFAULT_PENALTY, DEFAULT_PENALTY_ENV,
};

/// Process-wide grading configuration.
static GRADING: OnceLock<GradingConfig> = OnceLock::new();

/// Parses a timeout in milliseconds, where `0` means "no bound".
fn parse_timeout(val: Option<String>) -> Option<Duration> {
    let millis = val
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CHECK_TIMEOUT_MS);
    (millis > 0).then(|| Duration::from_millis(millis))
}

/// Parses a per-failure deduction, falling back to the default for missing or
/// negative values.
fn parse_penalty(val: Option<String>) -> f64 {
    val.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(DEFAULT_PENALTY)
}

/// Tunables shared by every question in a grading run.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingConfig {
    /// Upper bound on a single predicate call; `None` runs checks inline.
    check_timeout:   Option<Duration>,
    /// Points removed for each failed test case.
    default_penalty: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            check_timeout:   Some(Duration::from_millis(DEFAULT_CHECK_TIMEOUT_MS)),
            default_penalty: DEFAULT_PENALTY,
        }
    }
}

impl GradingConfig {
    /// Creates a config with explicit values.
    pub fn new(check_timeout: Option<Duration>, default_penalty: f64) -> Self {
        Self {
            check_timeout,
            default_penalty,
        }
    }

    /// Builds a config from `PATGRADE_*` environment variables, using defaults
    /// for anything unset or malformed.
    pub fn from_env() -> Self {
        let config = Self {
            check_timeout:   parse_timeout(std::env::var(CHECK_TIMEOUT_ENV).ok()),
            default_penalty: parse_penalty(std::env::var(DEFAULT_PENALTY_ENV).ok()),
        };
        tracing::debug!(?config, "loaded grading config");
        config
    }

    /// Returns the per-check timeout, if any.
    pub fn check_timeout(&self) -> Option<Duration> {
        self.check_timeout
    }

    /// Returns the default deduction per failed case.
    pub fn default_penalty(&self) -> f64 {
        self.default_penalty
    }
}

/// Returns the lazily initialised process-wide config.
pub fn grading() -> &'static GradingConfig {
    GRADING.get_or_init(GradingConfig::from_env)
}
