//! Service configuration

use crate::mailer::error::ConfigError;
use crate::mailer::sink::{LogSink, StdoutSink};

use std::fmt;
use std::sync::Arc;

/// Failure rates and log destination for an `EmailService`
#[derive(Clone)]
pub struct ServiceConfig {
    /// Probability in `[0, 1]` that a valid email bounces
    pub bounce_rate: f64,

    /// Probability in `[0, 1]` that a valid, unbounced email is blocked
    pub block_rate: f64,

    /// Where human-readable log lines go
    pub sink: Arc<dyn LogSink>,
}

/// Preset rates used by the library's default service
pub struct DefaultRates;

impl DefaultRates {
    pub const BOUNCE: f64 = 0.25;
    pub const BLOCK: f64 = 0.1;

    /// Rates used by the command-line tool
    pub const CLI_BOUNCE: f64 = 0.2;
    pub const CLI_BLOCK: f64 = 0.05;
}

impl ServiceConfig {
    /// Create a configuration that logs to standard output
    pub fn new(bounce_rate: f64, block_rate: f64) -> Self {
        Self {
            bounce_rate,
            block_rate,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Replace the log sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The preset the command-line tool starts from
    pub fn cli_preset() -> Self {
        Self::new(DefaultRates::CLI_BOUNCE, DefaultRates::CLI_BLOCK)
    }

    /// Check that both rates lie in `[0, 1]`, bounce rate first
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_rate(self.bounce_rate) {
            return Err(ConfigError::InvalidBounceRate(self.bounce_rate));
        }
        if !is_valid_rate(self.block_rate) {
            return Err(ConfigError::InvalidBlockRate(self.block_rate));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DefaultRates::BOUNCE, DefaultRates::BLOCK)
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("bounce_rate", &self.bounce_rate)
            .field("block_rate", &self.block_rate)
            .finish_non_exhaustive()
    }
}

// NaN fails the range check
fn is_valid_rate(rate: f64) -> bool {
    (0.0..=1.0).contains(&rate)
}
