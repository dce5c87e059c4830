//! Runtime configuration.
//!
//! Built from defaults, adjusted by command-line flags, and validated once
//! before the terminal is taken over.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::simulated::DEFAULT_SUBMIT_DELAY;
use crate::error::ConfigError;
use crate::visibility::ObserverOptions;

/// Frame tick (~60fps).
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

/// Longest simulated delivery accepted.
pub const MAX_SUBMIT_DELAY: Duration = Duration::from_millis(60_000);

/// Configuration for one run of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// How long the simulated transport takes to "deliver" a message.
    pub submit_delay: Duration,
    /// Interval between animation / smooth-scroll ticks.
    pub tick_rate: Duration,
    /// Play entrance transitions. When false every block renders at rest.
    pub animations: bool,
    /// Default options for every observed page region.
    pub observer: ObserverOptions,
    /// Where tracing output goes. `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            tick_rate: DEFAULT_TICK_RATE,
            animations: true,
            observer: ObserverOptions::default(),
            log_file: None,
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    pub fn with_observer_options(mut self, options: ObserverOptions) -> Self {
        self.observer = options;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.observer.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        if self.tick_rate.is_zero() {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.submit_delay > MAX_SUBMIT_DELAY {
            return Err(ConfigError::SubmitDelayTooLong(
                self.submit_delay.as_millis() as u64,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.submit_delay, Duration::from_millis(2000));
        assert_eq!(config.tick_rate, Duration::from_millis(16));
        assert!(config.animations);
        assert_eq!(config.observer.threshold, 0.1);
        assert_eq!(config.observer.root_margin, 0);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FolioConfig::new()
            .with_submit_delay(Duration::from_millis(10))
            .with_animations(false)
            .with_log_file("/tmp/folio.log");
        assert_eq!(config.submit_delay, Duration::from_millis(10));
        assert!(!config.animations);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/folio.log")));
    }

    #[test]
    fn test_validate_threshold() {
        let config = FolioConfig::new()
            .with_observer_options(ObserverOptions::default().with_threshold(1.5));
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(1.5)));
    }

    #[test]
    fn test_validate_tick_and_delay() {
        let config = FolioConfig::new().with_tick_rate(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));

        let config = FolioConfig::new().with_submit_delay(Duration::from_secs(61));
        assert_eq!(config.validate(), Err(ConfigError::SubmitDelayTooLong(61_000)));
    }
}
