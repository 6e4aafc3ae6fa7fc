use crate::{KubehostsError, Result};
use std::time::Duration;

pub const DEFAULT_MIN_COUNT: usize = 2;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    pub namespace: String,
    pub service: String,
    /// Stop waiting once this many addresses are registered.
    pub min_count: usize,
    /// Zero means a single read with no retry.
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollConfig {
    pub fn new(namespace: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            service: service.into(),
            min_count: DEFAULT_MIN_COUNT,
            timeout: Duration::ZERO,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn waits(&self) -> bool {
        !self.timeout.is_zero()
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(KubehostsError::ConfigError(
                "namespace must not be empty".to_string(),
            ));
        }
        if self.service.is_empty() {
            return Err(KubehostsError::ConfigError(
                "service must not be empty".to_string(),
            ));
        }
        if self.waits() && self.interval.is_zero() {
            return Err(KubehostsError::ConfigError(
                "poll interval must be greater than zero".to_string(),
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
        let config = PollConfig::new("default", "web");

        assert_eq!(config.min_count, 2);
        assert_eq!(config.interval, Duration::from_secs(10));
        assert!(!config.waits());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let err = PollConfig::new("", "web").validate().unwrap_err();
        assert!(err.to_string().contains("namespace"));

        let err = PollConfig::new("default", "").validate().unwrap_err();
        assert!(err.to_string().contains("service"));
    }

    #[test]
    fn test_validate_rejects_zero_interval_when_waiting() {
        let config = PollConfig::new("default", "web")
            .with_timeout(Duration::from_secs(60))
            .with_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(KubehostsError::ConfigError(_))
        ));

        let once = PollConfig::new("default", "web").with_interval(Duration::ZERO);
        assert!(once.validate().is_ok());
    }
}
