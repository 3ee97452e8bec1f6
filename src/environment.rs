use crate::config::EnvironmentConfig;
use chrono::{NaiveDate, Utc};
use std::env;

/// Process environment captured once per invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseEnvironment {
    /// Tag the release was triggered from (release mode only)
    pub release_tag: Option<String>,
    /// npm one-time password for two-factor publishing
    pub otp: Option<String>,
    /// Date stamped into nightly versions
    pub today: NaiveDate,
}

impl ReleaseEnvironment {
    /// Read the configured variables from the process environment.
    ///
    /// Empty values are treated as unset. The date is taken in UTC.
    pub fn from_env(config: &EnvironmentConfig) -> Self {
        ReleaseEnvironment {
            release_tag: read_var(&config.release_tag_var),
            otp: read_var(&config.otp_var),
            today: Utc::now().date_naive(),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
