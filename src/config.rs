use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "publishnpm.toml";

/// Represents the complete configuration for publish-npm.
///
/// Every section falls back to the values used by the react-native release
/// pipeline, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

fn default_package_name() -> String {
    "react-native".to_string()
}

fn default_package_directory() -> PathBuf {
    PathBuf::from("packages/react-native")
}

/// The npm package being published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    /// Name used for `npm view`
    #[serde(default = "default_package_name")]
    pub name: String,

    /// Directory `npm publish` runs in
    #[serde(default = "default_package_directory")]
    pub directory: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            name: default_package_name(),
            directory: default_package_directory(),
        }
    }
}

fn default_set_version_script() -> String {
    "scripts/set-rn-version.js".to_string()
}

fn default_dry_run_version() -> String {
    "1000.0.0".to_string()
}

fn default_commit_hash_length() -> usize {
    9
}

/// How version strings are produced and applied.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_set_version_script")]
    pub set_version_script: String,

    #[serde(default = "default_dry_run_version")]
    pub dry_run_version: String,

    #[serde(default = "default_commit_hash_length")]
    pub commit_hash_length: usize,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            set_version_script: default_set_version_script(),
            dry_run_version: default_dry_run_version(),
            commit_hash_length: default_commit_hash_length(),
        }
    }
}

fn default_release_tag_var() -> String {
    "CIRCLE_TAG".to_string()
}

fn default_otp_var() -> String {
    "NPM_CONFIG_OTP".to_string()
}

/// Names of the environment variables read at startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvironmentConfig {
    #[serde(default = "default_release_tag_var")]
    pub release_tag_var: String,

    #[serde(default = "default_otp_var")]
    pub otp_var: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            release_tag_var: default_release_tag_var(),
            otp_var: default_otp_var(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_gradle_command() -> String {
    "./gradlew".to_string()
}

/// Maven artifact publishing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_gradle_command")]
    pub gradle_command: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        ArtifactsConfig {
            enabled: default_true(),
            gradle_command: default_gradle_command(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `publishnpm.toml` in current directory
/// 3. `publishnpm.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
