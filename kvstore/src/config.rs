//  CONFIG.rs
//    by Lut99
//
//  Created:
//    13 Oct 2026, 15:27:11
//  Last edited:
//    19 Oct 2026, 15:36:20
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the (YAML) configuration of the key-value store client
//!   helpers, which allows the default timeout to be changed without a
//!   rebuild.
//

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::address::Address;
use crate::constants::DEFAULT_KV_GET_TIMEOUT_SECS;
use crate::duration::get_duration_or;


/***** TESTS *****/
#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;


    #[test]
    fn test_config_defaults() {
        let config: KvConfig = KvConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, KvConfig::default());
        assert_eq!(config.default_timeout(), Duration::from_secs(DEFAULT_KV_GET_TIMEOUT_SECS));
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn test_config_get_duration() {
        let config: KvConfig = KvConfig::from_yaml_str("default_timeout: 30\nendpoint: localhost:2379\n").unwrap();
        assert_eq!(config.get_duration(-4), Duration::from_secs(30));
        assert_eq!(config.get_duration(0), Duration::from_secs(30));
        assert_eq!(config.get_duration(2), Duration::from_secs(2));
        assert_eq!(config.endpoint, Some(Address::hostname("localhost", 2379)));
    }

    #[test]
    fn test_config_endpoint_roundtrip() {
        for endpoint in ["\"[fe80::1%eth0]:22\"", "\"[::1]:2379\"", "kv-0.local:2379"] {
            let config: KvConfig = KvConfig::from_yaml_str(&format!("endpoint: {endpoint}\n")).unwrap();
            let raw: String = config.to_yaml_string().unwrap();
            assert_eq!(KvConfig::from_yaml_str(&raw).unwrap(), config);
        }
    }

    #[test]
    fn test_config_errors() {
        assert!(matches!(KvConfig::from_yaml_str("default_timeout: 0"), Err(ConfigError::ZeroTimeout)));
        assert!(matches!(KvConfig::from_yaml_str("default_timeout: -3"), Err(ConfigError::Parse { .. })));
        assert!(matches!(KvConfig::from_yaml_str("endpoint: a.b.0.1::::::"), Err(ConfigError::Parse { .. })));
        assert!(matches!(KvConfig::from_path("/this/path/does/not/exist.yml"), Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn test_config_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_timeout: 12").unwrap();
        let config: KvConfig = KvConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_timeout, 12);

        // Whatever we write, we can read back
        let raw: String = config.to_yaml_string().unwrap();
        assert_eq!(KvConfig::from_yaml_str(&raw).unwrap(), config);
    }
}





/***** ERRORS *****/
/// Errors that relate to loading a [`KvConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file '{}'", path.display())]
    FileRead { path: PathBuf, source: std::io::Error },
    /// Failed to parse the config as YAML.
    #[error("Failed to parse config as YAML")]
    Parse { source: serde_yaml::Error },
    /// Failed to serialize the config as YAML.
    #[error("Failed to serialize config as YAML")]
    Serialize { source: serde_yaml::Error },
    /// The default timeout was zero, which would make every `GET` time out immediately.
    #[error("The default timeout must be at least one second")]
    ZeroTimeout,
}





/***** HELPER FUNCTIONS *****/
#[inline]
const fn default_timeout() -> u64 { DEFAULT_KV_GET_TIMEOUT_SECS }





/***** LIBRARY *****/
/// Configures the key-value store client helpers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KvConfig {
    /// The timeout used when a caller gives none, in seconds.
    #[serde(default = "default_timeout")]
    pub default_timeout: u64,
    /// The key-value store to talk to, if known up front.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Address>,
}
impl Default for KvConfig {
    #[inline]
    fn default() -> Self { Self { default_timeout: default_timeout(), endpoint: None } }
}
impl KvConfig {
    /// Loads a KvConfig from a YAML file.
    ///
    /// # Arguments
    /// - `path`: The path to the file to load.
    ///
    /// # Returns
    /// A new KvConfig with the file's settings.
    ///
    /// # Errors
    /// This function errors if the file could not be read, or if [`KvConfig::from_yaml_str()`]
    /// fails on its contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path: &Path = path.as_ref();
        debug!("Loading KvConfig from '{}'...", path.display());
        let raw: String = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead { path: path.into(), source })?;
        Self::from_yaml_str(&raw)
    }

    /// Parses a KvConfig from YAML text.
    ///
    /// # Errors
    /// This function errors if the text is not a valid config, or if it sets a zero default
    /// timeout.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        if config.default_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(config)
    }

    /// Serializes the KvConfig as YAML text.
    ///
    /// # Errors
    /// This function errors if serialization fails.
    #[inline]
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> { serde_yaml::to_string(self).map_err(|source| ConfigError::Serialize { source }) }

    /// Returns the configured default timeout.
    #[inline]
    pub const fn default_timeout(&self) -> Duration { Duration::from_secs(self.default_timeout) }

    /// Converts a timeout in seconds to a [`Duration`], falling back to this config's default.
    ///
    /// Behaves like [`get_duration()`](crate::duration::get_duration()), except for the default
    /// used.
    #[inline]
    pub fn get_duration(&self, timeout: i64) -> Duration { get_duration_or(timeout, self.default_timeout()) }
}
