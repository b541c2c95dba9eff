//! Client settings
//!
//! Server URL and credentials come from, in increasing precedence, a YAML
//! settings file, `PIPEDIFF_*` environment variables and command-line flags.

use crate::client::SettingsError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the default settings file in the home directory
pub const DEFAULT_SETTINGS_FILE: &str = ".pipediff.yaml";

/// Path of the server endpoint serving the config XML, relative to the base URL
pub const CONFIG_XML_PATH: &str = "admin/config_xml";

pub const URL_ENV: &str = "PIPEDIFF_URL";
pub const USERNAME_ENV: &str = "PIPEDIFF_USERNAME";
pub const PASSWORD_ENV: &str = "PIPEDIFF_PASSWORD";

/// Partially specified settings from a single source
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup(URL_ENV),
            username: lookup(USERNAME_ENV),
            password: lookup(PASSWORD_ENV),
            timeout_secs: None,
        }
    }

    /// Default settings file location (`~/.pipediff.yaml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_SETTINGS_FILE))
    }

    /// Load the settings file and apply environment overrides
    ///
    /// An explicit `path` must exist. The default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let from_file = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(default)?,
                _ => {
                    debug!("No settings file found, using environment only");
                    Self::default()
                }
            },
        };
        Ok(from_file.merge(Self::from_env()))
    }

    /// Overlay `higher` on top of `self`; values set in `higher` win
    pub fn merge(self, higher: Settings) -> Settings {
        Settings {
            url: higher.url.or(self.url),
            username: higher.username.or(self.username),
            password: higher.password.or(self.password),
            timeout_secs: higher.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Resolve into a client configuration
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingUrl`] when no source provided a URL.
    pub fn into_client_config(self) -> Result<ClientConfig, SettingsError> {
        let url = self
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingUrl)?;

        let mut config = ClientConfig::new(url).with_credentials(
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        );
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout(timeout_secs);
        }
        Ok(config)
    }
}

/// Resolved configuration for the server client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL, always ending with `/`
    pub base_url: String,

    pub username: String,

    pub password: String,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            username: String::new(),
            password: String::new(),
            timeout_secs: None,
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Full URL of the config XML endpoint
    pub fn config_xml_url(&self) -> String {
        format!("{}{}", self.base_url, CONFIG_XML_PATH)
    }
}
