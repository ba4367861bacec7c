//! Configuration management for dashcopy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::transport::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
use crate::client::{Environment, RetryPolicy};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pave grant key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_key: Option<String>,

    /// Default organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrgSelection>,

    /// Pave endpoint or relay URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    #[serde(default)]
    pub environment: Environment,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Selected organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgSelection {
    pub id: String,

    /// Display name; empty when set from a flag
    #[serde(default)]
    pub name: String,
}

/// Transport tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Preferences {
    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "preferences.timeout_secs must be greater than 0".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Retry policy for the transport.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            delay: Duration::from_millis(self.retry_delay_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dashcopy").join("config.yaml"))
    }

    /// Resolve an optional path override to a concrete path.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, or defaults when no file exists yet.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.preferences.validate()?;

        Ok(config)
    }

    /// Save configuration to an optional path (defaults to ~/.dashcopy/config.yaml)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The grant key is a bearer credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply flag/env overrides on top of file values.
    pub fn apply_overrides(
        &mut self,
        grant_key: Option<&str>,
        org_id: Option<&str>,
        endpoint: Option<&str>,
        environment: Option<Environment>,
    ) {
        if let Some(key) = grant_key {
            self.grant_key = Some(key.to_string());
        }
        if let Some(id) = org_id {
            // Keep the stored name only if it belongs to the same org
            let name = match &self.organization {
                Some(org) if org.id == id => org.name.clone(),
                _ => String::new(),
            };
            self.organization = Some(OrgSelection {
                id: id.to_string(),
                name,
            });
        }
        if let Some(url) = endpoint {
            self.api_endpoint = Some(url.to_string());
        }
        if let Some(env) = environment {
            self.environment = env;
        }
    }

    /// Endpoint to send requests to.
    pub fn endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Grant key, or an error telling the user how to set one.
    pub fn require_grant_key(&self) -> Result<&str> {
        self.grant_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingGrantKey.into())
    }

    /// Organization ID, or an error telling the user how to set one.
    pub fn require_org_id(&self) -> Result<&str> {
        self.organization
            .as_ref()
            .map(|org| org.id.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConfigError::MissingOrgId.into())
    }
}

/// Mask a grant key for display, keeping the last four characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
