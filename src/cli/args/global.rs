//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::client::Environment;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Organization ID override (bypasses config file)
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.dashcopy/config.yaml)
    pub config: Option<String>,

    /// Grant key override (bypasses config file)
    pub grant_key: Option<String>,

    /// Endpoint override, e.g. a local relay
    pub endpoint: Option<String>,

    pub environment: Option<Environment>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            grant_key: cli.grant_key.clone(),
            endpoint: cli.endpoint.clone(),
            environment: cli.environment,
        }
    }

    /// Get organization override as `Option<&str>`.
    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get grant key override as `Option<&str>`.
    pub fn grant_key_ref(&self) -> Option<&str> {
        self.grant_key.as_deref()
    }

    /// Get endpoint override as `Option<&str>`.
    pub fn endpoint_ref(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            org: Some("org_1".to_string()),
            config: Some("/custom/path".to_string()),
            grant_key: Some("gk_abc".to_string()),
            endpoint: Some("http://localhost:3001/pave".to_string()),
            environment: Some(Environment::Development),
        };

        assert_eq!(opts.org_ref(), Some("org_1"));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.grant_key_ref(), Some("gk_abc"));
        assert_eq!(opts.endpoint_ref(), Some("http://localhost:3001/pave"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Pretty,
            org: None,
            config: None,
            grant_key: None,
            endpoint: None,
            environment: None,
        };

        assert_eq!(opts.org_ref(), None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.grant_key_ref(), None);
        assert_eq!(opts.endpoint_ref(), None);
    }
}
