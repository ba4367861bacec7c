//! Command execution context
//!
//! Loads configuration, applies flag/env overrides and builds the API client
//! so individual commands don't repeat the setup.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::PaveClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Configuration with overrides applied
    pub config: Config,
    pub client: PaveClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as the grant key arrives some
    /// other way (flag or environment).
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed or no grant key is
    /// available.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default(opts.config_ref())?;
        config.apply_overrides(
            opts.grant_key_ref(),
            opts.org_ref(),
            opts.endpoint_ref(),
            opts.environment,
        );
        config.require_grant_key()?;

        debug!(
            "Using endpoint {} ({:?})",
            config.endpoint(),
            config.environment
        );
        let client = PaveClient::new(
            config.endpoint(),
            config.preferences.retry_policy(),
            config.environment,
        )?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// The grant key to send with every request.
    pub fn grant_key(&self) -> Result<&str> {
        self.config.require_grant_key()
    }

    /// Get the organization ID, returning an error if not set.
    pub fn require_org_id(&self) -> Result<&str> {
        self.config.require_org_id()
    }
}
