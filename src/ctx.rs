//! Build context and configuration loading.
//!
//! This module provides the [`SiteContext`] type which carries the state a
//! resolution run needs: the documentation source directory, the build
//! year, and the loaded site configuration.
//!
//! Ambient process state (current working directory, current date) is
//! captured once at the process edge and injected here; resolution code
//! only ever reads the context.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local};

use crate::{site::config::SiteConfig, utils};

/// The build context for one resolution run.
///
/// `SiteContext` is the central state container for sitetool operations.
/// It holds the source directory all relative paths resolve against, the
/// calendar year stamped into the copyright line, and the site
/// configuration once loaded.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Documentation source directory.
    pub source: PathBuf,
    /// Calendar year embedded in the generated copyright string.
    pub build_year: i32,
    /// Current site configuration.
    pub site_config: Option<SiteConfig>,
    /// Path to the site configuration file.
    pub site_config_path: Option<PathBuf>,
}

impl SiteContext {
    /// Creates a context with an explicit source directory and build year.
    pub fn new(source: impl Into<PathBuf>, build_year: i32) -> Self {
        Self {
            source: source.into(),
            build_year,
            site_config: None,
            site_config_path: None,
        }
    }

    /// Creates a context from the running process's environment.
    ///
    /// Reads the current working directory and the current date exactly
    /// once. A relative `source` is resolved against the working
    /// directory; `None` means the working directory itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current(source: Option<PathBuf>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        let source = match source {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd,
        };
        Ok(Self::new(source, Local::now().year()))
    }

    /// Loads and stores the site configuration.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file. Defaults
    ///   to `.site.toml` in the source directory. An absent file yields
    ///   the stock configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing configuration file cannot be
    /// parsed.
    pub fn prepare_site_config(
        &mut self,
        config_path: Option<PathBuf>,
    ) -> anyhow::Result<SiteConfig> {
        let config_path = match config_path {
            Some(path) => path,
            None => self.source.join(".site.toml"),
        };
        self.site_config_path = Some(config_path.clone());

        let config = if config_path.exists() {
            info!("loading site config: {}", config_path.display());
            SiteConfig::load(&config_path)?
        } else {
            debug!(
                "no site config at {}, using the stock configuration",
                config_path.display()
            );
            SiteConfig::default()
        };

        self.site_config = Some(config.clone());
        Ok(config)
    }

    /// Expands placeholders in a configuration string.
    ///
    /// Supports `${sourceFolder}`, replaced with the source directory,
    /// and `${env:VAR}` environment placeholders.
    pub fn expand(&self, value: &str) -> String {
        let replaced = value.replace(
            "${sourceFolder}",
            format!("{}", self.source.display()).as_ref(),
        );
        utils::replace_env_placeholders(&replaced)
    }
}
