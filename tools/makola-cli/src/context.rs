//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use makola_commerce::cart::CartStore;
use makola_storage::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["makola.toml", ".makola.toml", "makola.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        tracing::debug!(path = %config_path.display(), "loaded config file");
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get the directory holding persisted state.
    pub fn data_dir(&self) -> PathBuf {
        match &self.config.storage.data_dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs_path().join("makola"),
        }
    }

    /// Open the persisted cart from the configured data directory.
    pub async fn open_cart(&self) -> Result<CartStore> {
        let dir = self.data_dir();
        self.output
            .debug(&format!("Using data directory: {}", dir.display()));

        let backend = FileStore::open(dir)
            .await
            .context("Failed to open data directory")?;

        Ok(CartStore::open(backend).await)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
