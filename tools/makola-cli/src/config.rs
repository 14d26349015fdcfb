//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout configuration.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding persisted state such as the cart.
    ///
    /// Relative paths resolve against the working directory. Defaults to
    /// a `makola` directory under the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Ask for confirmation before placing an order.
    #[serde(default = "default_true")]
    pub confirm: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            confirm: default_true(),
        }
    }
}

/// Generate a default makola.toml config file.
pub fn generate_default_config() -> String {
    r#"# Makola storefront configuration

[storage]
# Directory for the persisted cart.
# Defaults to ~/.local/share/makola when unset.
# data_dir = "/var/lib/makola"

[checkout]
# Ask before placing an order. `makola checkout --yes` skips the prompt
# either way.
confirm = true
"#
    .to_string()
}
