use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::identifier::{StrategyIdentifier, UserActionIdentifier};

/// Top-level project configuration loaded from `.jgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JgenConfig {
    /// Where dialog settings are persisted between runs.
    pub settings_file: String,
    /// Strategy picked when none is given for an action.
    pub strategies: IndexMap<UserActionIdentifier, StrategyIdentifier>,
    pub preferences: Preferences,
}

impl Default for JgenConfig {
    fn default() -> Self {
        Self {
            settings_file: ".jgen/dialog-settings.json".to_string(),
            strategies: IndexMap::new(),
            preferences: Preferences::default(),
        }
    }
}

impl JgenConfig {
    pub fn strategy_for(&self, action: UserActionIdentifier) -> StrategyIdentifier {
        self.strategies
            .get(&action)
            .copied()
            .unwrap_or(StrategyIdentifier::CommonsLang3)
    }
}

/// Initial state of the options shared by every dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub append_super: bool,
    pub generate_comment: bool,
    pub use_getters_instead_of_fields: bool,
    pub use_block_in_if_statements: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            append_super: true,
            generate_comment: true,
            use_getters_instead_of_fields: false,
            use_block_in_if_statements: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".jgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<JgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let config: JgenConfig = serde_yaml_ng::from_str(&content)?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# jgen configuration
settings_file: .jgen/dialog-settings.json

strategies:
  equals-hash-code: commons-lang3   # commons-lang | commons-lang3 | jdk
  to-string: commons-lang3
  compare-to: commons-lang3

preferences:
  append_super: true                   # ignored for classes without a superclass
  generate_comment: true               # /** {@inheritDoc} */ above each method
  use_getters_instead_of_fields: false
  use_block_in_if_statements: false
"#
}
