use thiserror::Error;

use crate::identifier::{StrategyIdentifier, UserActionIdentifier};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing setting: {0}")]
    Missing(String),

    #[error("setting {key} is not an integer: {value:?}")]
    InvalidInteger { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(String),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no {strategy} strategy is registered for {action}")]
    UnknownStrategy {
        action: UserActionIdentifier,
        strategy: StrategyIdentifier,
    },

    #[error("generation data does not match the bound method (expected {expected})")]
    DataMismatch { expected: &'static str },

    #[error("the open dialog is not driven by {expected}")]
    StrategyMismatch { expected: &'static str },

    #[error("skeleton declares {signatures} methods but content produced {bodies} bodies")]
    ShapeMismatch { signatures: usize, bodies: usize },

    #[error("dialog cannot be confirmed: {0}")]
    ConfirmationBlocked(String),

    #[error("no fields selected")]
    NoFieldsSelected,

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
