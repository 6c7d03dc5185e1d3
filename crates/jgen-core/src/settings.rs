//! Persistent dialog settings: nested sections of key/values, stored as JSON.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// A stored value. The store writes strings; hand-edited files may hold integers
/// or anything else, which is kept and reported as invalid on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl SettingValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SettingValue::Text(s) => Cow::Borrowed(s),
            SettingValue::Int(n) => Cow::Owned(n.to_string()),
            SettingValue::Other(v) => Cow::Owned(v.to_string()),
        }
    }
}

/// A named group of settings, parsed on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSection {
    values: IndexMap<String, SettingValue>,
    sections: IndexMap<String, SettingsSection>,
}

impl SettingsSection {
    pub fn section(&self, name: &str) -> Option<&SettingsSection> {
        self.sections.get(name)
    }

    /// Get a child section, creating an empty one on first use.
    pub fn section_or_insert(&mut self, name: &str) -> &mut SettingsSection {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values.get(key).map(SettingValue::as_text)
    }

    /// Anything other than a stored `"true"` reads as `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v == "true")
    }

    pub fn get_int(&self, key: &str) -> Result<i32, SettingsError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| SettingsError::Missing(key.to_string()))?;
        let parsed = match value {
            SettingValue::Int(n) => i32::try_from(*n).ok(),
            SettingValue::Text(s) => s.trim().parse().ok(),
            SettingValue::Other(_) => None,
        };
        parsed.ok_or_else(|| SettingsError::InvalidInteger {
            key: key.to_string(),
            value: value.as_text().into_owned(),
        })
    }

    pub fn put(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), SettingValue::Text(value.into()));
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.put(key, value.to_string());
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.put(key, value.to_string());
    }
}

/// Root of the settings tree, one top-level section per strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    root: SettingsSection,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from `path`. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("no settings at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    pub fn section(&self, name: &str) -> Option<&SettingsSection> {
        self.root.section(name)
    }

    pub fn section_or_insert(&mut self, name: &str) -> &mut SettingsSection {
        self.root.section_or_insert(name)
    }
}
