pub mod config;
pub mod data;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod hashcode;
pub mod identifier;
pub mod manage;
pub mod method;
pub mod model;
pub mod settings;
pub mod skeleton;
pub mod source;

pub use engine::{Engine, EngineBuilder};
pub use error::{GenerationError, RenderError, SettingsError};

/// A single generated Java method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    pub name: String,
    pub source: String,
}

/// Everything a renderer produced for one request: imports plus methods in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    pub imports: Vec<String>,
    pub methods: Vec<GeneratedMethod>,
}

impl GeneratedCode {
    /// Join imports and methods into one insertable block of source.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str(&format!("import {import};\n"));
        }
        for method in &self.methods {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&method.source);
            out.push('\n');
        }
        out
    }
}
