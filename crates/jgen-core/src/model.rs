use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};

/// The class methods are generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaClass {
    pub name: String,
    /// Direct superclass; `None` when the class extends `Object`.
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub fields: Vec<JavaField>,
    /// Names of the methods already declared by the class.
    #[serde(default)]
    pub methods: Vec<String>,
}

impl JavaClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(JavaField::new(name, type_name));
        self
    }

    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&JavaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_superclass(&self) -> bool {
        self.superclass.is_some()
    }

    /// Existing methods among `generated`; these get replaced and cannot anchor an insertion.
    pub fn excluded_methods(&self, generated: &[&str]) -> Vec<String> {
        self.methods
            .iter()
            .filter(|m| generated.contains(&m.as_str()))
            .cloned()
            .collect()
    }
}

/// A field declared on a [`JavaClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl JavaField {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn category(&self) -> TypeCategory {
        TypeCategory::of(&self.type_name)
    }

    /// Bean accessor for the field: `isActive` for `boolean`, `getName` otherwise.
    pub fn getter_name(&self) -> String {
        let prefix = if self.category() == TypeCategory::Boolean {
            "is"
        } else {
            "get"
        };
        format!("{prefix}{}", self.name.to_upper_camel_case())
    }
}

/// Coarse type classification the renderers switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Boolean,
    /// `byte`, `short`, `char`, `int`.
    Int,
    Long,
    Float,
    Double,
    Array,
    Reference,
}

impl TypeCategory {
    pub fn of(type_name: &str) -> Self {
        let type_name = type_name.trim();
        if type_name.ends_with("[]") || type_name.ends_with("...") {
            return TypeCategory::Array;
        }
        match type_name {
            "boolean" => TypeCategory::Boolean,
            "byte" | "short" | "char" | "int" => TypeCategory::Int,
            "long" => TypeCategory::Long,
            "float" => TypeCategory::Float,
            "double" => TypeCategory::Double,
            _ => TypeCategory::Reference,
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, TypeCategory::Array | TypeCategory::Reference)
    }
}

/// Where the generated methods are inserted in the class body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPosition {
    First,
    #[default]
    Last,
    After(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_categories() {
        assert_eq!(TypeCategory::of("int"), TypeCategory::Int);
        assert_eq!(TypeCategory::of("char"), TypeCategory::Int);
        assert_eq!(TypeCategory::of("long"), TypeCategory::Long);
        assert_eq!(TypeCategory::of("boolean"), TypeCategory::Boolean);
        assert_eq!(TypeCategory::of("Boolean"), TypeCategory::Reference);
        assert_eq!(TypeCategory::of("int[]"), TypeCategory::Array);
        assert_eq!(TypeCategory::of("List<String>"), TypeCategory::Reference);
        assert!(TypeCategory::Double.is_primitive());
        assert!(!TypeCategory::Array.is_primitive());
    }

    #[test]
    fn test_getter_names() {
        assert_eq!(JavaField::new("name", "String").getter_name(), "getName");
        assert_eq!(
            JavaField::new("firstName", "String").getter_name(),
            "getFirstName"
        );
        assert_eq!(JavaField::new("active", "boolean").getter_name(), "isActive");
    }

    #[test]
    fn test_excluded_methods() {
        let class = JavaClass::new("Person")
            .with_method("equals")
            .with_method("getName");
        assert_eq!(
            class.excluded_methods(&["equals", "hashCode"]),
            vec!["equals".to_string()]
        );
    }

    #[test]
    fn test_parse_class_yaml() {
        let yaml = r#"
name: Person
superclass: Entity
fields:
  - name: name
    type: String
  - name: age
    type: int
methods: [toString]
"#;
        let class: JavaClass = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(class.name, "Person");
        assert!(class.has_superclass());
        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.field("age").unwrap().category(), TypeCategory::Int);
        assert_eq!(class.methods, vec!["toString".to_string()]);
    }
}
