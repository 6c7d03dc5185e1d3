//! Java snippets shared by the renderers.

use crate::model::JavaField;

/// Continuation indent for chained calls and wrapped expressions.
pub const CONTINUATION: &str = "        ";

/// Reference a field, optionally through its getter and on another instance.
///
/// - `field_access(name, None, false)` → `name`
/// - `field_access(name, Some("other"), true)` → `other.getName()`
pub fn field_access(field: &JavaField, qualifier: Option<&str>, use_getter: bool) -> String {
    let member = if use_getter {
        format!("{}()", field.getter_name())
    } else {
        field.name.clone()
    };
    match qualifier {
        Some(qualifier) => format!("{qualifier}.{member}"),
        None => member,
    }
}

/// `if (condition) return value;`, with or without braces.
pub fn if_return(condition: &str, value: &str, block: bool) -> String {
    if block {
        format!("if ({condition}) {{\n    return {value};\n}}")
    } else {
        format!("if ({condition})\n    return {value};")
    }
}

/// Condition under which `other` is not comparable with an instance of `class_name`.
pub fn type_mismatch_condition(class_name: &str, class_comparison: bool) -> String {
    if class_comparison {
        "other == null || getClass() != other.getClass()".to_string()
    } else {
        format!("!(other instanceof {class_name})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let field = JavaField::new("firstName", "String");
        assert_eq!(field_access(&field, None, false), "firstName");
        assert_eq!(field_access(&field, None, true), "getFirstName()");
        assert_eq!(
            field_access(&field, Some("castOther"), true),
            "castOther.getFirstName()"
        );
        let flag = JavaField::new("active", "boolean");
        assert_eq!(field_access(&flag, Some("other"), true), "other.isActive()");
    }

    #[test]
    fn test_if_return_braces() {
        assert_eq!(
            if_return("this == other", "true", false),
            "if (this == other)\n    return true;"
        );
        assert_eq!(
            if_return("this == other", "true", true),
            "if (this == other) {\n    return true;\n}"
        );
    }

    #[test]
    fn test_type_mismatch_condition() {
        insta::assert_snapshot!(type_mismatch_condition("Person", false), @"!(other instanceof Person)");
        assert_eq!(
            type_mismatch_condition("Person", true),
            "other == null || getClass() != other.getClass()"
        );
    }
}
