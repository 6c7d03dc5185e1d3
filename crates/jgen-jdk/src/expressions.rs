use jgen_core::model::TypeCategory;

/// Equality test between `left` and `right` for a field of `category`.
///
/// With `compare_references`, object fields (arrays included) compare by identity.
pub fn equality(category: TypeCategory, left: &str, right: &str, compare_references: bool) -> String {
    match category {
        TypeCategory::Boolean | TypeCategory::Int | TypeCategory::Long => {
            format!("{left} == {right}")
        }
        TypeCategory::Float => format!("Float.compare({left}, {right}) == 0"),
        TypeCategory::Double => format!("Double.compare({left}, {right}) == 0"),
        _ if compare_references => format!("{left} == {right}"),
        TypeCategory::Array => format!("Arrays.equals({left}, {right})"),
        TypeCategory::Reference => format!("Objects.equals({left}, {right})"),
    }
}

/// Hash contribution of one field.
pub fn hash(category: TypeCategory, value: &str) -> String {
    match category {
        TypeCategory::Int => value.to_string(),
        TypeCategory::Boolean => format!("Boolean.hashCode({value})"),
        TypeCategory::Long => format!("Long.hashCode({value})"),
        TypeCategory::Float => format!("Float.hashCode({value})"),
        TypeCategory::Double => format!("Double.hashCode({value})"),
        TypeCategory::Array => format!("Arrays.hashCode({value})"),
        TypeCategory::Reference => format!("Objects.hashCode({value})"),
    }
}

/// Three-way comparison of one field.
pub fn comparison(category: TypeCategory, left: &str, right: &str) -> String {
    match category {
        TypeCategory::Boolean => format!("Boolean.compare({left}, {right})"),
        TypeCategory::Int => format!("Integer.compare({left}, {right})"),
        TypeCategory::Long => format!("Long.compare({left}, {right})"),
        TypeCategory::Float => format!("Float.compare({left}, {right})"),
        TypeCategory::Double => format!("Double.compare({left}, {right})"),
        TypeCategory::Array => format!("Arrays.compare({left}, {right})"),
        TypeCategory::Reference => format!("{left}.compareTo({right})"),
    }
}

/// String form of one field inside `toString`.
pub fn display(category: TypeCategory, value: &str) -> String {
    match category {
        TypeCategory::Array => format!("Arrays.toString({value})"),
        _ => value.to_string(),
    }
}

/// `java.util` classes an expression set refers to, in import order.
pub fn java_util_imports<'a>(expressions: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut arrays = false;
    let mut objects = false;
    for expression in expressions {
        arrays |= expression.contains("Arrays.");
        objects |= expression.contains("Objects.");
    }
    let mut imports = Vec::new();
    if arrays {
        imports.push("java.util.Arrays".to_string());
    }
    if objects {
        imports.push("java.util.Objects".to_string());
    }
    imports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_category() {
        assert_eq!(equality(TypeCategory::Int, "a", "b", false), "a == b");
        assert_eq!(
            equality(TypeCategory::Double, "a", "b", false),
            "Double.compare(a, b) == 0"
        );
        assert_eq!(
            equality(TypeCategory::Reference, "a", "b", false),
            "Objects.equals(a, b)"
        );
        assert_eq!(
            equality(TypeCategory::Array, "a", "b", false),
            "Arrays.equals(a, b)"
        );
    }

    #[test]
    fn test_compare_references_leaves_primitives_alone() {
        assert_eq!(equality(TypeCategory::Reference, "a", "b", true), "a == b");
        assert_eq!(equality(TypeCategory::Array, "a", "b", true), "a == b");
        assert_eq!(
            equality(TypeCategory::Float, "a", "b", true),
            "Float.compare(a, b) == 0"
        );
    }

    #[test]
    fn test_hash_and_comparison() {
        assert_eq!(hash(TypeCategory::Int, "age"), "age");
        assert_eq!(hash(TypeCategory::Long, "id"), "Long.hashCode(id)");
        assert_eq!(
            comparison(TypeCategory::Reference, "name", "other.name"),
            "name.compareTo(other.name)"
        );
        assert_eq!(display(TypeCategory::Array, "tags"), "Arrays.toString(tags)");
    }

    #[test]
    fn test_imports_are_detected() {
        let expressions = ["Objects.equals(a, b)", "x == y", "Arrays.equals(c, d)"];
        assert_eq!(
            java_util_imports(expressions),
            ["java.util.Arrays", "java.util.Objects"]
        );
        assert!(java_util_imports(["a == b"]).is_empty());
    }
}
