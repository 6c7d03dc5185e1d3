use jgen_core::RenderError;
use jgen_core::data::{EqualsHashCodeGenerationData, GenerationData};
use jgen_core::model::JavaClass;
use jgen_core::source::{CONTINUATION, field_access, if_return, type_mismatch_condition};
use minijinja::context;

use super::render;
use crate::expressions;

/// Body of `equals(Object)` as a chain of `&&` comparisons.
pub fn emit_equals(class: &JavaClass, data: &EqualsHashCodeGenerationData) -> Result<String, RenderError> {
    let block = data.use_block_in_if_statements();
    let mut comparisons = Vec::new();
    if data.append_super() {
        comparisons.push("super.equals(other)".to_string());
    }
    comparisons.extend(equality_terms(data));
    if comparisons.is_empty() {
        comparisons.push("true".to_string());
    }

    render(
        "equals.java.j2",
        include_str!("../../templates/equals.java.j2"),
        context! {
            same_instance_guard => if_return("this == other", "true", block),
            type_guard => if_return(
                &type_mismatch_condition(&class.name, data.class_comparison()),
                "false",
                block,
            ),
            class_name => class.name.clone(),
            comparisons => comparisons,
            separator => format!("\n{CONTINUATION}&& "),
        },
    )
}

/// Body of `hashCode()` folding each field into `result` with the seed and multiplier.
pub fn emit_hash_code(data: &EqualsHashCodeGenerationData) -> Result<String, RenderError> {
    let mut terms = Vec::new();
    if data.append_super() {
        terms.push("super.hashCode()".to_string());
    }
    terms.extend(hash_terms(data));
    let (initial, multiplier) = data.init_mult_numbers().as_tuple();

    render(
        "hash_code.java.j2",
        include_str!("../../templates/hash_code.java.j2"),
        context! {
            initial => initial,
            multiplier => multiplier,
            terms => terms,
        },
    )
}

pub(crate) fn equality_terms(data: &EqualsHashCodeGenerationData) -> Vec<String> {
    let getters = data.use_getters_instead_of_fields();
    data.checked_fields()
        .iter()
        .map(|field| {
            expressions::equality(
                field.category(),
                &field_access(field, None, getters),
                &field_access(field, Some("castOther"), getters),
                data.compare_references(),
            )
        })
        .collect()
}

pub(crate) fn hash_terms(data: &EqualsHashCodeGenerationData) -> Vec<String> {
    let getters = data.use_getters_instead_of_fields();
    data.checked_fields()
        .iter()
        .map(|field| expressions::hash(field.category(), &field_access(field, None, getters)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jgen_core::data::FieldDialogData;

    fn class() -> JavaClass {
        JavaClass::new("Point")
            .with_field("x", "double")
            .with_field("label", "String")
    }

    fn data(class: &JavaClass, append_super: bool) -> EqualsHashCodeGenerationData {
        let base = FieldDialogData::builder()
            .checked_fields(class.fields.clone())
            .append_super(append_super)
            .use_block_in_if_statements(true)
            .build();
        EqualsHashCodeGenerationData::builder(base).build()
    }

    #[test]
    fn test_equals_chain() {
        let class = class();
        let body = emit_equals(&class, &data(&class, false)).unwrap();
        assert_eq!(
            body,
            "if (this == other) {\n    return true;\n}\n\
             if (!(other instanceof Point)) {\n    return false;\n}\n\
             Point castOther = (Point) other;\n\
             return Double.compare(x, castOther.x) == 0\n\
             \x20       && Objects.equals(label, castOther.label);"
        );
    }

    #[test]
    fn test_equals_with_super_first() {
        let class = class().with_superclass("Shape");
        let body = emit_equals(&class, &data(&class, true)).unwrap();
        assert!(body.contains("return super.equals(other)\n        && Double.compare"));
    }

    #[test]
    fn test_hash_code_fold() {
        let class = class();
        let body = emit_hash_code(&data(&class, false)).unwrap();
        assert_eq!(
            body,
            "int result = 17;\n\
             result = 37 * result + Double.hashCode(x);\n\
             result = 37 * result + Objects.hashCode(label);\n\
             return result;"
        );
    }

    #[test]
    fn test_empty_selection_still_compiles() {
        let base = FieldDialogData::builder().build();
        let data = EqualsHashCodeGenerationData::builder(base).build();
        let body = emit_equals(&JavaClass::new("Empty"), &data).unwrap();
        assert!(body.ends_with("return true;"));
        assert_eq!(emit_hash_code(&data).unwrap(), "int result = 17;\nreturn result;");
    }
}
