use jgen_core::RenderError;
use jgen_core::data::{EqualsHashCodeGenerationData, GenerationData};
use jgen_core::model::{JavaClass, JavaField};
use jgen_core::source::{field_access, if_return, type_mismatch_condition};
use minijinja::context;

use super::render;

/// Body of `equals(Object)` built on `EqualsBuilder`.
pub fn emit_equals(class: &JavaClass, data: &EqualsHashCodeGenerationData) -> Result<String, RenderError> {
    let block = data.use_block_in_if_statements();
    let fields: Vec<String> = data
        .checked_fields()
        .iter()
        .map(|field| equals_arguments(field, data))
        .collect();

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
            append_super => data.append_super(),
            fields => fields,
        },
    )
}

/// Body of `hashCode()` built on `HashCodeBuilder` with the chosen seed and multiplier.
pub fn emit_hash_code(data: &EqualsHashCodeGenerationData) -> Result<String, RenderError> {
    let getters = data.use_getters_instead_of_fields();
    let fields: Vec<String> = data
        .checked_fields()
        .iter()
        .map(|field| field_access(field, None, getters))
        .collect();
    let (initial, multiplier) = data.init_mult_numbers().as_tuple();

    render(
        "hash_code.java.j2",
        include_str!("../../templates/hash_code.java.j2"),
        context! {
            initial => initial,
            multiplier => multiplier,
            append_super => data.append_super(),
            fields => fields,
        },
    )
}

fn equals_arguments(field: &JavaField, data: &EqualsHashCodeGenerationData) -> String {
    let getters = data.use_getters_instead_of_fields();
    let own = field_access(field, None, getters);
    let other = field_access(field, Some("castOther"), getters);
    if data.compare_references() && !field.category().is_primitive() {
        format!("{own} == {other}, true")
    } else {
        format!("{own}, {other}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jgen_core::data::FieldDialogData;
    use jgen_core::hashcode::{InitMultPair, OddNumber};

    fn person() -> JavaClass {
        JavaClass::new("Person")
            .with_field("name", "String")
            .with_field("age", "int")
    }

    fn base(class: &JavaClass) -> jgen_core::data::FieldDialogDataBuilder {
        FieldDialogData::builder().checked_fields(class.fields.clone())
    }

    #[test]
    fn test_equals_instanceof_without_braces() {
        let class = person();
        let data = EqualsHashCodeGenerationData::builder(base(&class).build()).build();
        let body = emit_equals(&class, &data).unwrap();
        assert_eq!(
            body,
            "if (this == other)\n    return true;\n\
             if (!(other instanceof Person))\n    return false;\n\
             Person castOther = (Person) other;\n\
             return new EqualsBuilder()\n\
             \x20       .append(name, castOther.name)\n\
             \x20       .append(age, castOther.age)\n\
             \x20       .isEquals();"
        );
    }

    #[test]
    fn test_equals_class_comparison_and_super() {
        let class = person().with_superclass("Entity");
        let data = EqualsHashCodeGenerationData::builder(
            base(&class)
                .append_super(true)
                .use_block_in_if_statements(true)
                .build(),
        )
        .class_comparison(true)
        .build();
        let body = emit_equals(&class, &data).unwrap();
        assert!(body.contains("if (other == null || getClass() != other.getClass()) {\n    return false;\n}"));
        assert!(body.contains("        .appendSuper(super.equals(other))\n        .append(name"));
    }

    #[test]
    fn test_compare_references_only_for_reference_fields() {
        let class = person();
        let data = EqualsHashCodeGenerationData::builder(base(&class).build())
            .compare_references(true)
            .build();
        let body = emit_equals(&class, &data).unwrap();
        assert!(body.contains(".append(name == castOther.name, true)"));
        assert!(body.contains(".append(age, castOther.age)"));
    }

    #[test]
    fn test_hash_code_uses_numbers_and_getters() {
        let class = person();
        let numbers = InitMultPair::new(
            OddNumber::new(19).unwrap(),
            OddNumber::new(41).unwrap(),
        );
        let data = EqualsHashCodeGenerationData::builder(
            base(&class).use_getters_instead_of_fields(true).build(),
        )
        .init_mult_numbers(numbers)
        .build();
        let body = emit_hash_code(&data).unwrap();
        assert_eq!(
            body,
            "return new HashCodeBuilder(19, 41)\n        .append(getName())\n        .append(getAge())\n        .toHashCode();"
        );
    }
}
