use jgen_core::RenderError;
use jgen_core::data::{GenerationData, ToStringGenerationData};
use jgen_core::model::JavaClass;
use jgen_core::source::field_access;
use minijinja::context;

use super::render;
use crate::expressions;

/// Body of `toString()` as string concatenation: `Person [name=..., age=...]`.
pub fn emit_to_string(class: &JavaClass, data: &ToStringGenerationData) -> Result<String, RenderError> {
    render(
        "to_string.java.j2",
        include_str!("../../templates/to_string.java.j2"),
        context! {
            class_name => class.name.clone(),
            parts => display_parts(data),
        },
    )
}

/// One `"label=" + value` term per field, then `super`.
pub(crate) fn display_parts(data: &ToStringGenerationData) -> Vec<String> {
    let getters = data.use_getters_instead_of_fields();
    let mut parts: Vec<(String, String)> = data
        .checked_fields()
        .iter()
        .map(|field| {
            let value = expressions::display(field.category(), &field_access(field, None, getters));
            (field.name.clone(), value)
        })
        .collect();
    if data.append_super() {
        parts.push(("super".to_string(), "super.toString()".to_string()));
    }
    parts
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let separator = if i == 0 { "" } else { ", " };
            format!("\"{separator}{label}=\" + {value}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jgen_core::data::FieldDialogData;
    use jgen_core::model::JavaField;

    #[test]
    fn test_concatenation() {
        let base = FieldDialogData::builder()
            .checked_fields(vec![
                JavaField::new("name", "String"),
                JavaField::new("tags", "String[]"),
            ])
            .append_super(true)
            .build();
        let data = ToStringGenerationData::from(base);
        let body = emit_to_string(&JavaClass::new("Person"), &data).unwrap();
        assert_eq!(
            body,
            "return \"Person [\"\n\
             \x20       + \"name=\" + name\n\
             \x20       + \", tags=\" + Arrays.toString(tags)\n\
             \x20       + \", super=\" + super.toString()\n\
             \x20       + \"]\";"
        );
    }
}
