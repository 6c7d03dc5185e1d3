use jgen_core::RenderError;
use jgen_core::data::{CompareToGenerationData, GenerationData};
use jgen_core::source::{field_access, if_return};
use minijinja::context;

use super::render;
use crate::expressions;

/// Body of `compareTo(T)`: compare field by field, returning the first non-zero result.
pub fn emit_compare_to(data: &CompareToGenerationData) -> Result<String, RenderError> {
    let mut comparisons = Vec::new();
    if data.append_super() {
        comparisons.push("super.compareTo(other)".to_string());
    }
    comparisons.extend(comparison_terms(data));
    if comparisons.is_empty() {
        comparisons.push("0".to_string());
    }

    render(
        "compare_to.java.j2",
        include_str!("../../templates/compare_to.java.j2"),
        context! {
            comparisons => comparisons,
            unequal_guard => if_return("result != 0", "result", data.use_block_in_if_statements()),
        },
    )
}

pub(crate) fn comparison_terms(data: &CompareToGenerationData) -> Vec<String> {
    let getters = data.use_getters_instead_of_fields();
    data.checked_fields()
        .iter()
        .map(|field| {
            expressions::comparison(
                field.category(),
                &field_access(field, None, getters),
                &field_access(field, Some("other"), getters),
            )
        })
        .collect()
}
