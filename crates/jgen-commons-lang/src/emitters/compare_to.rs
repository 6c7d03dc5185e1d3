use jgen_core::RenderError;
use jgen_core::data::{CompareToGenerationData, GenerationData};
use jgen_core::source::field_access;
use minijinja::context;

use super::render;

/// Body of `compareTo(T)` built on `CompareToBuilder`.
pub fn emit_compare_to(data: &CompareToGenerationData) -> Result<String, RenderError> {
    let getters = data.use_getters_instead_of_fields();
    let fields: Vec<minijinja::Value> = data
        .checked_fields()
        .iter()
        .map(|field| {
            context! {
                left => field_access(field, None, getters),
                right => field_access(field, Some("other"), getters),
            }
        })
        .collect();

    render(
        "compare_to.java.j2",
        include_str!("../../templates/compare_to.java.j2"),
        context! {
            append_super => data.append_super(),
            fields => fields,
        },
    )
}
