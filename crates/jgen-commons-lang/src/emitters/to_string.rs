use jgen_core::RenderError;
use jgen_core::data::{GenerationData, ToStringGenerationData, ToStringStyle};
use jgen_core::source::field_access;
use minijinja::context;

use super::render;

/// Body of `toString()` built on `ToStringBuilder`.
///
/// The default style uses the single-argument constructor, so `ToStringStyle`
/// is only referenced (and imported) for the other styles.
pub fn emit_to_string(data: &ToStringGenerationData) -> Result<String, RenderError> {
    let getters = data.use_getters_instead_of_fields();
    let fields: Vec<minijinja::Value> = data
        .checked_fields()
        .iter()
        .map(|field| {
            context! {
                name => field.name.clone(),
                access => field_access(field, None, getters),
            }
        })
        .collect();
    let style = match data.style() {
        ToStringStyle::Default => None,
        style => Some(style.constant()),
    };

    render(
        "to_string.java.j2",
        include_str!("../../templates/to_string.java.j2"),
        context! {
            style => style,
            append_super => data.append_super(),
            fields => fields,
        },
    )
}
