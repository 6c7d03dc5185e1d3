pub mod compare_to;
pub mod equals_hash_code;
pub mod to_string;

use jgen_core::RenderError;
use minijinja::{Environment, Value};

/// Render one embedded template into an unindented method body.
pub(crate) fn render(name: &'static str, source: &'static str, ctx: Value) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(name, source).map_err(template_error)?;
    let tmpl = env.get_template(name).map_err(template_error)?;
    let body = tmpl.render(ctx).map_err(template_error)?;
    Ok(body.trim_end().to_string())
}

fn template_error(err: minijinja::Error) -> RenderError {
    RenderError::Template(err.to_string())
}
