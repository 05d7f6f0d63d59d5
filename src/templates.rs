//! Embedded HTML templates
//!
//! Templates live in `templates/` and are compiled into the binary. Names
//! ending in `.html` are auto-escaped.

use crate::error::Result;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(load_template);
    env
});

fn load_template(name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    let source = match name {
        "layout.html" => include_str!("../templates/layout.html"),
        "pagination.html" => include_str!("../templates/pagination.html"),
        "listings.html" => include_str!("../templates/listings.html"),
        "error.html" => include_str!("../templates/error.html"),
        _ => return Ok(None),
    };
    Ok(Some(source.to_string()))
}

/// Render a named template with a serializable context
pub fn render_template<T: Serialize>(name: &str, context: T) -> Result<String> {
    let template = TEMPLATES.get_template(name)?;
    let output = template.render(Value::from_serialize(&context))?;
    Ok(output)
}
