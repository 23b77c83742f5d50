// src/presentation/http/templates.rs
use axum::response::Html;
use serde::Serialize;
use std::path::Path;
use tera::Tera;
use thiserror::Error;

/// Templates every deployment must provide; checked once at startup so a
/// missing file fails the boot instead of the first request.
const REQUIRED_TEMPLATES: [&str; 4] = [
    "index.html",
    "post-details.html",
    "posts-list.html",
    "contacts.html",
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to load templates: {0}")]
    Load(#[from] tera::Error),
    #[error("missing template: {0}")]
    Missing(String),
}

pub fn load_templates(dir: &Path) -> Result<Tera, TemplateError> {
    let pattern = format!("{}/**/*.html", dir.display());
    let tera = Tera::new(&pattern)?;

    for name in REQUIRED_TEMPLATES {
        if !tera.get_template_names().any(|n| n == name) {
            return Err(TemplateError::Missing(name.into()));
        }
    }

    Ok(tera)
}

pub fn render_page<T: Serialize>(
    engine: &Tera,
    template: &str,
    context: &T,
) -> Result<Html<String>, tera::Error> {
    let context = tera::Context::from_serialize(context)?;
    engine.render(template, &context).map(Html)
}
