use tera::Tera;

use crate::error::AppError;

/// Template name of the home page
pub const INDEX_TEMPLATE: &str = "index.html";

/// Initialize the Tera template engine.
///
/// Templates are compiled into the binary so the container image needs no
/// template directory. `.html` templates are auto-escaped.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}
