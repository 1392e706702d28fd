use serde::Serialize;
use tera::{Context, Tera};

use crate::error::WebError;

pub const LIST_TEMPLATE: &str = "list.html";
pub const FORM_TEMPLATE: &str = "new_assessment.html";

/// Compile the embedded page templates. Names end in `.html`, so Tera
/// autoescapes every interpolated value.
pub fn templates() -> Result<Tera, WebError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        (LIST_TEMPLATE, include_str!("../templates/list.html")),
        (FORM_TEMPLATE, include_str!("../templates/new_assessment.html")),
    ])
    .map_err(|e| WebError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

/// Render a page template with a serializable view model as its context.
pub fn render_page<T: Serialize>(
    tera: &Tera,
    template_name: &str,
    page: &T,
) -> Result<String, WebError> {
    let context =
        Context::from_serialize(page).map_err(|e| WebError::TemplateRender(e.to_string()))?;
    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
