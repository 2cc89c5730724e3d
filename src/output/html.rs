//! Annotated-source document assembly.
//!
//! Files, then functions in first-seen order, then each function's versions
//! in compilation order. Only the newest version is expanded.

use crate::model::{Function, FunctionId, Model};
use crate::render::{escape_attr, escape_html, render_version};
use log::debug;

const STYLE: &str = include_str!("../../assets/style.css");
const SCRIPT: &str = include_str!("../../assets/script.js");

/// Render the whole model into one self-contained HTML document
pub fn render_document(model: &Model) -> String {
    let mut html = format!(
        r#"<meta charset="UTF-8"><style>{}</style><script>{}</script>"#,
        STYLE, SCRIPT
    );

    for (_, file) in model.files() {
        debug!("Rendering {} ({} functions)", file.path, file.functions.len());

        html.push_str(&format!(
            r#"<div class="file-item"><div class="file-name toggle-next">{}</div><div class="fn-names">"#,
            escape_html(&file.path)
        ));
        for id in &file.functions {
            html.push_str(&render_function(model, *id));
        }
        html.push_str("</div></div>");
    }

    html
}

/// Markup for one function and all its versions
pub fn render_function(model: &Model, id: FunctionId) -> String {
    let function = model.function(id);
    let name = escape_attr(&function.name);

    let mut html = format!(
        r##"<div class="{}"><a class="fn-name" href="#{name}" id="{name}">{}:</a><div class="fn-versions">"##,
        item_class(function),
        escape_html(&function.name)
    );

    let count = function.versions.len();
    for (i, version_id) in function.versions.iter().enumerate() {
        html.push_str(r#"<div class="recompile">"#);
        if count > 1 {
            html.push_str(r#"<span class="recompile-title toggle-next">~recompile~</span>"#);
        }

        let visibility = if i + 1 == count { "" } else { "hidden" };
        html.push_str(&format!(
            r#"<div class="{}">{}</div>"#,
            visibility,
            render_version(model, *version_id)
        ));

        for reason in &model.version(*version_id).deopts {
            html.push_str(&format!(
                r#"<div class="deopt">Deopt: {}</div>"#,
                escape_html(reason)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    html
}

fn item_class(function: &Function) -> &'static str {
    if function.has_deopted {
        "fn-item fn-deopt"
    } else {
        "fn-item"
    }
}
