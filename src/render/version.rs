//! Annotated markup for one compiled version.

use super::find_end::find_end_in;
use super::splice::{apply_replacements_in, Replacement};
use super::units::Utf16Index;
use super::{escape_attr, escape_html};
use crate::model::{Model, RuntimeCall, VersionId};

/// Render a version's source with escapes, inline copies and runtime calls
/// marked up in place
///
/// Inline copies are rendered recursively against their own source before
/// being spliced into this one, so offsets never refer to rewritten text.
pub fn render_version(model: &Model, id: VersionId) -> String {
    let version = model.version(id);
    let index = Utf16Index::new(&version.code);
    let mut replacements = Vec::new();

    // Escapes are registered first so they win ties with wider spans
    let mut unit = 0;
    for c in version.code.chars() {
        match c {
            '<' => replacements.push(Replacement::new(unit, unit + 1, "&lt;")),
            '>' => replacements.push(Replacement::new(unit, unit + 1, "&gt;")),
            _ => {}
        }
        unit += c.len_utf16();
    }

    for site in &version.inlines {
        let end = find_end_in(&index, site.offset);
        let sub = index.slice(site.offset, end);
        let indent = " ".repeat(index.column(end));

        replacements.push(Replacement::new(
            site.offset,
            end,
            format!(
                r#"<span class="inline toggle-next" data-title="Show inlined">{}</span><span class="inline-code hidden">{}{}</span>"#,
                escape_html(sub),
                render_version(model, site.child),
                indent
            ),
        ));
    }

    for call in &version.runtime_calls {
        let end = find_end_in(&index, call.offset);
        let sub = index.slice(call.offset, end);
        replacements.push(Replacement::new(
            call.offset,
            end,
            runtime_markup(model, call, sub),
        ));
    }

    format!(
        r#"<div class="code">{}</div>"#,
        apply_replacements_in(&index, replacements)
    )
}

fn runtime_markup(model: &Model, call: &RuntimeCall, sub: &str) -> String {
    let kind = call.kind();

    if call.is_call_descriptor() {
        if let Some(function) = model.function_by_name(sub) {
            let title = match &function.did_not_inline {
                Some(reason) => format!(
                    r#" did-not-inlined data-title="Did not inline: {}""#,
                    escape_attr(reason)
                ),
                None => String::new(),
            };
            return format!(
                r##"<a class="runtime {kind}"{title} href="#{}">{}</a>"##,
                escape_attr(sub),
                escape_html(sub)
            );
        }
    }

    format!(
        r#"<span class="runtime {kind}" data-title="{kind}">{}</span>"#,
        escape_html(sub)
    )
}
