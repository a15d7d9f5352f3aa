use crate::foundation::naming::is_attr_name;
use crate::render::element::{Diagnostic, DiagnosticKind, Element, Placeholder, Widget};
use serde_json::Value;
use std::fmt::Write as _;

const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "meta", "source"];

/// Serialise a visual tree to HTML.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(e: &Element, out: &mut String) {
    match e {
        Element::Widget(w) => write_widget(w, out),
        Element::Text { text } => push_escaped(text, out),
        Element::Fragment { children } => children.iter().for_each(|c| write_element(c, out)),
        Element::Diagnostic(d) => write_diagnostic(d, out),
        Element::Placeholder(p) => write_placeholder(p, out),
        Element::Nothing => {}
    }
}

fn write_widget(w: &Widget, out: &mut String) {
    out.push('<');
    out.push_str(&w.tag);
    if let Some(key) = &w.key {
        write_attr("data-key", key, out);
    }
    for (name, value) in &w.attrs {
        if !is_attr_name(name) {
            tracing::warn!(tag = %w.tag, attr = %name, "dropping invalid attribute name");
            continue;
        }
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            Value::String(s) => write_attr(name, s, out),
            other => write_attr(name, &other.to_string(), out),
        }
    }
    for (event, binding) in &w.events {
        let name = format!("data-on-{event}");
        if !is_attr_name(&name) {
            tracing::warn!(tag = %w.tag, %event, "dropping invalid event name");
            continue;
        }
        write_attr(&name, &binding.action.name, out);
    }
    out.push('>');

    if VOID_TAGS.contains(&w.tag.as_str()) {
        return;
    }
    for c in &w.children {
        write_element(c, out);
    }
    let _ = write!(out, "</{}>", w.tag);
}

fn write_diagnostic(d: &Diagnostic, out: &mut String) {
    let modifier = match d.kind {
        DiagnosticKind::UnknownComponent => "unknown-component",
        DiagnosticKind::EmptyComponent => "empty-component",
        DiagnosticKind::UnsupportedType => "unsupported-type",
        DiagnosticKind::Cycle => "cycle",
        DiagnosticKind::TooDeep => "too-deep",
    };
    out.push_str("<div");
    write_attr(
        "class",
        &format!("uigraph-diagnostic uigraph-diagnostic--{modifier}"),
        out,
    );
    write_attr("data-id", &d.id, out);
    out.push('>');
    push_escaped(&d.message(), out);
    out.push_str("</div>");
}

fn write_placeholder(p: &Placeholder, out: &mut String) {
    out.push_str("<div class=\"uigraph-placeholder\"><p class=\"uigraph-placeholder__title\">");
    push_escaped(&p.title, out);
    out.push_str("</p><p class=\"uigraph-placeholder__hint\">");
    push_escaped(&p.hint, out);
    out.push_str("</p></div>");
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(value, out);
    out.push('"');
}

fn push_escaped(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
