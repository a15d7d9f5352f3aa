//! Standard component catalog.
//!
//! Curated renderers are registered first, one module per family. A generic pass then wraps
//! widget-library primitives, skipping every name a curated renderer already claims.

pub(crate) mod disclosure;
pub(crate) mod display;
pub(crate) mod generic;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod meta;

use crate::binding::scalar;
use crate::eval::children::{CONVENTIONAL_SLOTS, ChildSlot};
use crate::eval::interpreter::RenderCx;
use crate::registry::{Registry, Renderer};
use crate::render::element::{Element, Widget};
use serde_json::Value;
use std::sync::OnceLock;

pub(crate) type RenderFn = fn(&RenderCx<'_>) -> Element;

/// Hand-written renderer plus the props it reads child ids from.
pub(crate) struct Curated {
    render: RenderFn,
    slots: &'static [ChildSlot],
}

impl Renderer for Curated {
    fn render(&self, cx: &RenderCx<'_>) -> Element {
        (self.render)(cx)
    }

    fn child_slots(&self) -> &'static [ChildSlot] {
        self.slots
    }
}

fn curated(reg: &mut Registry, name: &str, render: RenderFn, slots: &'static [ChildSlot]) {
    reg.register(name, Curated { render, slots });
}

fn conventional(reg: &mut Registry, name: &str, render: RenderFn) {
    curated(reg, name, render, CONVENTIONAL_SLOTS);
}

fn leaf(reg: &mut Registry, name: &str, render: RenderFn) {
    curated(reg, name, render, &[]);
}

/// Build the standard registry: curated renderers, then generic pass-through wrappers.
///
/// Pure; every call returns a fresh registry. Most hosts want [`standard_registry`].
pub fn build_standard_registry() -> Registry {
    let mut reg = Registry::new();
    layout::register(&mut reg);
    display::register(&mut reg);
    input::register(&mut reg);
    disclosure::register(&mut reg);
    let curated = reg.len();
    let generic = generic::register(&mut reg);
    tracing::debug!(curated, generic, total = reg.len(), "standard registry built");
    reg
}

/// Process-wide standard registry, built on first use and read-only afterwards.
pub fn standard_registry() -> &'static Registry {
    static STANDARD: OnceLock<Registry> = OnceLock::new();
    STANDARD.get_or_init(build_standard_registry)
}

/// Widget tagged with a `data-slot` part name.
fn slot(tag: &str, name: &str) -> Widget {
    Widget::new(tag).attr("data-slot", name)
}

/// `className` passthrough.
fn extra_class<'a>(cx: &RenderCx<'a>) -> &'a str {
    cx.prop_str("className").unwrap_or_default()
}

/// Raw prop as text, `default` when absent or `null` (`??` semantics).
fn raw_or(cx: &RenderCx<'_>, key: &str, default: &str) -> String {
    match cx.prop(key) {
        None | Some(Value::Null) => default.to_owned(),
        v => scalar::display_string(v),
    }
}

/// Raw prop as text, `default` when falsy (`||` semantics).
fn raw_truthy_or(cx: &RenderCx<'_>, key: &str, default: &str) -> String {
    scalar::non_empty_string(cx.prop(key)).unwrap_or_else(|| default.to_owned())
}

/// `w-1/3`-style sizing utility from a raw prop.
fn size_class(cx: &RenderCx<'_>, prefix: &str, key: &str) -> Option<String> {
    scalar::non_empty_string(cx.prop(key)).map(|v| format!("{prefix}-{v}"))
}

/// Inline padding on the 4px grid.
fn padding_style(cx: &RenderCx<'_>) -> Option<String> {
    cx.prop_f64("padding")
        .filter(|p| *p != 0.0)
        .map(|p| format!("padding: {}px", number(p * 4.0)))
}

/// JSON number, integral when possible.
fn number(v: f64) -> Value {
    if v.fract() == 0.0 && v.abs() < 9.0e15 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Prefix `control` with a label when one is given.
fn labelled(label: Option<String>, control: Widget) -> Element {
    match label {
        Some(text) => Widget::new("div")
            .class("space-y-2")
            .child(Widget::new("label").text(text))
            .child(control)
            .into(),
        None => control.into(),
    }
}

/// `{ value, label }` option objects, or bare scalars standing for both.
fn option_pair(opt: &Value) -> (String, String) {
    let or_self = || scalar::display_string(Some(opt));
    let value = scalar::non_empty_string(opt.get("value")).unwrap_or_else(or_self);
    let label = scalar::non_empty_string(opt.get("label")).unwrap_or_else(or_self);
    (value, label)
}

/// Items of an array prop.
fn items<'a>(cx: &RenderCx<'a>, key: &str) -> &'a [Value] {
    cx.prop(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/catalog.rs"]
mod tests;
