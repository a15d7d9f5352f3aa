use crate::foundation::error::{UiGraphError, UiGraphResult};
use crate::session::action::{ActionHandler, EventBinding};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One node of the rendered visual tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    /// A concrete widget produced by a render function.
    Widget(Widget),
    /// Bare text content.
    Text {
        /// Text content, unescaped.
        text: String,
    },
    /// Ordered children without a wrapping widget.
    Fragment {
        /// Child elements.
        children: Vec<Element>,
    },
    /// Inline soft-failure marker for a malformed reference.
    Diagnostic(Diagnostic),
    /// Fixed placeholder shown when there is nothing to render.
    Placeholder(Placeholder),
    /// Renders to nothing.
    Nothing,
}

impl Element {
    /// Text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Fragment element.
    pub fn fragment(children: Vec<Element>) -> Self {
        Self::Fragment { children }
    }

    /// Widget payload, if this is a widget.
    pub fn as_widget(&self) -> Option<&Widget> {
        match self {
            Self::Widget(w) => Some(w),
            _ => None,
        }
    }

    /// Diagnostic payload, if this is a diagnostic.
    pub fn as_diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(d) => Some(d),
            _ => None,
        }
    }

    /// `true` for [`Element::Nothing`].
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Visit every diagnostic in the subtree, depth first.
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut out = Vec::new();
        self.collect_diagnostics(&mut out);
        out
    }

    /// Pretty-printed JSON form of the tree.
    pub fn to_json_pretty(&self) -> UiGraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| UiGraphError::serde(format!("serialize visual tree: {e}")))
    }

    fn collect_diagnostics<'a>(&'a self, out: &mut Vec<&'a Diagnostic>) {
        match self {
            Self::Diagnostic(d) => out.push(d),
            Self::Widget(w) => w.children.iter().for_each(|c| c.collect_diagnostics(out)),
            Self::Fragment { children } => children.iter().for_each(|c| c.collect_diagnostics(out)),
            Self::Text { .. } | Self::Placeholder(_) | Self::Nothing => {}
        }
    }
}

impl From<Widget> for Element {
    fn from(w: Widget) -> Self {
        Self::Widget(w)
    }
}

impl From<Diagnostic> for Element {
    fn from(d: Diagnostic) -> Self {
        Self::Diagnostic(d)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nothing, Into::into)
    }
}

/// A concrete widget: an HTML-like tag with attributes, children and event bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Widget {
    /// Element tag (`div`, `button`, `h1`, ...).
    pub tag: String,
    /// Id of the graph node that produced this widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Attributes, sorted by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
    /// Child elements in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    /// User events bound to host actions, keyed by event name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, EventBinding>,
}

impl Widget {
    /// Widget with the given tag and nothing else.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the `class` attribute; blank class lists are skipped.
    pub fn class(self, class: impl AsRef<str>) -> Self {
        let joined = class.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        if joined.is_empty() {
            return self;
        }
        self.attr("class", Value::String(joined))
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when `value` is `Some`.
    pub fn attr_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Set a boolean attribute to `true` when `on`; otherwise leave it unset.
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on { self.attr(name, true) } else { self }
    }

    /// Append a child; [`Element::Nothing`] is dropped.
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        let child = child.into();
        if !child.is_nothing() {
            self.children.push(child);
        }
        self
    }

    /// Append several children.
    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, |w, c| w.child(c))
    }

    /// Append a text child; empty text is dropped.
    pub fn text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        self.child(Element::text(text))
    }

    /// Bind a user event, if a binding was produced.
    pub fn on(mut self, event: impl Into<String>, binding: Option<EventBinding>) -> Self {
        if let Some(b) = binding {
            self.events.insert(event.into(), b);
        }
        self
    }

    /// Fire the action bound to `event`, if any. Returns whether a binding existed.
    pub fn fire(&self, event: &str, handler: &dyn ActionHandler) -> bool {
        match self.events.get(event) {
            Some(b) => {
                b.fire(handler);
                true
            }
            None => false,
        }
    }

    /// Attribute lookup.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Concatenated text of all descendant text elements.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        push_text(&self.children, &mut out);
        out
    }
}

fn push_text(children: &[Element], out: &mut String) {
    for c in children {
        match c {
            Element::Text { text } => out.push_str(text),
            Element::Widget(w) => push_text(&w.children, out),
            Element::Fragment { children } => push_text(children, out),
            _ => {}
        }
    }
}

/// Reason a reference could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The id is not present in the graph.
    UnknownComponent,
    /// The node's component mapping has no entries.
    EmptyComponent,
    /// No renderer is registered for the node's type.
    UnsupportedType,
    /// The id is already being rendered further up the same branch.
    Cycle,
    /// The configured nesting limit was reached.
    TooDeep,
}

/// Inline diagnostic carrying enough context to debug the producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Requested node id.
    pub id: String,
    /// Offending type name, for [`DiagnosticKind::UnsupportedType`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Nesting depth, for [`DiagnosticKind::TooDeep`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl Diagnostic {
    pub(crate) fn unknown_component(id: &str) -> Self {
        Self::new(DiagnosticKind::UnknownComponent, id)
    }

    pub(crate) fn empty_component(id: &str) -> Self {
        Self::new(DiagnosticKind::EmptyComponent, id)
    }

    pub(crate) fn unsupported_type(id: &str, type_name: &str) -> Self {
        Self {
            type_name: Some(type_name.to_owned()),
            ..Self::new(DiagnosticKind::UnsupportedType, id)
        }
    }

    pub(crate) fn cycle(id: &str) -> Self {
        Self::new(DiagnosticKind::Cycle, id)
    }

    pub(crate) fn too_deep(id: &str, depth: usize) -> Self {
        Self {
            depth: Some(depth),
            ..Self::new(DiagnosticKind::TooDeep, id)
        }
    }

    fn new(kind: DiagnosticKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_owned(),
            type_name: None,
            depth: None,
        }
    }

    /// Human-readable one-line message.
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::UnknownComponent => format!("Unknown component: {}", self.id),
            DiagnosticKind::EmptyComponent => format!("Empty component: {}", self.id),
            DiagnosticKind::UnsupportedType => format!(
                "Unsupported type: {}",
                self.type_name.as_deref().unwrap_or_default()
            ),
            DiagnosticKind::Cycle => format!("Reference cycle at: {}", self.id),
            DiagnosticKind::TooDeep => format!(
                "Nesting too deep at: {} (depth {})",
                self.id,
                self.depth.unwrap_or_default()
            ),
        }
    }
}

/// Fixed empty-state content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Headline.
    pub title: String,
    /// Secondary hint line.
    pub hint: String,
}

impl Placeholder {
    /// Shown when the graph has no nodes.
    pub fn nothing_generated() -> Self {
        Self {
            title: "No UI Generated Yet".to_owned(),
            hint: "Describe your UI in the chat to get started".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/element.rs"]
mod tests;
