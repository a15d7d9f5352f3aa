use crate::binding::resolve::{DataModel, resolve};
use crate::binding::scalar;
use crate::eval::children::{ChildSlot, explicit_list};
use crate::eval::index::GraphIndex;
use crate::registry::{Dispatch, Registry};
use crate::render::element::{Diagnostic, Element};
use crate::scene::model::Component;
use crate::session::action::{Action, ActionHandler, EventBinding};
use serde_json::{Map, Value};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub(crate) max_depth: usize,
    pub(crate) detect_cycles: bool,
}

/// Recursive dispatcher for one render pass.
///
/// Holds the ids currently being rendered on the active branch; nothing else is mutable.
pub(crate) struct Interpreter<'a> {
    index: &'a GraphIndex<'a>,
    registry: &'a Registry,
    data: &'a DataModel,
    actions: Option<&'a dyn ActionHandler>,
    limits: Limits,
    chain: RefCell<Vec<String>>,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(
        index: &'a GraphIndex<'a>,
        registry: &'a Registry,
        data: &'a DataModel,
        actions: Option<&'a dyn ActionHandler>,
        limits: Limits,
    ) -> Self {
        Self {
            index,
            registry,
            data,
            actions,
            limits,
            chain: RefCell::new(Vec::new()),
        }
    }

    /// Render the node `id`. Broken references come back as diagnostics, never as errors.
    pub(crate) fn render(&self, id: &str) -> Element {
        let depth = self.chain.borrow().len();
        if depth >= self.limits.max_depth {
            tracing::debug!(id, depth, "nesting limit reached");
            return Diagnostic::too_deep(id, depth).into();
        }

        let Some(node) = self.index.get(id) else {
            tracing::debug!(id, "unknown component id");
            return Diagnostic::unknown_component(id).into();
        };

        if self.limits.detect_cycles && self.chain.borrow().iter().any(|a| a == id) {
            tracing::debug!(id, depth, "reference cycle");
            return Diagnostic::cycle(id).into();
        }

        let (type_name, props) = match node.component() {
            Component::Typed { type_name, props } => (type_name.as_str(), props),
            Component::Empty => {
                tracing::debug!(id, "empty component");
                return Diagnostic::empty_component(id).into();
            }
        };

        let renderer = match self.registry.dispatch(type_name) {
            Dispatch::Found(r) => r,
            Dispatch::Unregistered => {
                tracing::debug!(id, type_name, "unsupported type");
                return Diagnostic::unsupported_type(id, type_name).into();
            }
        };

        let _frame = ChainFrame::push(&self.chain, node.id());
        let cx = RenderCx {
            interp: self,
            id: node.id(),
            type_name,
            props,
        };
        let mut out = renderer.render(&cx);
        if let Element::Widget(w) = &mut out {
            w.key.get_or_insert_with(|| node.id().to_owned());
        }
        out
    }
}

struct ChainFrame<'c> {
    chain: &'c RefCell<Vec<String>>,
}

impl<'c> ChainFrame<'c> {
    fn push(chain: &'c RefCell<Vec<String>>, id: &str) -> Self {
        chain.borrow_mut().push(id.to_owned());
        Self { chain }
    }
}

impl Drop for ChainFrame<'_> {
    fn drop(&mut self) {
        self.chain.borrow_mut().pop();
    }
}

/// Everything a renderer may use while producing one node.
///
/// Props and the data model are borrowed for the whole pass; [`RenderCx::render`] re-enters the
/// interpreter for ids the renderer owns.
pub struct RenderCx<'a> {
    interp: &'a Interpreter<'a>,
    id: &'a str,
    type_name: &'a str,
    props: &'a Value,
}

impl<'a> RenderCx<'a> {
    /// Id of the node being rendered.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Type name the node was dispatched on.
    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// Raw props.
    pub fn props(&self) -> &'a Value {
        self.props
    }

    /// Raw prop by key.
    pub fn prop(&self, key: &str) -> Option<&'a Value> {
        self.props.get(key)
    }

    /// Raw string prop (not a binding).
    pub fn prop_str(&self, key: &str) -> Option<&'a str> {
        self.prop(key).and_then(Value::as_str)
    }

    /// Raw numeric prop; numeric strings are accepted.
    pub fn prop_f64(&self, key: &str) -> Option<f64> {
        scalar::as_f64(self.prop(key))
    }

    /// Raw prop under loose truthiness.
    pub fn prop_flag(&self, key: &str) -> bool {
        scalar::is_truthy(self.prop(key))
    }

    /// The data model of this pass.
    pub fn data_model(&self) -> &'a DataModel {
        self.interp.data
    }

    /// Resolve any bound value against the data model.
    pub fn resolve(&self, raw: Option<&'a Value>) -> Option<&'a Value> {
        resolve(raw, self.interp.data)
    }

    /// Resolve the prop `key`.
    pub fn resolve_prop(&self, key: &str) -> Option<&'a Value> {
        self.resolve(self.prop(key))
    }

    /// Resolve the prop `key` to text, defaulting to the empty string.
    pub fn resolve_string(&self, key: &str) -> String {
        scalar::display_string(self.resolve_prop(key))
    }

    /// Resolve the prop `key` to non-empty text.
    pub fn resolve_text(&self, key: &str) -> Option<String> {
        scalar::non_empty_string(self.resolve_prop(key))
    }

    /// Resolve the prop `key` to a number.
    pub fn resolve_f64(&self, key: &str) -> Option<f64> {
        scalar::as_f64(self.resolve_prop(key))
    }

    /// Resolve the prop `key` under loose truthiness.
    pub fn resolve_flag(&self, key: &str) -> bool {
        scalar::is_truthy(self.resolve_prop(key))
    }

    /// Render another node of the graph.
    pub fn render(&self, id: &str) -> Element {
        self.interp.render(id)
    }

    /// Render the node a raw reference points at; anything but a string renders nothing.
    pub fn render_ref(&self, raw: Option<&Value>) -> Element {
        match raw.and_then(Value::as_str) {
            Some(id) => self.render(id),
            None => Element::Nothing,
        }
    }

    /// Render the single child referenced by prop `key`.
    pub fn render_child(&self, key: &str) -> Element {
        self.render_ref(self.prop(key))
    }

    /// Render `children.explicitList`, in order.
    pub fn render_children(&self) -> Vec<Element> {
        explicit_list(self.prop("children"))
            .into_iter()
            .map(|id| self.render(id))
            .collect()
    }

    /// Render every id referenced through `slot`, in order.
    pub fn render_slot(&self, slot: ChildSlot) -> Vec<Element> {
        slot.ids(self.props)
            .into_iter()
            .map(|id| self.render(id))
            .collect()
    }

    /// Whether the host supplied an action handler for this pass.
    pub fn has_action_handler(&self) -> bool {
        self.interp.actions.is_some()
    }

    /// Bind a user event to the action described by `raw` (`{ name, context }`).
    ///
    /// Yields nothing when the prop is malformed or the host has no handler.
    pub fn bind_action(&self, raw: Option<&Value>) -> Option<EventBinding> {
        if !self.has_action_handler() {
            return None;
        }
        Action::from_prop(raw).map(|action| EventBinding { action })
    }

    /// Notify the host handler right away, if there is one.
    pub fn dispatch_action(&self, name: &str, context: &Map<String, Value>) {
        if let Some(h) = self.interp.actions {
            h.on_action(name, context);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/interpreter.rs"]
mod tests;
