use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host-side receiver for user-triggered actions.
///
/// This is a one-way notification out of the rendered tree; nothing flows back into it.
pub trait ActionHandler {
    /// Called with the action name and its context mapping.
    fn on_action(&self, name: &str, context: &Map<String, Value>);
}

impl<F> ActionHandler for F
where
    F: Fn(&str, &Map<String, Value>),
{
    fn on_action(&self, name: &str, context: &Map<String, Value>) {
        self(name, context)
    }
}

/// Declarative action, as carried by an `action` prop: `{ "name": ..., "context": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action name reported to the host.
    pub name: String,
    /// Free-form context; empty when absent.
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl Action {
    /// Decode an `action` prop. A missing or blank name yields `None`; a non-object context is
    /// treated as empty.
    pub fn from_prop(raw: Option<&Value>) -> Option<Self> {
        let obj = raw?.as_object()?;
        let name = obj.get("name")?.as_str().filter(|s| !s.is_empty())?;
        let context = obj
            .get("context")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Some(Self {
            name: name.to_owned(),
            context,
        })
    }
}

/// An event on a rendered widget bound to a host action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBinding {
    /// Action fired when the event occurs.
    pub action: Action,
}

impl EventBinding {
    /// Notify `handler`.
    pub fn fire(&self, handler: &dyn ActionHandler) {
        tracing::debug!(action = %self.action.name, "firing action");
        handler.on_action(&self.action.name, &self.action.context);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/action.rs"]
mod tests;
