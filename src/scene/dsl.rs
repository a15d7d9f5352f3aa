use crate::foundation::error::{UiGraphError, UiGraphResult};
use crate::scene::graph::Graph;
use crate::scene::model::Node;
use serde_json::{Value, json};
use std::collections::HashSet;

/// Builder for [`Graph`](crate::Graph).
///
/// Unlike wire input, a built graph is required to have unique ids.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed node.
    pub fn node(mut self, id: impl Into<String>, type_name: impl Into<String>, props: Value) -> Self {
        self.nodes.push(Node::new(id, type_name, props));
        self
    }

    /// Append a node whose component mapping is empty.
    pub fn empty(mut self, id: impl Into<String>) -> Self {
        self.nodes.push(Node::empty(id));
        self
    }

    /// Append an already constructed node.
    pub fn push(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Check id uniqueness and produce the graph.
    pub fn build(self) -> UiGraphResult<Graph> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for n in &self.nodes {
            if !seen.insert(n.id()) {
                return Err(UiGraphError::validation(format!(
                    "duplicate node id '{}'",
                    n.id()
                )));
            }
        }
        Ok(Graph::new(self.nodes))
    }
}

/// `{ "explicitList": [...] }` children reference.
pub fn children(ids: &[&str]) -> Value {
    json!({ "explicitList": ids })
}

/// `{ "literalString": s }` bound value.
pub fn literal_string(s: impl Into<String>) -> Value {
    json!({ "literalString": s.into() })
}

/// `{ "literalNumber": n }` bound value.
pub fn literal_number(n: f64) -> Value {
    json!({ "literalNumber": n })
}

/// `{ "literalBoolean": b }` bound value.
pub fn literal_boolean(b: bool) -> Value {
    json!({ "literalBoolean": b })
}

/// `{ "path": p }` bound value.
pub fn path(p: impl Into<String>) -> Value {
    json!({ "path": p.into() })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
