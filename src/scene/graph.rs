use crate::foundation::error::{UiGraphError, UiGraphResult};
use crate::scene::model::Node;
use crate::schema::validate::validate_graph;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordered, flat sequence of nodes describing one screen.
///
/// Node order is observable: with no explicit root, the first node is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Wrap an already decoded node list.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Nodes in caller order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parse a graph from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> UiGraphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| UiGraphError::parse(format!("parse UI graph JSON: {e}")))
    }

    /// Parse a graph from JSON text.
    pub fn from_json_str(s: &str) -> UiGraphResult<Self> {
        serde_json::from_str(s).map_err(|e| UiGraphError::parse(format!("parse UI graph JSON: {e}")))
    }

    /// Decode a graph from an already parsed JSON value.
    pub fn from_value(v: serde_json::Value) -> UiGraphResult<Self> {
        serde_json::from_value(v)
            .map_err(|e| UiGraphError::parse(format!("decode UI graph JSON: {e}")))
    }

    /// Parse a graph from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> UiGraphResult<Self> {
        let f = File::open(path).map_err(|e| {
            UiGraphError::parse(format!("open UI graph JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse raw generative-model output.
    ///
    /// Markdown code fences are removed before parsing. An empty payload is rejected.
    pub fn from_model_output(text: &str) -> UiGraphResult<Self> {
        let clean = strip_code_fences(text);
        if clean.is_empty() {
            return Err(UiGraphError::parse("model output is empty"));
        }
        Self::from_json_str(&clean)
    }

    /// Run structural validation, collecting every problem into one error.
    pub fn validate(&self) -> UiGraphResult<()> {
        validate_graph(self)
            .map_err(|e| UiGraphError::validation(format!("UI graph validation failed: {e}")))
    }
}

impl From<Vec<Node>> for Graph {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

pub(crate) fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if let Some(after) = rest.strip_prefix("json") {
            rest = after.strip_prefix('\n').unwrap_or(after);
        }
    }
    out.push_str(rest);
    out.trim().to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
