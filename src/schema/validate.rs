use crate::eval::children::{CONVENTIONAL_SLOTS, ChildSlot, child_ids};
use crate::registry::Registry;
use crate::scene::graph::Graph;
use crate::scene::model::Component;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// One step of a JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Object field.
    Field(&'static str),
    /// Array index.
    Index(usize),
}

/// A validation problem at a JSON path, displayed as `$[2].component: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Location of the problem.
    pub path: Vec<SchemaPathElem>,
    /// What is wrong there.
    pub message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    fn node(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self::at(
            &[SchemaPathElem::Index(index), SchemaPathElem::Field(field)],
            message,
        )
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// Every problem found by one validation run, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaErrors {
    /// Collected errors; never empty.
    pub errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

fn finish(errors: Vec<SchemaError>) -> Result<(), SchemaErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

/// Structural check of raw graph JSON before decoding.
///
/// The top level must be an array of objects, each with a unique non-empty string `id` and a
/// `component` object. With `require_non_empty` the graph itself, and every component mapping,
/// must be non-empty and carry a single type.
pub fn validate_graph_json(value: &Value, require_non_empty: bool) -> Result<(), SchemaErrors> {
    let Some(items) = value.as_array() else {
        return finish(vec![SchemaError::at(
            &[],
            "graph must be a JSON array of nodes",
        )]);
    };

    let mut errors = Vec::new();
    if require_non_empty && items.is_empty() {
        errors.push(SchemaError::at(&[], "graph has no nodes"));
    }

    let mut seen = HashMap::<&str, usize>::new();
    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            errors.push(SchemaError::at(
                &[SchemaPathElem::Index(i)],
                "node must be an object",
            ));
            continue;
        }

        match item.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => {
                if let Some(first) = seen.get(id) {
                    errors.push(SchemaError::node(
                        i,
                        "id",
                        format!("duplicate id '{id}' (first at $[{first}])"),
                    ));
                } else {
                    seen.insert(id, i);
                }
            }
            _ => errors.push(SchemaError::node(i, "id", "id must be a non-empty string")),
        }

        match item.get("component") {
            None | Some(Value::Null) => {
                errors.push(SchemaError::node(i, "component", "missing component object"));
            }
            Some(Value::Object(map)) => {
                if require_non_empty && map.len() != 1 {
                    errors.push(SchemaError::node(
                        i,
                        "component",
                        format!("component must have exactly one type, found {}", map.len()),
                    ));
                }
            }
            Some(_) => errors.push(SchemaError::node(
                i,
                "component",
                "component must be an object",
            )),
        }
    }

    finish(errors)
}

/// Semantic check of a decoded graph, treating `child` and `children.explicitList` as references.
///
/// Reports duplicate and blank ids, empty components, extra type keys dropped at decode time,
/// dangling references, and reference cycles.
pub fn validate_graph(graph: &Graph) -> Result<(), SchemaErrors> {
    let errors = check_graph(graph, |_| CONVENTIONAL_SLOTS);
    finish(errors)
}

/// Like [`validate_graph`], but follows each type's declared child slots and also reports types
/// `registry` cannot render.
pub fn validate_graph_with(graph: &Graph, registry: &Registry) -> Result<(), SchemaErrors> {
    let mut errors = check_graph(graph, |ty| {
        registry
            .get_renderer(ty)
            .map_or(CONVENTIONAL_SLOTS, |r| r.child_slots())
    });
    for (i, node) in graph.nodes().iter().enumerate() {
        if let Some(ty) = node.component().type_name()
            && !registry.has_renderer(ty)
        {
            errors.push(SchemaError::node(
                i,
                "component",
                format!("unsupported type '{ty}'"),
            ));
        }
    }
    finish(errors)
}

fn check_graph<F>(graph: &Graph, slots_for: F) -> Vec<SchemaError>
where
    F: Fn(&str) -> &'static [ChildSlot],
{
    let nodes = graph.nodes();
    let mut errors = Vec::new();

    // Later duplicates shadow earlier ones, matching what a render pass sees.
    let mut first_at = HashMap::<&str, usize>::new();
    let mut last_at = HashMap::<&str, usize>::new();
    for (i, node) in nodes.iter().enumerate() {
        let id = node.id();
        if id.is_empty() {
            errors.push(SchemaError::node(i, "id", "id must be a non-empty string"));
        }
        match first_at.get(id) {
            Some(first) => errors.push(SchemaError::node(
                i,
                "id",
                format!("duplicate id '{id}' (first at $[{first}])"),
            )),
            None => {
                first_at.insert(id, i);
            }
        }
        last_at.insert(id, i);
    }

    let mut edges = HashMap::<&str, Vec<&str>>::new();
    for (i, node) in nodes.iter().enumerate() {
        let id = node.id();
        match node.component() {
            Component::Empty => {
                errors.push(SchemaError::node(i, "component", "component has no type"));
            }
            Component::Typed { type_name, props } => {
                let refs = child_ids(slots_for(type_name), props);
                for r in &refs {
                    if !last_at.contains_key(r) {
                        errors.push(SchemaError::node(
                            i,
                            "component",
                            format!("'{id}' references unknown id '{r}'"),
                        ));
                    }
                }
                if last_at.get(id) == Some(&i) {
                    edges.insert(
                        id,
                        refs.into_iter().filter(|r| last_at.contains_key(r)).collect(),
                    );
                }
            }
        }
        if !node.ignored_types().is_empty() {
            errors.push(SchemaError::node(
                i,
                "component",
                format!("extra types ignored: {}", node.ignored_types().join(", ")),
            ));
        }
    }

    let order: Vec<&str> = nodes.iter().map(|n| n.id()).collect();
    for cycle in find_cycles(&order, &edges) {
        let closing = cycle[cycle.len() - 2];
        let at = last_at.get(closing).copied().unwrap_or_default();
        errors.push(SchemaError::node(
            at,
            "component",
            format!("reference cycle: {}", cycle.join(" -> ")),
        ));
    }

    errors
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Open,
    Done,
}

/// Each back edge found by an iterative DFS, as the id path from the re-entered node back to
/// itself (`a -> b -> a`).
fn find_cycles<'g>(order: &[&'g str], edges: &HashMap<&'g str, Vec<&'g str>>) -> Vec<Vec<&'g str>> {
    let mut marks = HashMap::<&str, Mark>::new();
    let mut cycles = Vec::new();

    for &start in order {
        if marks.contains_key(start) {
            continue;
        }
        marks.insert(start, Mark::Open);
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            let succ = edges.get(node).map(Vec::as_slice).unwrap_or_default();
            if top.1 >= succ.len() {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            }
            let child = succ[top.1];
            top.1 += 1;

            match marks.get(child) {
                None => {
                    marks.insert(child, Mark::Open);
                    stack.push((child, 0));
                }
                Some(Mark::Open) => {
                    let from = stack.iter().position(|(n, _)| *n == child).unwrap_or(0);
                    let mut cycle: Vec<&str> = stack[from..].iter().map(|(n, _)| *n).collect();
                    cycle.push(child);
                    cycles.push(cycle);
                }
                Some(Mark::Done) => {}
            }
        }
    }

    cycles
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
