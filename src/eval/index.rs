use crate::scene::model::Node;
use std::collections::HashMap;

/// O(1) id lookup over a node list, built once per render pass.
///
/// When an id is duplicated the last node wins.
#[derive(Debug)]
pub(crate) struct GraphIndex<'g> {
    by_id: HashMap<&'g str, &'g Node>,
    first: Option<&'g str>,
}

impl<'g> GraphIndex<'g> {
    pub(crate) fn build(nodes: &'g [Node]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for n in nodes {
            by_id.insert(n.id(), n);
        }
        Self {
            by_id,
            first: nodes.first().map(Node::id),
        }
    }

    pub(crate) fn get(&self, id: &str) -> Option<&'g Node> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Id of the first node in caller order.
    pub(crate) fn first_id(&self) -> Option<&'g str> {
        self.first
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/index.rs"]
mod tests;
