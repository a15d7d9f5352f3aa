use crate::binding::resolve::DataModel;
use crate::catalog::standard_registry;
use crate::eval::index::GraphIndex;
use crate::eval::interpreter::{Interpreter, Limits};
use crate::registry::Registry;
use crate::render::element::{Element, Placeholder};
use crate::scene::graph::Graph;
use crate::scene::model::Node;
use crate::session::action::{ActionHandler, EventBinding};

/// Options controlling one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSessionOpts {
    /// Maximum nesting of id references; deeper references render a "too deep" diagnostic.
    pub max_depth: usize,
    /// Render a "cycle" diagnostic when an id is re-entered below itself.
    pub detect_cycles: bool,
    /// When a requested root id is missing, render its diagnostic instead of falling back to the
    /// first node.
    pub strict_root: bool,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            max_depth: 64,
            detect_cycles: true,
            strict_root: false,
        }
    }
}

/// Façade tying one graph and data model to a registry.
///
/// The id index is built once on construction; each [`RenderSession::render`] is a pure
/// projection of `(graph, root, data model)`.
pub struct RenderSession<'a> {
    nodes: &'a [Node],
    index: GraphIndex<'a>,
    data: &'a DataModel,
    registry: &'a Registry,
    actions: Option<&'a dyn ActionHandler>,
    opts: RenderSessionOpts,
}

impl<'a> RenderSession<'a> {
    /// Session over `nodes` using the standard registry and default options.
    pub fn new(nodes: &'a [Node], data: &'a DataModel) -> Self {
        Self {
            nodes,
            index: GraphIndex::build(nodes),
            data,
            registry: standard_registry(),
            actions: None,
            opts: RenderSessionOpts::default(),
        }
    }

    /// Session over a parsed [`Graph`].
    pub fn for_graph(graph: &'a Graph, data: &'a DataModel) -> Self {
        Self::new(graph.nodes(), data)
    }

    /// Dispatch through `registry` instead of the standard one.
    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Let renderers bind user events to `handler`.
    pub fn with_action_handler(mut self, handler: &'a dyn ActionHandler) -> Self {
        self.actions = Some(handler);
        self
    }

    /// Replace the pass options.
    pub fn with_opts(mut self, opts: RenderSessionOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Options in effect.
    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Root id a render with `requested` would start from, or `None` for an empty graph.
    pub fn effective_root<'r>(&self, requested: Option<&'r str>) -> Option<&'r str>
    where
        'a: 'r,
    {
        match requested {
            Some(id) if self.index.contains(id) => Some(id),
            Some(id) if self.opts.strict_root => Some(id),
            Some(id) => {
                let first = self.index.first_id();
                tracing::debug!(requested = id, fallback = ?first, "root id not in graph");
                first
            }
            None => self.index.first_id(),
        }
    }

    /// Render the tree rooted at `root_id` (or the first node).
    ///
    /// Never fails: an empty graph renders the "nothing generated" placeholder and broken
    /// references render inline diagnostics.
    #[tracing::instrument(skip(self), fields(nodes = self.nodes.len(), ids = self.index.len()))]
    pub fn render(&self, root_id: Option<&str>) -> Element {
        if self.nodes.is_empty() {
            return Element::Placeholder(Placeholder::nothing_generated());
        }
        let Some(root) = self.effective_root(root_id) else {
            return Element::Placeholder(Placeholder::nothing_generated());
        };
        let limits = Limits {
            max_depth: self.opts.max_depth,
            detect_cycles: self.opts.detect_cycles,
        };
        Interpreter::new(&self.index, self.registry, self.data, self.actions, limits).render(root)
    }

    /// Forward a bound event to the session's handler. Returns `false` when there is none.
    pub fn fire(&self, binding: &EventBinding) -> bool {
        match self.actions {
            Some(h) => {
                binding.fire(h);
                true
            }
            None => false,
        }
    }
}

/// One-shot render with the standard registry and default options.
pub fn render_graph(
    nodes: &[Node],
    root_id: Option<&str>,
    data: &DataModel,
    handler: Option<&dyn ActionHandler>,
) -> Element {
    let session = RenderSession::new(nodes, data);
    match handler {
        Some(h) => session.with_action_handler(h).render(root_id),
        None => session.render(root_id),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
