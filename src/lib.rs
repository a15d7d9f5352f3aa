//! uigraph renders flat, model-generated UI component graphs into a visual tree.
//!
//! A graph is a list of nodes, each with a unique id and a single-entry component mapping from a
//! type name to props. Nodes reference each other by id; props may be literals or bindings into an
//! external data model. Rendering never fails: malformed references degrade to inline
//! [`Diagnostic`] elements so the rest of the tree still shows.
//!
//! - Decode a [`Graph`] (optionally checking it with [`validate_graph`])
//! - Create a [`RenderSession`] over a [`Registry`] (usually [`standard_registry`])
//! - Render to an [`Element`] tree, project it with [`to_html`], fire bound actions back to the host
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod binding;
pub(crate) mod catalog;
pub(crate) mod eval;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod schema;
pub(crate) mod session;

/// Helpers for building graphs in code.
pub mod dsl {
    pub use crate::scene::dsl::{
        GraphBuilder, children, literal_boolean, literal_number, literal_string, path,
    };
}

pub use crate::foundation::error::{UiGraphError, UiGraphResult};
pub use crate::foundation::naming::derive_aliases;

pub use crate::binding::resolve::{BoundValue, DataModel, lookup_path, resolve};
pub use crate::binding::scalar::{as_f64, display_string, is_truthy, non_empty_string};
pub use crate::catalog::meta::{CATALOG, CatalogEntry, catalog_entry, catalog_for_prompt};
pub use crate::catalog::{build_standard_registry, standard_registry};
pub use crate::eval::children::{CONVENTIONAL_SLOTS, ChildSlot, child_ids, explicit_list};
pub use crate::eval::interpreter::RenderCx;
pub use crate::registry::{Dispatch, Registry, Renderer, SharedRenderer};
pub use crate::render::element::{Diagnostic, DiagnosticKind, Element, Placeholder, Widget};
pub use crate::render::html::to_html;
pub use crate::scene::dsl::GraphBuilder;
pub use crate::scene::graph::Graph;
pub use crate::scene::model::{Component, Node};
pub use crate::schema::validate::{
    SchemaError, SchemaErrors, SchemaPathElem, validate_graph, validate_graph_json,
    validate_graph_with,
};
pub use crate::session::action::{Action, ActionHandler, EventBinding};
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, render_graph};
