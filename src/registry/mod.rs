//! Type-name to renderer mapping.
//!
//! Populated once (see [`crate::build_standard_registry`]) and read-only afterwards. Curated
//! renderers are registered with [`Registry::register`]; generic pass-through wrappers go through
//! [`Registry::register_generic`], which never displaces an existing entry.

use crate::eval::children::{CONVENTIONAL_SLOTS, ChildSlot};
use crate::eval::interpreter::RenderCx;
use crate::foundation::naming::derive_aliases;
use crate::render::element::Element;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Render capability for one component type.
pub trait Renderer: Send + Sync {
    /// Produce the visual node for the node described by `cx`.
    fn render(&self, cx: &RenderCx<'_>) -> Element;

    /// Props that hold ids of nested nodes. Used by validation; rendering asks the renderer.
    fn child_slots(&self) -> &'static [ChildSlot] {
        CONVENTIONAL_SLOTS
    }
}

impl<F> Renderer for F
where
    F: Fn(&RenderCx<'_>) -> Element + Send + Sync,
{
    fn render(&self, cx: &RenderCx<'_>) -> Element {
        self(cx)
    }
}

/// Shared handle to a registered renderer.
pub type SharedRenderer = Arc<dyn Renderer>;

/// Outcome of a registry lookup.
pub enum Dispatch<'r> {
    /// A renderer is registered for the type.
    Found(&'r dyn Renderer),
    /// Nothing is registered; the caller degrades to a diagnostic.
    Unregistered,
}

/// Mapping from type name to renderer, in registration order.
#[derive(Default, Clone)]
pub struct Registry {
    renderers: IndexMap<String, SharedRenderer>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `renderer` for `type_name`, overwriting any previous entry in place.
    pub fn register<R>(&mut self, type_name: impl Into<String>, renderer: R) -> SharedRenderer
    where
        R: Renderer + 'static,
    {
        let shared: SharedRenderer = Arc::new(renderer);
        self.register_shared(type_name, Arc::clone(&shared));
        shared
    }

    /// Register an already shared renderer, overwriting any previous entry in place.
    pub fn register_shared(&mut self, type_name: impl Into<String>, renderer: SharedRenderer) {
        self.renderers.insert(type_name.into(), renderer);
    }

    /// Register a generic wrapper under `type_name` plus its lowercase and kebab-case aliases.
    ///
    /// Skips entirely when `type_name` is already claimed, and skips each alias that is. Returns
    /// whether the primary name was registered.
    pub fn register_generic(&mut self, type_name: &str, renderer: SharedRenderer) -> bool {
        if self.has_renderer(type_name) {
            tracing::debug!(type_name, "generic renderer skipped; type already claimed");
            return false;
        }
        self.register_shared(type_name, Arc::clone(&renderer));
        for alias in derive_aliases(type_name) {
            if !self.has_renderer(&alias) {
                self.register_shared(alias, Arc::clone(&renderer));
            }
        }
        true
    }

    /// Renderer for `type_name`, if any.
    pub fn get_renderer(&self, type_name: &str) -> Option<&SharedRenderer> {
        self.renderers.get(type_name)
    }

    /// Whether `type_name` is registered.
    pub fn has_renderer(&self, type_name: &str) -> bool {
        self.renderers.contains_key(type_name)
    }

    /// Lookup returning an explicit [`Dispatch::Unregistered`] instead of `None`.
    pub fn dispatch(&self, type_name: &str) -> Dispatch<'_> {
        match self.renderers.get(type_name) {
            Some(r) => Dispatch::Found(r.as_ref()),
            None => Dispatch::Unregistered,
        }
    }

    /// Registered type names (aliases included) in registration order.
    pub fn list_types(&self) -> Vec<&str> {
        self.renderers.keys().map(String::as_str).collect()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.list_types())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/registry.rs"]
mod tests;
