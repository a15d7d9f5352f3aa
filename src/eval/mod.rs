//! Recursive graph interpreter: id lookup, type dispatch and the context handed to renderers.

pub(crate) mod children;
pub(crate) mod index;
pub(crate) mod interpreter;
