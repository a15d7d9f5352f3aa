//! Boundary model of a UI graph: nodes, their decoded component tag, and the ordered graph.

pub(crate) mod dsl;
pub(crate) mod graph;
pub(crate) mod model;
