//! Declarative value references and their resolution against a data model.

pub(crate) mod resolve;
pub(crate) mod scalar;
