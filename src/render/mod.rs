//! Visual tree produced by a render pass, and its HTML projection.

pub(crate) mod element;
pub(crate) mod html;
