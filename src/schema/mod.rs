//! Boundary schema validation.
//!
//! Rendering never requires a valid graph; these checks exist for producers that want to reject
//! bad output before it reaches a screen.

pub(crate) mod validate;
