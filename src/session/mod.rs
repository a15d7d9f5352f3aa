//! Session-oriented rendering API and the action channel back to the host.

pub(crate) mod action;
pub(crate) mod render_session;
