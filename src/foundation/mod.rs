pub(crate) mod error;
pub(crate) mod naming;
