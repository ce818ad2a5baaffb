//! Source composition for configuration.

pub(crate) mod merge_policy;
pub(crate) mod service;
