//! Configuration sources layered on top of the defaults.

pub(crate) mod environment;
pub(crate) mod workspace_file;
