//! End-to-end attribution runs against temporary workspaces

mod config_layers;
mod idempotence;
mod support;
