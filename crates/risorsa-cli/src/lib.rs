//! CLI library components for the provisioning tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
