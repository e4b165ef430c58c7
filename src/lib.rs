pub mod commands;
pub mod config;
pub mod host;
pub mod package;
pub mod plugin;
pub mod resolve;
pub mod runtime;
pub mod version;
