//! Typed error definitions for PostForge.
//!
//! - [`ClientError`] is the terminal output of every failure path of a
//!   generation request. Each variant carries a fixed status and message.
//! - [`ConfigError`] covers startup configuration problems.

mod client;
mod config;

pub use client::ClientError;
pub use config::ConfigError;
