//! Screen configuration, registry and built-in catalog.

pub mod catalog;
pub mod config;
pub mod registry;
