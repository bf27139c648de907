//! Core types and trait definitions for the zakup tender analytics store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod analytics;
pub mod model;
pub mod store;
