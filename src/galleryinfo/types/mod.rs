//! Foundational data structures, error types, and parser settings.

pub mod config;
pub mod error;
pub mod models;
