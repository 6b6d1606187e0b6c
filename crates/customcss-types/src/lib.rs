//! Shared types, adapter traits, and core utilities for the Custom CSS service.
//!
//! This crate contains the foundational types that are shared between the
//! feature crates and all storage adapter implementations, so adapters can be
//! compiled without pulling in the web stack.

#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod settings_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
