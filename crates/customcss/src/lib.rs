//! Custom CSS is a small self-hosted service that lets a site administrator
//! keep one block of CSS and have it applied to every visitor page.
//!
//! # Features
//!
//! - Settings page for the stylesheet, behind HTTP Basic authentication
//! - Optional attribution comment in front of the stylesheet
//! - Two delivery strategies
//!     - inline `<style>` element in every page head
//!     - `?sccss=1` stylesheet endpoint linked from every page head
//! - Pluggable settings storage (SQLite, in-memory)

// Re-export shared types and the adapter trait from customcss-types
pub use customcss_types::error;
pub use customcss_types::settings_adapter;
pub use customcss_types::types;
pub use customcss_types::utils;

// Feature crate re-exports
pub use customcss_core::hooks;
pub use customcss_core::middleware;
pub use customcss_style as style;

// Local modules
pub mod app;
pub mod prelude;
pub mod routes;
pub mod site;
pub mod webserver;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
