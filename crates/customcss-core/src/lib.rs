//! Core infrastructure for the Custom CSS service.
//!
//! This crate plays the role of the hosting framework: it owns the shared
//! application state, the ordered hook registry that feature crates plug into,
//! the authentication extractors, and the middlewares that decorate pages.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extensions;
pub mod extract;
pub mod hooks;
pub mod middleware;
pub mod prelude;

// Re-export commonly used types
pub use app::{App, AppBuilderOpts, AppState};
pub use extract::{Auth, AuthCtx};
pub use hooks::{HookPoint, HookRegistry, DEFAULT_PRIORITY};
pub use middleware::{PermissionCheckOutput, CAP_EDIT_THEMES};

// vim: ts=4
