//! Custom stylesheet feature
//!
//! An administrator edits one block of CSS on the settings page; visitors
//! receive it either inline in every page head or from the `?sccss=1`
//! stylesheet endpoint.
//!
//! # Modules
//!
//! - **store**: the persisted `CustomStyle` record
//! - **render**: record to stylesheet text
//! - **form**: editor page and submission decoding
//! - **delivery**: head hooks and the stylesheet endpoint
//! - **handler**: admin HTTP handlers

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod delivery;
pub mod form;
pub mod handler;
pub mod render;
pub mod store;

mod prelude;

use std::sync::Arc;

use customcss_core::extensions::Extensions;
use customcss_types::settings_adapter::SettingsAdapter;

use crate::prelude::*;

pub use store::StyleStore;

/// Path of the settings page
pub const EDITOR_PATH: &str = "/admin/custom-css";

/// Creates the feature state stored in the app extensions
pub fn register_extensions(
	extensions: &mut Extensions,
	settings_adapter: Arc<dyn SettingsAdapter>,
) -> ClResult<()> {
	extensions.insert(StyleStore::new(settings_adapter));
	extensions.insert(form::Editor::new()?);
	Ok(())
}

/// Hooks the feature into the running app
pub async fn init(app: &App) -> ClResult<()> {
	delivery::register_hooks(app).await
}

/// Removes every trace of the feature from storage
pub async fn uninstall(store: &StyleStore) -> ClResult<()> {
	store.clear().await?;
	info!("Custom CSS settings removed");
	Ok(())
}

// vim: ts=4
