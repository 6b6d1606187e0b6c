//! App state type

use std::{path::PathBuf, sync::Arc};

use crate::extensions::Extensions;
use crate::hooks::HookRegistry;
use crate::prelude::*;

use customcss_types::settings_adapter::SettingsAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub settings_adapter: Arc<dyn SettingsAdapter>,

	/// Ordered callbacks, written during init and read per request
	pub hooks: tokio::sync::RwLock<HookRegistry>,

	// Type-erased extension map for feature-specific state
	pub extensions: Extensions,
}

impl AppState {
	pub fn new(
		opts: AppBuilderOpts,
		settings_adapter: Arc<dyn SettingsAdapter>,
		extensions: Extensions,
	) -> App {
		Arc::new(AppState {
			opts,
			settings_adapter,
			hooks: tokio::sync::RwLock::new(HookRegistry::new()),
			extensions,
		})
	}

	/// Get a registered extension by type. Returns error if not found.
	pub fn ext<T: Send + Sync + 'static>(&self) -> ClResult<&T> {
		self.extensions.get::<T>().ok_or_else(|| {
			Error::Internal(format!("Extension {} not registered", std::any::type_name::<T>()))
		})
	}
}

impl std::fmt::Debug for AppState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppState")
			.field("opts", &self.opts)
			.field("settings_adapter", &self.settings_adapter)
			.field("extensions", &self.extensions)
			.finish_non_exhaustive()
	}
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Directory of the site pages served to visitors
	pub dist_dir: Box<std::path::Path>,
	/// Public root URL of the site, without trailing slash
	pub base_url: Box<str>,
	pub delivery: DeliveryStrategy,
	/// Head hook priority of the stylesheet output; higher runs later
	pub head_priority: i32,
	pub admin_user: Box<str>,
	/// Admin pages reject every login while unset
	pub admin_password: Option<Box<str>>,
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		Self {
			listen: "127.0.0.1:8080".into(),
			dist_dir: PathBuf::from("./dist").into(),
			base_url: "http://127.0.0.1:8080".into(),
			delivery: DeliveryStrategy::Endpoint,
			head_priority: 99,
			admin_user: "admin".into(),
			admin_password: None,
		}
	}
}

// vim: ts=4
