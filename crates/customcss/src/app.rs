//! App builder - constructs and runs the Custom CSS service

use std::sync::Arc;

use crate::prelude::*;
use crate::settings_adapter::SettingsAdapter;
use crate::{routes, webserver};
pub use customcss_core::app::{App, AppBuilderOpts, AppState, VERSION};
use customcss_core::extensions::Extensions;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	settings_adapter: Option<Arc<dyn SettingsAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		if let Err(err) = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init()
		{
			debug!("Keeping the installed tracing subscriber: {}", err);
		}
		Self::with_opts(AppBuilderOpts::default())
	}

	/// Builder without global logging setup
	pub fn with_opts(opts: AppBuilderOpts) -> Self {
		AppBuilder { opts, settings_adapter: None }
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn dist_dir(&mut self, dist_dir: impl Into<Box<std::path::Path>>) -> &mut Self {
		self.opts.dist_dir = dist_dir.into();
		self
	}
	pub fn base_url(&mut self, base_url: impl Into<Box<str>>) -> &mut Self {
		self.opts.base_url = base_url.into();
		self
	}
	pub fn delivery(&mut self, delivery: DeliveryStrategy) -> &mut Self {
		self.opts.delivery = delivery;
		self
	}
	pub fn head_priority(&mut self, priority: i32) -> &mut Self {
		self.opts.head_priority = priority;
		self
	}
	pub fn admin_user(&mut self, admin_user: impl Into<Box<str>>) -> &mut Self {
		self.opts.admin_user = admin_user.into();
		self
	}
	pub fn admin_password(&mut self, admin_password: impl Into<Box<str>>) -> &mut Self {
		self.opts.admin_password = Some(admin_password.into());
		self
	}

	// Adapters
	pub fn settings_adapter(&mut self, settings_adapter: Arc<dyn SettingsAdapter>) -> &mut Self {
		self.settings_adapter = Some(settings_adapter);
		self
	}

	/// Creates the app state and initializes every feature, without serving
	pub async fn build(self) -> ClResult<App> {
		let Some(settings_adapter) = self.settings_adapter else {
			error!("FATAL: No settings adapter configured");
			return Err(Error::Internal("No settings adapter configured".to_string()));
		};
		if self.opts.base_url.is_empty() {
			error!("FATAL: Empty base URL");
			return Err(Error::ConfigError("Base URL must not be empty".to_string()));
		}
		if self.opts.admin_password.is_none() {
			warn!("No admin password configured, the settings page is disabled");
		}

		let mut extensions = Extensions::new();
		customcss_style::register_extensions(&mut extensions, settings_adapter.clone())?;

		let app = AppState::new(self.opts, settings_adapter, extensions);
		customcss_style::init(&app).await?;

		Ok(app)
	}

	pub async fn run(self) -> ClResult<()> {
		info!("  ___         _              ___ ___ ___");
		info!(" / __|  _ ___| |_ ___ _ __  / __/ __/ __|");
		info!("| (_| || (_-<  _/ _ \\ '  \\| (__\\__ \\__ \\");
		info!(" \\___\\_,_/__/\\__\\___/_|_|_|\\___|___/___/");
		info!("V{}", VERSION);
		info!("");

		let app = self.build().await?;
		let router = routes::init(app.clone());
		webserver::serve(&app, router).await
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
