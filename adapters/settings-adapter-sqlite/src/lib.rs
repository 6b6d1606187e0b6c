//! SQLite settings adapter
//!
//! Stores every setting as a JSON document in a single `settings` table.
//! Writes replace the whole row, so readers never see a half-written value.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use customcss::{prelude::*, settings_adapter::SettingsAdapter};

mod schema;
mod setting;

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	/// Opens (or creates) the database in `dir`
	pub async fn new(dir: impl AsRef<Path>) -> ClResult<Self> {
		let dir = dir.as_ref();
		tokio::fs::create_dir_all(dir).await?;
		let path = dir.join("settings.db");

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(&path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		info!("Settings database opened: {}", path.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn read_setting(&self, name: &str) -> ClResult<Option<serde_json::Value>> {
		setting::read(&self.db, name).await
	}

	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> ClResult<()> {
		setting::update(&self.db, name, value).await
	}
}

// vim: ts=4
