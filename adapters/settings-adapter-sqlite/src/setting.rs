//! Settings key-value store management
//!
//! Each setting is one row holding a JSON document.

use sqlx::{Row, SqlitePool};

use customcss::prelude::*;

/// Read a single setting by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> ClResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	let Some(row) = row else {
		return Ok(None);
	};
	let value: Option<String> = row.try_get("value").map_err(|_| Error::DbError)?;
	match value {
		Some(value) => Ok(Some(
			serde_json::from_str(&value)
				.inspect_err(|err| warn!("DB: invalid JSON in setting '{}': {}", name, err))
				.map_err(|_| Error::DbError)?,
		)),
		None => Ok(None),
	}
}

/// Replace or delete a setting
pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	value: Option<serde_json::Value>,
) -> ClResult<()> {
	if let Some(val) = value {
		let value_str = val.to_string();
		sqlx::query(
			"INSERT OR REPLACE INTO settings (name, value, updated_at) VALUES (?, ?, unixepoch())",
		)
		.bind(name)
		.bind(value_str)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;
	} else {
		sqlx::query("DELETE FROM settings WHERE name = ?")
			.bind(name)
			.execute(db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
	}

	Ok(())
}

// vim: ts=4
