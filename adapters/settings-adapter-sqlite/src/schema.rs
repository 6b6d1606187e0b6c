//! Database schema initialization

use sqlx::SqlitePool;

/// Create the settings table if it does not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		name text NOT NULL,
		value text,
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
