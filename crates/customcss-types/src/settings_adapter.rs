//! Adapter that stores named configuration values.
//!
//! The service keeps all of its persistent state in a generic key-value slot
//! store. Values are JSON documents; an adapter never interprets them.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Reads a value. A missing key is `Ok(None)`, never an error.
	async fn read_setting(&self, name: &str) -> ClResult<Option<serde_json::Value>>;

	/// Replaces a value as a whole. `None` deletes the key.
	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> ClResult<()>;
}

// vim: ts=4
