//! In-memory settings adapter
//!
//! Values live in a `HashMap` behind a lock and are lost when the process
//! exits. Reads observe the latest completed write.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use customcss::{prelude::*, settings_adapter::SettingsAdapter};

#[derive(Debug, Default)]
pub struct SettingsAdapterMemory {
	settings: RwLock<HashMap<Box<str>, serde_json::Value>>,
}

impl SettingsAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored keys
	pub fn len(&self) -> usize {
		self.settings.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.read().is_empty()
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterMemory {
	async fn read_setting(&self, name: &str) -> ClResult<Option<serde_json::Value>> {
		Ok(self.settings.read().get(name).cloned())
	}

	async fn update_setting(&self, name: &str, value: Option<serde_json::Value>) -> ClResult<()> {
		let mut settings = self.settings.write();
		if let Some(value) = value {
			settings.insert(name.into(), value);
		} else {
			settings.remove(name);
		}
		debug!("Setting '{}' updated in memory", name);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_missing_key_is_none() {
		let adapter = SettingsAdapterMemory::new();
		assert_eq!(adapter.read_setting("nope").await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_update_replaces_and_deletes() {
		let adapter = SettingsAdapterMemory::new();

		adapter.update_setting("k", Some(json!({"a": 1}))).await.unwrap();
		adapter.update_setting("k", Some(json!({"b": 2}))).await.unwrap();
		assert_eq!(adapter.read_setting("k").await.unwrap(), Some(json!({"b": 2})));
		assert_eq!(adapter.len(), 1);

		adapter.update_setting("k", None).await.unwrap();
		assert_eq!(adapter.read_setting("k").await.unwrap(), None);
		assert!(adapter.is_empty());

		// Deleting a missing key is not an error
		adapter.update_setting("k", None).await.unwrap();
	}
}

// vim: ts=4
