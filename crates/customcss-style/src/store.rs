//! Persistent custom stylesheet record

use std::sync::Arc;

use customcss_types::settings_adapter::SettingsAdapter;

use crate::prelude::*;

/// Name of the configuration slot holding the record
pub const SETTINGS_KEY: &str = "sccss_settings";

/// Reads and writes the single `CustomStyle` record of the installation
#[derive(Debug, Clone)]
pub struct StyleStore {
	adapter: Arc<dyn SettingsAdapter>,
}

impl StyleStore {
	pub fn new(adapter: Arc<dyn SettingsAdapter>) -> Self {
		Self { adapter }
	}

	/// Current record, or the defaults when nothing was saved yet
	pub async fn load(&self) -> ClResult<CustomStyle> {
		match self.adapter.read_setting(SETTINGS_KEY).await? {
			None | Some(serde_json::Value::Null) => Ok(CustomStyle::default()),
			Some(value) => serde_json::from_value(value).map_err(|err| {
				warn!("Stored '{}' is not a valid record: {}", SETTINGS_KEY, err);
				Error::DbError
			}),
		}
	}

	/// Visitor-side read: storage failures yield the empty record
	pub async fn load_or_default(&self) -> CustomStyle {
		self.load().await.unwrap_or_else(|err| {
			error!("Cannot load custom CSS, serving empty stylesheet: {}", err);
			CustomStyle::default()
		})
	}

	/// Replaces the whole record in one write
	pub async fn save(&self, style: &CustomStyle) -> ClResult<()> {
		let value = serde_json::to_value(style)?;
		self.adapter.update_setting(SETTINGS_KEY, Some(value)).await?;
		debug!("Saved '{}' ({} bytes of CSS)", SETTINGS_KEY, style.css_text.len());
		Ok(())
	}

	pub async fn clear(&self) -> ClResult<()> {
		self.adapter.update_setting(SETTINGS_KEY, None).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use customcss_settings_adapter_memory::SettingsAdapterMemory;
	use serde_json::json;

	#[derive(Debug)]
	struct BrokenAdapter;

	#[async_trait]
	impl SettingsAdapter for BrokenAdapter {
		async fn read_setting(&self, _name: &str) -> ClResult<Option<serde_json::Value>> {
			Err(Error::DbError)
		}

		async fn update_setting(
			&self,
			_name: &str,
			_value: Option<serde_json::Value>,
		) -> ClResult<()> {
			Err(Error::DbError)
		}
	}

	fn memory_store() -> (StyleStore, Arc<SettingsAdapterMemory>) {
		let adapter = Arc::new(SettingsAdapterMemory::new());
		(StyleStore::new(adapter.clone()), adapter)
	}

	#[tokio::test]
	async fn test_load_empty_store() {
		let (store, _) = memory_store();
		let style = store.load().await.unwrap();
		assert_eq!(style, CustomStyle { css_text: String::new(), show_attribution: false });
	}

	#[tokio::test]
	async fn test_save_then_load() {
		let (store, _) = memory_store();
		let style = CustomStyle::new("a::before { content: \"<b>\"; }", true);

		store.save(&style).await.unwrap();
		assert_eq!(store.load().await.unwrap(), style);
	}

	#[tokio::test]
	async fn test_save_writes_single_slot() {
		let (store, adapter) = memory_store();
		store.save(&CustomStyle::new("p {}", false)).await.unwrap();
		store.save(&CustomStyle::new("h1 {}", true)).await.unwrap();

		assert_eq!(adapter.len(), 1);
		assert_eq!(
			adapter.read_setting(SETTINGS_KEY).await.unwrap(),
			Some(json!({"cssText": "h1 {}", "showAttribution": true}))
		);
	}

	#[tokio::test]
	async fn test_partial_record_uses_field_defaults() {
		let (store, adapter) = memory_store();
		adapter.update_setting(SETTINGS_KEY, Some(json!({"showAttribution": true}))).await.unwrap();

		assert_eq!(store.load().await.unwrap(), CustomStyle::new("", true));
	}

	#[tokio::test]
	async fn test_undecodable_record_is_storage_error() {
		let (store, adapter) = memory_store();
		adapter.update_setting(SETTINGS_KEY, Some(json!("just a string"))).await.unwrap();

		assert!(matches!(store.load().await, Err(Error::DbError)));
		assert_eq!(store.load_or_default().await, CustomStyle::default());
	}

	#[tokio::test]
	async fn test_clear_restores_defaults() {
		let (store, adapter) = memory_store();
		store.save(&CustomStyle::new("p {}", true)).await.unwrap();

		store.clear().await.unwrap();
		assert!(adapter.is_empty());
		assert_eq!(store.load().await.unwrap(), CustomStyle::default());
	}

	#[tokio::test]
	async fn test_storage_failure() {
		let store = StyleStore::new(Arc::new(BrokenAdapter));

		assert!(matches!(store.load().await, Err(Error::DbError)));
		assert!(matches!(store.save(&CustomStyle::default()).await, Err(Error::DbError)));
		assert_eq!(store.load_or_default().await, CustomStyle::default());
	}
}

// vim: ts=4
