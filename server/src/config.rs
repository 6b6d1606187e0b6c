//! Environment configuration

use std::path::PathBuf;

use customcss::error::{ClResult, Error};
use customcss::types::DeliveryStrategy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub listen: String,
	pub db_dir: PathBuf,
	pub dist_dir: PathBuf,
	pub base_url: String,
	pub delivery: DeliveryStrategy,
	pub head_priority: i32,
	pub admin_user: String,
	pub admin_password: Option<String>,
}

impl Config {
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads every setting through `lookup`; empty values count as unset
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		let listen = var("LISTEN").unwrap_or_else(|| "127.0.0.1:8080".to_string());
		let base_url = var("BASE_URL")
			.map_or_else(|| format!("http://{}", listen), |url| url.trim_end_matches('/').to_string());
		let delivery = var("DELIVERY").map_or(Ok(DeliveryStrategy::default()), |v| v.parse())?;
		let head_priority = match var("HEAD_PRIORITY") {
			Some(value) => value.trim().parse().map_err(|_| {
				Error::ConfigError(format!("HEAD_PRIORITY must be an integer, got '{}'", value))
			})?,
			None => 99,
		};

		Ok(Config {
			listen,
			db_dir: PathBuf::from(var("DB_DIR").unwrap_or_else(|| "./data".to_string())),
			dist_dir: PathBuf::from(var("DIST_DIR").unwrap_or_else(|| "./dist".to_string())),
			base_url,
			delivery,
			head_priority,
			admin_user: var("ADMIN_USER").unwrap_or_else(|| "admin".to_string()),
			admin_password: var("ADMIN_PASSWORD"),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config(vars: &[(&str, &str)]) -> ClResult<Config> {
		let vars: HashMap<String, String> =
			vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
		Config::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config(&[]).unwrap();
		assert_eq!(config.listen, "127.0.0.1:8080");
		assert_eq!(config.db_dir, PathBuf::from("./data"));
		assert_eq!(config.dist_dir, PathBuf::from("./dist"));
		assert_eq!(config.base_url, "http://127.0.0.1:8080");
		assert_eq!(config.delivery, DeliveryStrategy::Endpoint);
		assert_eq!(config.head_priority, 99);
		assert_eq!(config.admin_user, "admin");
		assert_eq!(config.admin_password, None);
	}

	#[test]
	fn test_overrides() {
		let config = config(&[
			("LISTEN", "0.0.0.0:80"),
			("BASE_URL", "https://example.com/"),
			("DELIVERY", "inline"),
			("HEAD_PRIORITY", "-5"),
			("ADMIN_PASSWORD", "s3cret"),
			("DB_DIR", "/var/lib/customcss"),
		])
		.unwrap();
		assert_eq!(config.base_url, "https://example.com");
		assert_eq!(config.delivery, DeliveryStrategy::Inline);
		assert_eq!(config.head_priority, -5);
		assert_eq!(config.admin_password.as_deref(), Some("s3cret"));
		assert_eq!(config.db_dir, PathBuf::from("/var/lib/customcss"));
	}

	#[test]
	fn test_base_url_follows_listen() {
		let config = config(&[("LISTEN", "10.0.0.1:3000")]).unwrap();
		assert_eq!(config.base_url, "http://10.0.0.1:3000");
	}

	#[test]
	fn test_empty_password_is_unset() {
		assert_eq!(config(&[("ADMIN_PASSWORD", "")]).unwrap().admin_password, None);
	}

	#[test]
	fn test_invalid_values() {
		assert!(matches!(config(&[("DELIVERY", "ftp")]), Err(Error::ConfigError(_))));
		assert!(matches!(config(&[("HEAD_PRIORITY", "high")]), Err(Error::ConfigError(_))));
	}
}

// vim: ts=4
