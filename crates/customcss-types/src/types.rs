//! Common types used throughout the Custom CSS service.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// The persisted custom stylesheet record.
///
/// There is exactly one per installation. Missing fields fall back to their
/// defaults individually, so a partially stored object still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomStyle {
	/// CSS text as entered by the administrator, never validated
	pub css_text: String,
	/// Prepend the attribution comment to the rendered stylesheet
	pub show_attribution: bool,
}

impl CustomStyle {
	pub fn new(css_text: impl Into<String>, show_attribution: bool) -> Self {
		Self { css_text: css_text.into(), show_attribution }
	}
}

/// How the rendered stylesheet reaches visitors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStrategy {
	/// `<style>` element injected into every page head
	Inline,
	/// `<link>` to the `?sccss=1` pseudo-stylesheet endpoint
	#[default]
	Endpoint,
}

impl FromStr for DeliveryStrategy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"inline" => Ok(DeliveryStrategy::Inline),
			"endpoint" => Ok(DeliveryStrategy::Endpoint),
			other => Err(Error::ConfigError(format!(
				"Unknown delivery strategy '{}' (expected 'inline' or 'endpoint')",
				other
			))),
		}
	}
}

impl std::fmt::Display for DeliveryStrategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DeliveryStrategy::Inline => write!(f, "inline"),
			DeliveryStrategy::Endpoint => write!(f, "endpoint"),
		}
	}
}


// vim: ts=4
