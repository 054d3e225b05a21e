//! Negotiation settings
//!
//! Settings are plain serde structs so they can be embedded in a larger
//! project configuration, or read on their own from a TOML document with an
//! optional `[negotiation]` table:
//!
//! ```toml
//! [negotiation]
//! fallback_media_type = "application/octet-stream"
//! ```

use crate::error::SettingsError;
use crate::media_type::MediaType;
use serde::{Deserialize, Serialize};

const DEFAULT_FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Configuration for a [`crate::Negotiator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Media type used when the winning pairing leaves both type and subtype open
	pub fallback_media_type: String,
}

impl Default for NegotiationSettings {
	fn default() -> Self {
		Self {
			fallback_media_type: DEFAULT_FALLBACK_MEDIA_TYPE.to_string(),
		}
	}
}

#[derive(Deserialize)]
struct SettingsDocument {
	#[serde(default)]
	negotiation: NegotiationSettings,
}

impl NegotiationSettings {
	/// Reads settings from the `[negotiation]` table of a TOML document
	///
	/// Missing tables and keys fall back to defaults.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::from_toml_str(r#"
	///     [negotiation]
	///     fallback_media_type = "application/json"
	/// "#).unwrap();
	/// assert_eq!(settings.fallback_media_type, "application/json");
	///
	/// let defaults = NegotiationSettings::from_toml_str("").unwrap();
	/// assert_eq!(defaults, NegotiationSettings::default());
	/// ```
	pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
		let settings = toml::from_str::<SettingsDocument>(document)?.negotiation;
		settings.fallback()?;
		Ok(settings)
	}

	/// Sets the fallback media type
	pub fn with_fallback_media_type(mut self, media_type: impl Into<String>) -> Self {
		self.fallback_media_type = media_type.into();
		self
	}

	/// Parses and validates the fallback media type
	pub fn fallback(&self) -> Result<MediaType, SettingsError> {
		let invalid = || SettingsError::InvalidFallback(self.fallback_media_type.clone());
		let media_type = MediaType::parse(&self.fallback_media_type).map_err(|_| invalid())?;
		if media_type.is_concrete() {
			Ok(media_type)
		} else {
			Err(invalid())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_fallback_is_octet_stream() {
		let fallback = NegotiationSettings::default().fallback().unwrap();
		assert_eq!(fallback.essence(), "application/octet-stream");
	}

	#[rstest]
	fn test_missing_key_uses_default() {
		let settings = NegotiationSettings::from_toml_str("[negotiation]\n").unwrap();
		assert_eq!(settings, NegotiationSettings::default());
	}

	#[rstest]
	#[case("*/*")]
	#[case("text/*")]
	#[case("not a media type")]
	fn test_rejects_non_concrete_fallback(#[case] fallback: &str) {
		let document = format!("[negotiation]\nfallback_media_type = {fallback:?}\n");
		assert!(matches!(
			NegotiationSettings::from_toml_str(&document),
			Err(SettingsError::InvalidFallback(_))
		));
	}

	#[rstest]
	fn test_rejects_invalid_toml() {
		assert!(matches!(
			NegotiationSettings::from_toml_str("[negotiation"),
			Err(SettingsError::Toml(_))
		));
	}

	#[rstest]
	fn test_fallback_keeps_parameters() {
		let settings =
			NegotiationSettings::default().with_fallback_media_type("text/plain; charset=utf-8");
		assert_eq!(
			settings.fallback().unwrap().to_string(),
			"text/plain;charset=utf-8"
		);
	}
}
