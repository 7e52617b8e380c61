//! Helper settings
//!
//! Settings decide which attributes are treated as HTML boolean attributes and
//! which top-level options are hoisted into `data-*` attributes. They can be
//! loaded from TOML:
//!
//! ```toml
//! boolean_attributes = ["checked", "disabled", "selected"]
//! data_attributes = ["remote", "confirm"]
//! dasherize_nested_keys = true
//! ```

use crate::error::HelperResult;
use serde::Deserialize;
use std::path::Path;

/// HTML boolean attributes.
///
/// The presence of a boolean attribute alone makes it active, so a `true`
/// value renders `name="name"` and a `false` value drops the attribute.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"compact",
	"controls",
	"declare",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"noresize",
	"novalidate",
	"nowrap",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Options that are rewritten to `data-<name>` when given at the top level.
pub const DATA_ATTRS: &[&str] = &["method", "remote", "confirm"];

/// Settings used by [`TagHelpers`](crate::TagHelpers).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HelperSettings {
	/// Attribute names rendered as `name="name"` when `true`.
	pub boolean_attributes: Vec<String>,
	/// Top-level options moved to `data-*` attributes.
	pub data_attributes: Vec<String>,
	/// Replace `_` with `-` in nested attribute keys.
	pub dasherize_nested_keys: bool,
}

impl Default for HelperSettings {
	fn default() -> Self {
		Self {
			boolean_attributes: BOOLEAN_ATTRS.iter().map(|s| s.to_string()).collect(),
			data_attributes: DATA_ATTRS.iter().map(|s| s.to_string()).collect(),
			dasherize_nested_keys: true,
		}
	}
}

impl HelperSettings {
	/// Parses settings from a TOML document. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::HelperSettings;
	///
	/// let settings = HelperSettings::from_toml_str("data_attributes = []").unwrap();
	/// assert!(settings.data_attributes.is_empty());
	/// assert!(settings.is_boolean_attribute("checked"));
	/// ```
	pub fn from_toml_str(source: &str) -> HelperResult<Self> {
		let settings: HelperSettings = toml::from_str(source)?;
		tracing::debug!(
			boolean_attributes = settings.boolean_attributes.len(),
			data_attributes = settings.data_attributes.len(),
			"Loaded tag helper settings"
		);
		Ok(settings)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> HelperResult<Self> {
		let path = path.as_ref();
		tracing::debug!("Reading tag helper settings from {}", path.display());
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	pub fn is_boolean_attribute(&self, name: &str) -> bool {
		self.boolean_attributes.iter().any(|attr| attr == name)
	}

	pub fn is_data_attribute(&self, name: &str) -> bool {
		self.data_attributes.iter().any(|attr| attr == name)
	}
}
