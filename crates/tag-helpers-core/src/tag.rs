//! Tag builders
//!
//! [`TagHelpers`] turns a tag name, an [`Attributes`] mapping and optional
//! [`Content`] into escaped markup. The free functions ([`tag`],
//! [`content_tag`], ...) use a shared instance with default settings.
//!
//! Attribute rules:
//! - values are escaped (`&`, `<`, `>`, `"`)
//! - a boolean attribute set to `true` renders as `name="name"`
//! - `false` and absent values are dropped at the top level
//! - nested mappings are flattened into dash-joined names, with their
//!   leaves rendered literally (`data-remote="true"`)
//! - `method`, `remote` and `confirm` options become `data-*` attributes
//!   (`method` stays a real attribute on `form`); an explicit `data-*`
//!   entry for the same name takes precedence
//!
//! Tag names are trusted and written as given. Validate names coming from
//! untrusted input with [`validate_tag_name`] first.

use crate::attributes::{AttrValue, Attributes};
use crate::content::Content;
use crate::error::{HelperError, HelperResult};
use crate::escape::{SafeString, push_escaped};
use crate::settings::HelperSettings;
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_HELPERS: Lazy<TagHelpers> = Lazy::new(TagHelpers::default);

/// Tag builders bound to a set of [`HelperSettings`].
#[derive(Debug, Clone, Default)]
pub struct TagHelpers {
	settings: Arc<HelperSettings>,
}

impl TagHelpers {
	/// Creates helpers using the given settings.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::{HelperSettings, TagHelpers, attrs};
	///
	/// let settings = HelperSettings {
	///     data_attributes: vec![],
	///     ..HelperSettings::default()
	/// };
	/// let helpers = TagHelpers::new(settings);
	/// let html = helpers.tag("a", attrs! { "remote" => "yes" }, false);
	/// assert_eq!(html, r#"<a remote="yes" />"#);
	/// ```
	pub fn new(settings: HelperSettings) -> Self {
		Self {
			settings: Arc::new(settings),
		}
	}

	pub fn settings(&self) -> &HelperSettings {
		&self.settings
	}

	/// Renders a tag without content.
	///
	/// With `open == false` the tag is self-closed (`<br />`); with
	/// `open == true` only the opening tag is produced (`<p>`).
	///
	/// `name` is trusted and not escaped; debug builds assert that it passes
	/// [`validate_tag_name`].
	pub fn tag(&self, name: &str, attributes: impl Into<Attributes>, open: bool) -> SafeString {
		let mut out = String::with_capacity(name.len() + 16);
		self.write_start(&mut out, name, attributes.into());
		out.push_str(if open { ">" } else { " />" });
		SafeString::from(out)
	}

	/// Renders `<name attrs>content</name>`, escaping content unless it is safe.
	pub fn content_tag(
		&self,
		name: &str,
		content: impl Into<Content>,
		attributes: impl Into<Attributes>,
	) -> SafeString {
		let mut out = self.open_element(name, attributes.into());
		content.into().write_to(&mut out);
		close_element(&mut out, name);
		SafeString::from(out)
	}

	/// Like [`content_tag`](Self::content_tag), with the content produced by `block`.
	pub fn content_tag_with<F, C>(
		&self,
		name: &str,
		attributes: impl Into<Attributes>,
		block: F,
	) -> SafeString
	where
		F: FnOnce() -> C,
		C: Into<Content>,
	{
		self.content_tag(name, block(), attributes)
	}

	/// Renders a content tag whose content is trusted and never escaped.
	pub fn safe_content_tag(
		&self,
		name: &str,
		content: impl Into<Content>,
		attributes: impl Into<Attributes>,
	) -> SafeString {
		let mut out = self.open_element(name, attributes.into());
		content.into().render_trusted(&mut out);
		close_element(&mut out, name);
		SafeString::from(out)
	}

	/// Renders `<input type="..." ... />`.
	///
	/// `type` always comes first; a `type` entry in `attributes` overrides
	/// the value but not the position.
	pub fn input_tag(&self, input_type: &str, attributes: impl Into<Attributes>) -> SafeString {
		let mut merged = Attributes::new().with("type", input_type);
		merged.merge(attributes.into());
		self.tag("input", merged, false)
	}

	/// Serializes attributes as they appear inside the opening tag of `tag_name`,
	/// each one preceded by a space.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::{TagHelpers, attrs};
	///
	/// let helpers = TagHelpers::default();
	/// let out = helpers.render_attributes("option", attrs! { "selected" => true, "value" => 1 });
	/// assert_eq!(out, r#" selected="selected" value="1""#);
	/// ```
	pub fn render_attributes(&self, tag_name: &str, attributes: impl Into<Attributes>) -> String {
		let mut out = String::new();
		self.write_attributes(&mut out, tag_name, attributes.into());
		out
	}

	fn open_element(&self, name: &str, attributes: Attributes) -> String {
		let mut out = String::with_capacity(name.len() * 2 + 16);
		self.write_start(&mut out, name, attributes);
		out.push('>');
		out
	}

	fn write_start(&self, out: &mut String, name: &str, attributes: Attributes) {
		debug_assert!(
			validate_tag_name(name).is_ok(),
			"invalid tag name passed to a tag helper: {name:?}"
		);
		out.push('<');
		out.push_str(name);
		self.write_attributes(out, name, attributes);
	}

	fn write_attributes(&self, out: &mut String, tag_name: &str, attributes: Attributes) {
		let attributes = self.hoist_data_options(tag_name, attributes);

		for (name, value) in &attributes {
			if !is_valid_attribute_name(name) {
				tracing::warn!(tag = tag_name, attribute = %name, "Dropping invalid attribute name");
				continue;
			}

			match value {
				AttrValue::Absent | AttrValue::Flag(false) => {}
				AttrValue::Flag(true) if self.settings.is_boolean_attribute(name) => {
					write_pair(out, name, name);
				}
				AttrValue::Nested(nested) => self.write_nested(out, tag_name, name, nested),
				leaf => write_leaf(out, name, leaf),
			}
		}
	}

	fn write_nested(&self, out: &mut String, tag_name: &str, prefix: &str, nested: &Attributes) {
		for (key, value) in nested {
			let key = if self.settings.dasherize_nested_keys {
				key.replace('_', "-")
			} else {
				key.clone()
			};
			let name = format!("{}-{}", prefix, key);

			if !is_valid_attribute_name(&name) {
				tracing::warn!(tag = tag_name, attribute = %name, "Dropping invalid attribute name");
				continue;
			}

			match value {
				AttrValue::Absent => {}
				AttrValue::Nested(inner) => self.write_nested(out, tag_name, &name, inner),
				leaf => write_leaf(out, &name, leaf),
			}
		}
	}

	/// Moves configured top-level options such as `remote` to `data-remote`.
	fn hoist_data_options(&self, tag_name: &str, mut attributes: Attributes) -> Attributes {
		let hoisted: Vec<String> = attributes
			.iter()
			.map(|(name, _)| name)
			.filter(|name| self.settings.is_data_attribute(name))
			.filter(|name| !(tag_name == "form" && name.as_str() == "method"))
			.cloned()
			.collect();

		for name in hoisted {
			let Some(value) = attributes.remove(&name) else {
				continue;
			};
			let target = format!("data-{}", name);
			if attributes.contains_key(&target) || has_nested_data(&attributes, &name) {
				tracing::warn!(tag = tag_name, attribute = %name, "Dropping option shadowed by {}", target);
				continue;
			}

			attributes.insert(target, value);
			if name == "method" && !attributes.contains_key("rel") {
				attributes.insert("rel", "nofollow");
			}
		}

		attributes
	}
}

fn has_nested_data(attributes: &Attributes, key: &str) -> bool {
	match attributes.get("data") {
		Some(AttrValue::Nested(data)) => data.contains_key(key),
		_ => false,
	}
}

fn write_leaf(out: &mut String, name: &str, value: &AttrValue) {
	match value {
		AttrValue::Literal(text) => write_pair(out, name, text),
		AttrValue::Flag(flag) => write_pair(out, name, if *flag { "true" } else { "false" }),
		AttrValue::List(items) => write_pair(out, name, &items.join(" ")),
		AttrValue::Nested(_) | AttrValue::Absent => {}
	}
}

fn write_pair(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	push_escaped(out, value);
	out.push('"');
}

fn close_element(out: &mut String, name: &str) {
	out.push_str("</");
	out.push_str(name);
	out.push('>');
}

/// Whether `name` can be emitted as an attribute name without breaking the tag.
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
		})
}

/// Checks that `name` is usable as an element name.
///
/// Element names start with an ASCII letter and continue with ASCII
/// alphanumerics, `-`, `_`, `.` or `:` (custom elements and namespaced tags).
///
/// # Examples
///
/// ```
/// use tag_helpers_core::validate_tag_name;
///
/// assert!(validate_tag_name("my-widget").is_ok());
/// assert!(validate_tag_name("p onclick").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> HelperResult<()> {
	let mut chars = name.chars();
	let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
		&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));

	if valid {
		Ok(())
	} else {
		Err(HelperError::InvalidTagName(name.to_string()))
	}
}

/// Renders a tag without content using the default settings.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::{attrs, tag};
///
/// assert_eq!(tag("br", attrs!(), false), "<br />");
/// assert_eq!(tag("p", attrs! { "class" => "demo" }, true), r#"<p class="demo">"#);
/// ```
pub fn tag(name: &str, attributes: impl Into<Attributes>, open: bool) -> SafeString {
	DEFAULT_HELPERS.tag(name, attributes, open)
}

/// Renders a content tag using the default settings.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::{attrs, content_tag};
///
/// let html = content_tag("p", "Demo", attrs! { "class" => "large", "id" => "thing" });
/// assert_eq!(html, r#"<p class="large" id="thing">Demo</p>"#);
/// assert_eq!(content_tag("p", 97, attrs!()), "<p>97</p>");
/// ```
pub fn content_tag(name: &str, content: impl Into<Content>, attributes: impl Into<Attributes>) -> SafeString {
	DEFAULT_HELPERS.content_tag(name, content, attributes)
}

/// Renders a content tag whose content comes from `block`.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::{MarkSafe, attrs, content_tag_with};
///
/// let escaped = content_tag_with("p", attrs! { "id" => "star" }, || "<>");
/// assert_eq!(escaped, r#"<p id="star">&lt;&gt;</p>"#);
///
/// let safe = content_tag_with("p", attrs! { "id" => "star" }, || "<>".mark_safe());
/// assert_eq!(safe, r#"<p id="star"><></p>"#);
/// ```
pub fn content_tag_with<F, C>(name: &str, attributes: impl Into<Attributes>, block: F) -> SafeString
where
	F: FnOnce() -> C,
	C: Into<Content>,
{
	DEFAULT_HELPERS.content_tag_with(name, attributes, block)
}

/// Renders a content tag without escaping its content.
pub fn safe_content_tag(
	name: &str,
	content: impl Into<Content>,
	attributes: impl Into<Attributes>,
) -> SafeString {
	DEFAULT_HELPERS.safe_content_tag(name, content, attributes)
}

/// Renders an `input` tag using the default settings.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::{attrs, input_tag};
///
/// assert_eq!(input_tag("checkbox", attrs! { "checked" => true }),
///            r#"<input type="checkbox" checked="checked" />"#);
/// assert_eq!(input_tag("checkbox", attrs! { "checked" => false }),
///            r#"<input type="checkbox" />"#);
/// ```
pub fn input_tag(input_type: &str, attributes: impl Into<Attributes>) -> SafeString {
	DEFAULT_HELPERS.input_tag(input_type, attributes)
}
