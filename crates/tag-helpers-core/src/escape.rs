//! HTML escaping and pre-escaped strings
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//!
//! Text that is already valid markup is carried in a [`SafeString`], which the
//! tag builders emit verbatim. Anything else goes through [`escape_html`]
//! exactly once.

use crate::content::Content;
use std::borrow::Cow;
use std::fmt;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::escape_html;
///
/// assert_eq!(escape_html("Hello, World!"), "Hello, World!");
/// assert_eq!(
///     escape_html(r#"Example <foo> & "bar""#),
///     "Example &lt;foo&gt; &amp; &quot;bar&quot;"
/// );
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		push_escaped(&mut escaped, s);
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Appends `s` to `out`, escaping HTML special characters on the way.
pub(crate) fn push_escaped(out: &mut String, s: &str) {
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(c),
		}
	}
}

/// Markup that must not be escaped again.
///
/// Every tag builder returns a `SafeString`, so helper output can be nested
/// inside other helpers without double escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
	/// Wraps already-escaped markup.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		SafeString(s.into())
	}

	/// Get the inner string
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Appends content, escaping it unless it is itself safe.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::{MarkSafe, SafeString};
	///
	/// let mut out = SafeString::new("<ul>");
	/// out.push("a < b");
	/// out.push("</ul>".mark_safe());
	/// assert_eq!(out, "<ul>a &lt; b</ul>");
	/// ```
	pub fn push(&mut self, content: impl Into<Content>) {
		content.into().write_to(&mut self.0);
	}
}

impl From<String> for SafeString {
	fn from(s: String) -> Self {
		SafeString(s)
	}
}

impl From<&str> for SafeString {
	fn from(s: &str) -> Self {
		SafeString(s.to_string())
	}
}

impl From<SafeString> for String {
	fn from(s: SafeString) -> Self {
		s.0
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for SafeString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for SafeString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for SafeString {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

/// Marks a string as pre-escaped markup.
pub trait MarkSafe {
	/// Wraps `self` in a [`SafeString`] without escaping it.
	fn mark_safe(self) -> SafeString;
}

impl MarkSafe for &str {
	fn mark_safe(self) -> SafeString {
		SafeString::from(self)
	}
}

impl MarkSafe for String {
	fn mark_safe(self) -> SafeString {
		SafeString(self)
	}
}

impl MarkSafe for SafeString {
	fn mark_safe(self) -> SafeString {
		self
	}
}
