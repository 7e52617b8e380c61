//! Element content
//!
//! [`Content`] is whatever goes between an opening and a closing tag. Plain
//! text is escaped when written, [`SafeString`] markup is written verbatim.

use crate::escape::{SafeString, push_escaped};
use std::borrow::Cow;
use std::fmt;

/// Content of a content tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
	/// Plain text, escaped on output.
	Text(String),
	/// Pre-escaped markup, written as is.
	Safe(SafeString),
	/// Concatenation of several pieces.
	List(Vec<Content>),
	/// Nothing at all.
	#[default]
	Empty,
}

impl Content {
	/// Converts any displayable value into escaped text content.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::Content;
	///
	/// let content = Content::display(std::net::Ipv4Addr::LOCALHOST);
	/// assert_eq!(content.render(), "127.0.0.1");
	/// ```
	pub fn display(value: impl fmt::Display) -> Self {
		Content::Text(value.to_string())
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Content::Text(s) => s.is_empty(),
			Content::Safe(s) => s.is_empty(),
			Content::List(items) => items.iter().all(Content::is_empty),
			Content::Empty => true,
		}
	}

	/// Writes the content to `out`, escaping text exactly once.
	pub(crate) fn write_to(&self, out: &mut String) {
		match self {
			Content::Text(s) => push_escaped(out, s),
			Content::Safe(s) => out.push_str(s.as_str()),
			Content::List(items) => {
				for item in items {
					item.write_to(out);
				}
			}
			Content::Empty => {}
		}
	}

	/// Renders the content as markup.
	pub fn render(&self) -> SafeString {
		let mut out = String::new();
		self.write_to(&mut out);
		SafeString::from(out)
	}

	/// Renders the content without escaping anything.
	pub(crate) fn render_trusted(&self, out: &mut String) {
		match self {
			Content::Text(s) => out.push_str(s),
			Content::Safe(s) => out.push_str(s.as_str()),
			Content::List(items) => {
				for item in items {
					item.render_trusted(out);
				}
			}
			Content::Empty => {}
		}
	}
}

impl From<&str> for Content {
	fn from(value: &str) -> Self {
		Content::Text(value.to_string())
	}
}

impl From<&String> for Content {
	fn from(value: &String) -> Self {
		Content::Text(value.clone())
	}
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Content::Text(value)
	}
}

impl From<Cow<'_, str>> for Content {
	fn from(value: Cow<'_, str>) -> Self {
		Content::Text(value.into_owned())
	}
}

impl From<SafeString> for Content {
	fn from(value: SafeString) -> Self {
		Content::Safe(value)
	}
}

impl From<&SafeString> for Content {
	fn from(value: &SafeString) -> Self {
		Content::Safe(value.clone())
	}
}

impl From<()> for Content {
	fn from(_: ()) -> Self {
		Content::Empty
	}
}

impl<T: Into<Content>> From<Option<T>> for Content {
	fn from(value: Option<T>) -> Self {
		value.map_or(Content::Empty, Into::into)
	}
}

impl<T: Into<Content>> From<Vec<T>> for Content {
	fn from(value: Vec<T>) -> Self {
		Content::List(value.into_iter().map(Into::into).collect())
	}
}

macro_rules! content_from_display {
	($($ty:ty),+ $(,)?) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Content::Text(value.to_string())
				}
			}
		)+
	};
}

content_from_display!(
	char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
