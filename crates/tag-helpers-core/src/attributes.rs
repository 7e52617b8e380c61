//! Attribute mappings
//!
//! [`Attributes`] keeps insertion order, so the serialized attribute list of a
//! tag is stable for identical input. Values are an [`AttrValue`]: a literal,
//! a boolean flag, a space-joined list, or a nested mapping that is flattened
//! into dash-joined names (`data: {dojo: {type: ..}}` becomes
//! `data-dojo-type="..."`).

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use std::borrow::Cow;

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// Text value; numbers are stored in their decimal form.
	Literal(String),
	/// Boolean value.
	Flag(bool),
	/// Values joined with single spaces, e.g. a list of classes.
	List(Vec<String>),
	/// Mapping flattened into `parent-child` attribute names.
	Nested(Attributes),
	/// Explicitly missing value; never rendered.
	Absent,
}

impl AttrValue {
	/// Whether the value produces no output at the top level of a tag.
	pub fn is_omitted(&self) -> bool {
		matches!(self, AttrValue::Absent | AttrValue::Flag(false))
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Literal(value.to_string())
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Literal(value.clone())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Literal(value)
	}
}

impl From<Cow<'_, str>> for AttrValue {
	fn from(value: Cow<'_, str>) -> Self {
		AttrValue::Literal(value.into_owned())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Flag(value)
	}
}

impl From<Attributes> for AttrValue {
	fn from(value: Attributes) -> Self {
		AttrValue::Nested(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		AttrValue::List(value)
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(value: Vec<&str>) -> Self {
		AttrValue::List(value.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for AttrValue {
	fn from(value: [&str; N]) -> Self {
		AttrValue::List(value.iter().map(|s| s.to_string()).collect())
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

macro_rules! attr_value_from_display {
	($($ty:ty),+ $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Literal(value.to_string())
				}
			}
		)+
	};
}

attr_value_from_display!(
	char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Ordered mapping from attribute name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	/// Creates an empty mapping.
	///
	/// # Examples
	///
	/// ```
	/// use tag_helpers_core::Attributes;
	///
	/// let attrs = Attributes::new().with("class", "large").with("id", "thing");
	/// assert_eq!(attrs.len(), 2);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts a value, returning the previous one.
	///
	/// Replacing an existing name keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
		self.entries.insert(name.into(), value.into())
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.get(name)
	}

	pub fn contains_key(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Removes a value, keeping the order of the remaining entries.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.entries.shift_remove(name)
	}

	/// Copies every entry of `other` into `self`; later values win.
	pub fn merge(&mut self, other: Attributes) {
		self.entries.extend(other.entries);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> Iter<'_, String, AttrValue> {
		self.entries.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		attributes.extend(iter);
		attributes
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(value: [(K, V); N]) -> Self {
		value.into_iter().collect()
	}
}

impl From<()> for Attributes {
	fn from(_: ()) -> Self {
		Attributes::new()
	}
}

impl From<&Attributes> for Attributes {
	fn from(value: &Attributes) -> Self {
		value.clone()
	}
}

impl IntoIterator for Attributes {
	type Item = (String, AttrValue);
	type IntoIter = IntoIter<String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = Iter<'a, String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Builds an [`Attributes`] mapping.
///
/// Values may be anything convertible into an [`AttrValue`], including a
/// nested `attrs!` for `data-*` style attributes.
///
/// # Examples
///
/// ```
/// use tag_helpers_core::{attrs, tag};
///
/// let html = tag("div", attrs! {
///     "data" => attrs! { "dojo" => attrs! { "type" => "dijit.form.TextBox" } },
/// }, false);
/// assert_eq!(html, r#"<div data-dojo-type="dijit.form.TextBox" />"#);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::Attributes::new();
		$(attributes.insert($name, $value);)+
		attributes
	}};
}
