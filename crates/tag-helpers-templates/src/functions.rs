//! Tera functions and filters backed by [`TagHelpers`]
//!
//! | Template call | Helper |
//! |---------------|--------|
//! | `{{ tag(name="br", class="clear") }}` | `tag` |
//! | `{{ tag(name="p", open=true) }}` | `tag` (opening tag only) |
//! | `{{ content_tag(name="p", content="Hi", id="x") }}` | `content_tag` |
//! | `{{ input_tag(type="checkbox", checked=true) }}` | `input_tag` |
//! | `{% filter content_tag(name="p") %}Hi{% endfilter %}` | `content_tag` with a block |
//!
//! All of them are marked safe: their output is already escaped and Tera
//! must not escape it a second time. The `content_tag` function escapes its
//! `content` unless `escape=false` is passed. The filter works the other way
//! round: its input is a rendered block body (or another helper's output), so
//! it is kept as markup unless `escape=true` is passed.

use crate::convert;
use std::collections::HashMap;
use tag_helpers_core::{HelperError, TagHelpers, validate_tag_name};
use tera::{Filter, Function, Result as TeraResult, Value};

fn to_tera_error(err: HelperError) -> tera::Error {
	tera::Error::msg(err.to_string())
}

fn tag_name<'a>(helper: &'static str, args: &'a HashMap<String, Value>) -> Result<&'a str, HelperError> {
	let name = convert::required_str(helper, args, "name")?;
	validate_tag_name(name)?;
	Ok(name)
}

/// `tag(name, open=false, **attributes)`
#[derive(Debug, Clone, Default)]
pub struct TagFunction {
	helpers: TagHelpers,
}

impl TagFunction {
	pub fn new(helpers: TagHelpers) -> Self {
		Self { helpers }
	}
}

impl Function for TagFunction {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let name = tag_name("tag", args).map_err(to_tera_error)?;
		let open = convert::optional_bool("tag", args, "open", false).map_err(to_tera_error)?;
		let attributes = convert::attributes(args, &["name", "open"]);
		tracing::trace!(tag = name, open, "Rendering tag from template");

		let html = self.helpers.tag(name, attributes, open);
		Ok(Value::String(html.into_string()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

/// `content_tag(name, content=null, escape=true, **attributes)`
#[derive(Debug, Clone, Default)]
pub struct ContentTagFunction {
	helpers: TagHelpers,
}

impl ContentTagFunction {
	pub fn new(helpers: TagHelpers) -> Self {
		Self { helpers }
	}
}

impl Function for ContentTagFunction {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let name = tag_name("content_tag", args).map_err(to_tera_error)?;
		let escape =
			convert::optional_bool("content_tag", args, "escape", true).map_err(to_tera_error)?;
		let content = convert::content(
			"content_tag",
			args.get("content").unwrap_or(&Value::Null),
			escape,
		)
		.map_err(to_tera_error)?;
		let attributes = convert::attributes(args, &["name", "content", "escape"]);
		tracing::trace!(tag = name, "Rendering content tag from template");

		let html = self.helpers.content_tag(name, content, attributes);
		Ok(Value::String(html.into_string()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

/// `input_tag(type, **attributes)`
#[derive(Debug, Clone, Default)]
pub struct InputTagFunction {
	helpers: TagHelpers,
}

impl InputTagFunction {
	pub fn new(helpers: TagHelpers) -> Self {
		Self { helpers }
	}
}

impl Function for InputTagFunction {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let input_type = convert::required_str("input_tag", args, "type").map_err(to_tera_error)?;
		let attributes = convert::attributes(args, &["type"]);
		tracing::trace!(input_type, "Rendering input tag from template");

		let html = self.helpers.input_tag(input_type, attributes);
		Ok(Value::String(html.into_string()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

/// `value | content_tag(name, escape=false, **attributes)`
///
/// Used as a filter section, the rendered block body becomes the content.
/// Expressions inside the body were already escaped by Tera, so the body is
/// not escaped again:
///
/// ```text
/// {% filter content_tag(name="p", class="test") %}
///   <span>{{ title }}</span>
/// {% endfilter %}
/// ```
///
/// Raw values piped into the filter need `escape=true`
/// (`{{ title | content_tag(name="p", escape=true) }}`).
#[derive(Debug, Clone, Default)]
pub struct ContentTagFilter {
	helpers: TagHelpers,
}

impl ContentTagFilter {
	pub fn new(helpers: TagHelpers) -> Self {
		Self { helpers }
	}
}

impl Filter for ContentTagFilter {
	fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let name = tag_name("content_tag", args).map_err(to_tera_error)?;
		let escape =
			convert::optional_bool("content_tag", args, "escape", false).map_err(to_tera_error)?;
		let content = convert::content("content_tag", value, escape).map_err(to_tera_error)?;
		let attributes = convert::attributes(args, &["name", "escape"]);
		tracing::trace!(tag = name, "Rendering content tag block from template");

		let html = self.helpers.content_tag(name, content, attributes);
		Ok(Value::String(html.into_string()))
	}

	fn is_safe(&self) -> bool {
		true
	}
}
