//! Conversion of Tera values into helper arguments
//!
//! Tera hands keyword arguments over as an unordered map, so every keyword
//! that is not reserved by a helper becomes an attribute, in name order.
//! Keyword names cannot contain dashes in Tera, so `_` is turned into `-`
//! (`aria_label` renders as `aria-label`).

use std::collections::HashMap;
use tag_helpers_core::{AttrValue, Attributes, Content, HelperError, HelperResult, SafeString};
use tera::Value;

/// Converts a JSON value into an attribute value.
///
/// - strings and numbers become literals
/// - booleans become flags
/// - arrays become space-joined lists
/// - objects become nested mappings
/// - `null` is absent
pub fn attr_value(value: &Value) -> AttrValue {
	match value {
		Value::Null => AttrValue::Absent,
		Value::Bool(flag) => AttrValue::Flag(*flag),
		Value::Number(number) => AttrValue::Literal(number.to_string()),
		Value::String(text) => AttrValue::Literal(text.clone()),
		Value::Array(items) => AttrValue::List(items.iter().map(scalar_text).collect()),
		Value::Object(map) => AttrValue::Nested(
			map.iter()
				.map(|(key, value)| (key.clone(), attr_value(value)))
				.collect(),
		),
	}
}

/// Converts a JSON value into element content.
///
/// With `escape == false` text is trusted and passed through as markup.
pub fn content(helper: &'static str, value: &Value, escape: bool) -> HelperResult<Content> {
	let content = match value {
		Value::Null => Content::Empty,
		Value::String(text) if escape => Content::Text(text.clone()),
		Value::String(text) => Content::Safe(SafeString::new(text.clone())),
		Value::Bool(_) | Value::Number(_) if escape => Content::Text(scalar_text(value)),
		Value::Bool(_) | Value::Number(_) => Content::Safe(SafeString::new(scalar_text(value))),
		Value::Array(items) => Content::List(
			items
				.iter()
				.map(|item| content(helper, item, escape))
				.collect::<HelperResult<Vec<_>>>()?,
		),
		Value::Object(_) => {
			return Err(HelperError::InvalidArgument {
				helper,
				argument: "content".to_string(),
				message: "objects cannot be rendered as content".to_string(),
			});
		}
	};
	Ok(content)
}

/// Collects every argument not listed in `reserved` into attributes, sorted by name.
pub fn attributes(args: &HashMap<String, Value>, reserved: &[&str]) -> Attributes {
	let mut names: Vec<&String> = args
		.keys()
		.filter(|name| !reserved.contains(&name.as_str()))
		.collect();
	names.sort();

	names
		.into_iter()
		.map(|name| (name.replace('_', "-"), attr_value(&args[name])))
		.collect()
}

/// Reads a required string argument.
pub fn required_str<'a>(
	helper: &'static str,
	args: &'a HashMap<String, Value>,
	argument: &'static str,
) -> HelperResult<&'a str> {
	match args.get(argument) {
		Some(Value::String(text)) => Ok(text.as_str()),
		Some(other) => Err(HelperError::InvalidArgument {
			helper,
			argument: argument.to_string(),
			message: format!("expected a string, got {}", other),
		}),
		None => Err(HelperError::MissingArgument { helper, argument }),
	}
}

/// Reads an optional boolean argument.
pub fn optional_bool(
	helper: &'static str,
	args: &HashMap<String, Value>,
	argument: &'static str,
	default: bool,
) -> HelperResult<bool> {
	match args.get(argument) {
		None | Some(Value::Null) => Ok(default),
		Some(Value::Bool(flag)) => Ok(*flag),
		Some(other) => Err(HelperError::InvalidArgument {
			helper,
			argument: argument.to_string(),
			message: format!("expected a boolean, got {}", other),
		}),
	}
}

fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!("x"), AttrValue::Literal("x".to_string()))]
	#[case(json!(97), AttrValue::Literal("97".to_string()))]
	#[case(json!(1.5), AttrValue::Literal("1.5".to_string()))]
	#[case(json!(true), AttrValue::Flag(true))]
	#[case(json!(null), AttrValue::Absent)]
	#[case(json!(["a", 1]), AttrValue::List(vec!["a".to_string(), "1".to_string()]))]
	fn test_attr_value(#[case] value: Value, #[case] expected: AttrValue) {
		assert_eq!(attr_value(&value), expected);
	}

	#[rstest]
	fn test_attr_value_object_is_nested() {
		let value = json!({"dojo": {"type": "x"}});
		let expected = AttrValue::Nested(
			[("dojo", AttrValue::Nested([("type", "x")].into()))].into(),
		);
		assert_eq!(attr_value(&value), expected);
	}

	#[rstest]
	fn test_attributes_skip_reserved_and_sort() {
		// Arrange
		let args: HashMap<String, Value> = [
			("name".to_string(), json!("p")),
			("id".to_string(), json!("test1")),
			("class".to_string(), json!("test")),
			("aria_label".to_string(), json!("Label")),
		]
		.into();

		// Act
		let attrs = attributes(&args, &["name"]);

		// Assert
		let names: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(names, vec!["aria-label", "class", "id"]);
	}

	#[rstest]
	fn test_content_escape_flag() {
		assert_eq!(
			content("content_tag", &json!("<b>"), true).unwrap(),
			Content::Text("<b>".to_string())
		);
		assert_eq!(
			content("content_tag", &json!("<b>"), false).unwrap(),
			Content::Safe(SafeString::new("<b>"))
		);
		assert_eq!(
			content("content_tag", &json!(97), true).unwrap(),
			Content::Text("97".to_string())
		);
	}

	#[rstest]
	fn test_content_rejects_objects() {
		let result = content("content_tag", &json!({"a": 1}), true);
		assert!(matches!(result, Err(HelperError::InvalidArgument { .. })));
	}

	#[rstest]
	fn test_required_str() {
		let args: HashMap<String, Value> = [("name".to_string(), json!(1))].into();
		assert!(matches!(
			required_str("tag", &args, "name"),
			Err(HelperError::InvalidArgument { .. })
		));
		assert!(matches!(
			required_str("tag", &HashMap::new(), "name"),
			Err(HelperError::MissingArgument { helper: "tag", argument: "name" })
		));
	}

	#[rstest]
	fn test_optional_bool() {
		let args: HashMap<String, Value> = [("open".to_string(), json!(true))].into();
		assert!(optional_bool("tag", &args, "open", false).unwrap());
		assert!(!optional_bool("tag", &HashMap::new(), "open", false).unwrap());
		let bad: HashMap<String, Value> = [("open".to_string(), json!("yes"))].into();
		assert!(optional_bool("tag", &bad, "open", false).is_err());
	}
}
