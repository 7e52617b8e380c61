//! Integration tests for the tag builders.
//!
//! Markup is checked through DOM selectors rather than string comparison,
//! except where the exact output is part of the contract.

mod helpers;

use helpers::dom::{assert_has_content, assert_has_no_tag, assert_has_tag};
use rstest::rstest;
use tag_helpers_core::prelude::*;

mod tag_method {
	use super::*;

	#[rstest]
	fn test_no_content_no_attributes() {
		let html = tag("br", attrs!(), false);
		assert_has_tag(html.as_str(), "br", &[]);
	}

	#[rstest]
	fn test_no_content_with_attributes() {
		let html = tag("br", attrs! { "style" => "clear:both", "class" => "yellow" }, false);
		assert_has_tag(
			html.as_str(),
			"br",
			&[("class", "yellow"), ("style", "clear:both")],
		);
	}

	#[rstest]
	fn test_selected_attribute() {
		// Arrange
		let option = tag("option", attrs! { "selected" => true }, false);

		// Act
		let html = content_tag("select", option, attrs!());

		// Assert
		assert_has_tag(html.as_str(), "option", &[("selected", "selected")]);
	}

	#[rstest]
	fn test_data_attributes() {
		let html = tag("a", attrs! { "data" => attrs! { "remote" => true, "method" => "post" } }, false);
		assert_has_tag(
			html.as_str(),
			"a",
			&[("data-remote", "true"), ("data-method", "post")],
		);
	}

	#[rstest]
	fn test_nested_attributes() {
		let html = tag(
			"div",
			attrs! {
				"data" => attrs! {
					"dojo" => attrs! { "type" => "dijit.form.TextBox", "props" => "readOnly: true" },
				},
			},
			false,
		);
		assert_has_tag(
			html.as_str(),
			"div",
			&[
				("data-dojo-type", "dijit.form.TextBox"),
				("data-dojo-props", "readOnly: true"),
			],
		);
	}

	#[rstest]
	fn test_open_tags() {
		let html = tag("p", attrs! { "class" => "demo" }, true);
		assert_eq!(html, "<p class=\"demo\">");
	}

	#[rstest]
	fn test_escape_html() {
		let html = tag("br", attrs! { "class" => "Example <foo> & \"bar\"" }, false);
		assert_eq!(
			html,
			"<br class=\"Example &lt;foo&gt; &amp; &quot;bar&quot;\" />"
		);
	}
}

mod content_tag_method {
	use super::*;

	#[rstest]
	fn test_content_as_parameter() {
		let html = content_tag("p", "Demo", attrs! { "class" => "large", "id" => "thing" });
		assert_has_content(html.as_str(), "p.large#thing", "Demo");
	}

	#[rstest]
	fn test_content_as_block() {
		let html = content_tag_with("p", attrs! { "class" => "large", "id" => "star" }, || "Demo");
		assert_has_content(html.as_str(), "p.large#star", "Demo");
	}

	#[rstest]
	fn test_escape_non_html_safe_content() {
		let html = content_tag_with("p", attrs! { "class" => "large", "id" => "star" }, || "<>");
		assert_has_tag(html.as_str(), "p.large#star", &[]);
		assert!(html.as_str().contains("&lt;&gt;"));
	}

	#[rstest]
	fn test_keep_html_safe_content() {
		let html = content_tag_with("p", attrs! { "class" => "large", "id" => "star" }, || {
			"<>".mark_safe()
		});
		assert_has_content(html.as_str(), "p.large#star", "<>");
		assert!(!html.as_str().contains("&lt;"));
	}

	#[rstest]
	fn test_non_string_content() {
		let html = content_tag("p", 97, attrs!());
		assert_has_content(html.as_str(), "p", "97");
	}

	#[rstest]
	fn test_list_content() {
		let items = vec![
			content_tag("li", "one", attrs!()),
			content_tag("li", "two", attrs!()),
		];
		let html = content_tag("ul", items, attrs! { "class" => "list" });
		assert_has_content(html.as_str(), "ul.list > li", "one");
		assert_has_content(html.as_str(), "ul.list > li", "two");
	}
}

mod input_tag_method {
	use super::*;

	#[rstest]
	fn test_field_with_type() {
		assert_has_tag(input_tag("text", attrs!()).as_str(), "input[type=text]", &[]);
	}

	#[rstest]
	fn test_field_with_type_and_options() {
		let html = input_tag("text", attrs! { "class" => "first", "id" => "texter" });
		assert_has_tag(html.as_str(), "input.first#texter[type=text]", &[]);
	}

	#[rstest]
	fn test_checked_attribute() {
		let html = input_tag("checkbox", attrs! { "checked" => true });
		assert_has_tag(html.as_str(), "input[type=checkbox]", &[("checked", "checked")]);
	}

	#[rstest]
	fn test_checked_attribute_removed_when_false() {
		let html = input_tag("checkbox", attrs! { "checked" => false });
		assert_has_no_tag(html.as_str(), "input[type=checkbox][checked]");
	}

	#[rstest]
	fn test_disabled_attribute() {
		let html = input_tag("checkbox", attrs! { "disabled" => true });
		assert_has_tag(html.as_str(), "input[type=checkbox]", &[("disabled", "disabled")]);
	}
}
