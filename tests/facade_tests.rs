//! Facade re-exports: the helpers and the Tera adapter work through `tag_helpers`.

use rstest::rstest;
use tag_helpers::prelude::*;
use tag_helpers::templates::register_tag_helpers;
use tera::{Context, Tera};

#[rstest]
fn test_helpers_through_facade() {
	let html = content_tag("p", 97, attrs! { "class" => "count" });
	assert_eq!(html, r#"<p class="count">97</p>"#);
}

#[rstest]
fn test_same_output_from_rust_and_tera() {
	// Arrange
	let mut tera = Tera::default();
	register_tag_helpers(&mut tera);
	tera.add_raw_template(
		"p.html",
		r#"{{ content_tag(name="p", content="Test 1", class="test", id="test1") }}"#,
	)
	.unwrap();

	// Act
	let from_template = tera.render("p.html", &Context::new()).unwrap();
	let from_rust = content_tag("p", "Test 1", attrs! { "class" => "test", "id" => "test1" });

	// Assert
	assert_eq!(from_rust, from_template);
}
