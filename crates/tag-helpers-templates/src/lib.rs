//! # Tag Helpers Templates
//!
//! Registers the tag helpers with the Tera template engine.
//!
//! ## Example
//!
//! ```rust
//! use tag_helpers_templates::register_tag_helpers;
//! use tera::{Context, Tera};
//!
//! let mut tera = Tera::default();
//! register_tag_helpers(&mut tera);
//! tera.add_raw_template(
//!     "page.html",
//!     r#"{{ content_tag(name="p", content=title, class="test") }}"#,
//! )
//! .unwrap();
//!
//! let mut context = Context::new();
//! context.insert("title", "Tom & Jerry");
//!
//! let html = tera.render("page.html", &context).unwrap();
//! assert_eq!(html, r#"<p class="test">Tom &amp; Jerry</p>"#);
//! ```

pub mod convert;
pub mod functions;

pub use functions::{ContentTagFilter, ContentTagFunction, InputTagFunction, TagFunction};

use tag_helpers_core::TagHelpers;
use tera::Tera;

/// Registers `tag`, `content_tag` and `input_tag` using the default settings.
pub fn register_tag_helpers(tera: &mut Tera) {
	register_tag_helpers_with(tera, TagHelpers::default());
}

/// Registers `tag`, `content_tag` and `input_tag` backed by `helpers`.
///
/// `content_tag` is registered both as a function and as a filter, the latter
/// for block bodies (`{% filter content_tag(name="p") %}...{% endfilter %}`).
pub fn register_tag_helpers_with(tera: &mut Tera, helpers: TagHelpers) {
	tera.register_function("tag", TagFunction::new(helpers.clone()));
	tera.register_function("content_tag", ContentTagFunction::new(helpers.clone()));
	tera.register_function("input_tag", InputTagFunction::new(helpers.clone()));
	tera.register_filter("content_tag", ContentTagFilter::new(helpers));
	tracing::debug!("Registered tag helpers with Tera");
}
