//! # Tag Helpers Core
//!
//! HTML tag builders for server-rendered views.
//!
//! ## Features
//!
//! - `tag`: self-closing (`<br />`) or open (`<p>`) tags
//! - `content_tag`: `<p>content</p>` with inline or block-produced content
//! - `input_tag`: `<input type="..." />`
//! - Escaping of attribute values and content, with [`SafeString`] for
//!   markup that must pass through untouched
//! - Boolean attributes (`checked="checked"`) and nested `data-*` flattening
//!
//! ## Example
//!
//! ```rust
//! use tag_helpers_core::{attrs, content_tag, input_tag, tag};
//!
//! assert_eq!(tag("br", attrs! { "class" => "clear" }, false), r#"<br class="clear" />"#);
//! assert_eq!(
//!     content_tag("p", "<b>", attrs! { "class" => "large" }),
//!     r#"<p class="large">&lt;b&gt;</p>"#
//! );
//! assert_eq!(
//!     input_tag("checkbox", attrs! { "checked" => true, "disabled" => false }),
//!     r#"<input type="checkbox" checked="checked" />"#
//! );
//! ```

pub mod attributes;
pub mod content;
pub mod error;
pub mod escape;
pub mod settings;
pub mod tag;

pub use attributes::{AttrValue, Attributes};
pub use content::Content;
pub use error::{HelperError, HelperResult};
pub use escape::{MarkSafe, SafeString, escape_html};
pub use settings::{BOOLEAN_ATTRS, DATA_ATTRS, HelperSettings};
pub use tag::{
	TagHelpers, content_tag, content_tag_with, input_tag, is_valid_attribute_name,
	safe_content_tag, tag, validate_tag_name,
};

/// Commonly used types and functions.
pub mod prelude {
	pub use crate::attrs;
	pub use crate::{
		AttrValue, Attributes, Content, MarkSafe, SafeString, TagHelpers, content_tag,
		content_tag_with, input_tag, safe_content_tag, tag,
	};
}
