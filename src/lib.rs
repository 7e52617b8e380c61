//! # Tag Helpers
//!
//! HTML tag helpers for server-rendered views: `tag`, `content_tag` and
//! `input_tag`, with attribute escaping, boolean attributes, nested `data-*`
//! flattening, and pre-escaped [`SafeString`] content.
//!
//! ## Feature Flags
//!
//! - `templates` (default) - Tera functions and filters for the helpers
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use tag_helpers::prelude::*;
//!
//! let option = tag("option", attrs! { "selected" => true, "value" => 1 }, false);
//! let select = content_tag("select", option, attrs! { "name" => "size" });
//! assert_eq!(
//!     select,
//!     r#"<select name="size"><option selected="selected" value="1" /></select>"#
//! );
//!
//! let link = content_tag("a", "Delete", attrs! {
//!     "href" => "/posts/1",
//!     "data" => attrs! { "confirm" => "Sure?" },
//! });
//! assert_eq!(link, r#"<a href="/posts/1" data-confirm="Sure?">Delete</a>"#);
//! ```
//!
//! ## Templates
//!
//! ```rust,ignore
//! use tag_helpers::templates::register_tag_helpers;
//!
//! let mut tera = tera::Tera::default();
//! register_tag_helpers(&mut tera);
//! // {{ content_tag(name="p", content="Hello", class="greeting") }}
//! ```

pub use tag_helpers_core::*;

/// Tera integration.
#[cfg(feature = "templates")]
pub mod templates {
	pub use tag_helpers_templates::*;
}
