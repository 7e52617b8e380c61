//! Test helpers for tag-helpers-core integration tests.
//!
//! Rendered markup is parsed back into a DOM and checked with CSS selectors,
//! so assertions do not depend on attribute order or whitespace.

#[path = "helpers/dom.rs"]
pub mod dom;
