//! DOM assertions over rendered HTML fragments.

use scraper::{ElementRef, Html, Selector};

fn parse_selector(selector: &str) -> Selector {
	Selector::parse(selector).unwrap_or_else(|e| panic!("invalid selector {selector:?}: {e:?}"))
}

fn matching<'a>(fragment: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
	fragment.select(&parse_selector(selector)).collect()
}

/// Asserts that `html` contains an element matching `selector` with every
/// listed attribute set to the given value.
pub fn assert_has_tag(html: &str, selector: &str, attributes: &[(&str, &str)]) {
	let fragment = Html::parse_fragment(html);
	let found = matching(&fragment, selector).into_iter().any(|element| {
		attributes
			.iter()
			.all(|(name, value)| element.value().attr(name) == Some(*value))
	});
	assert!(
		found,
		"expected {selector:?} with {attributes:?} in {html:?}"
	);
}

/// Asserts that `html` contains an element matching `selector` whose text is `content`.
pub fn assert_has_content(html: &str, selector: &str, content: &str) {
	let fragment = Html::parse_fragment(html);
	let found = matching(&fragment, selector)
		.into_iter()
		.any(|element| element.text().collect::<String>().trim() == content);
	assert!(found, "expected {selector:?} with content {content:?} in {html:?}");
}

/// Asserts that nothing in `html` matches `selector`.
pub fn assert_has_no_tag(html: &str, selector: &str) {
	let fragment = Html::parse_fragment(html);
	assert!(
		matching(&fragment, selector).is_empty(),
		"expected no {selector:?} in {html:?}"
	);
}
