//! Error types for the tag helpers.
//!
//! Building tags never fails. These errors come from the edges of the crate:
//! loading settings and validating arguments handed over by template engines.

use thiserror::Error;

/// Errors that can occur outside of tag building itself.
#[derive(Debug, Error)]
pub enum HelperError {
	/// Settings could not be deserialized.
	#[error("Invalid helper settings: {0}")]
	InvalidSettings(#[from] toml::de::Error),

	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Tag name is not a valid HTML element name.
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// A required helper argument was not supplied.
	#[error("{helper}: missing required argument `{argument}`")]
	MissingArgument {
		/// Helper that was called.
		helper: &'static str,
		/// Name of the missing argument.
		argument: &'static str,
	},

	/// A helper argument had an unusable value.
	#[error("{helper}: invalid argument `{argument}`: {message}")]
	InvalidArgument {
		/// Helper that was called.
		helper: &'static str,
		/// Name of the offending argument.
		argument: String,
		/// Why the value was rejected.
		message: String,
	},
}

/// Result type alias for helper operations.
pub type HelperResult<T> = Result<T, HelperError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_argument_display() {
		let err = HelperError::MissingArgument {
			helper: "content_tag",
			argument: "name",
		};
		assert_eq!(
			err.to_string(),
			"content_tag: missing required argument `name`"
		);
	}

	#[rstest]
	fn test_invalid_tag_name_display() {
		let err = HelperError::InvalidTagName("<script>".to_string());
		assert_eq!(err.to_string(), "Invalid tag name: \"<script>\"");
	}

	#[rstest]
	fn test_invalid_argument_display() {
		let err = HelperError::InvalidArgument {
			helper: "tag",
			argument: "open".to_string(),
			message: "expected a boolean".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"tag: invalid argument `open`: expected a boolean"
		);
	}
}
