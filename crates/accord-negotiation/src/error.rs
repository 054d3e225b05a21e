//! Error types for content negotiation

use http::StatusCode;

/// Result type for negotiation operations
pub type NegotiationResult<T> = Result<T, NegotiationError>;

/// Reasons a media range or declared media type failed to parse
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	/// A `q` or `qs` value outside `[0, 1]` or with more than three decimals
	#[error("Invalid quality value: {value:?}")]
	InvalidQuality { value: String },

	/// Missing `/`, or an empty or non-token type or subtype
	#[error("Invalid media type: {value:?}")]
	InvalidMediaType { value: String },

	/// `*/subtype` is not a valid media range
	#[error("Wildcard type with concrete subtype: {value:?}")]
	WildcardType { value: String },

	/// The header value contains bytes outside visible ASCII
	#[error("Accept header is not valid visible ASCII")]
	InvalidHeaderEncoding,
}

/// Terminal outcomes of negotiating a single request
///
/// Neither variant is transient; the pipeline renders them as
/// client errors via [`NegotiationError::status_code`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NegotiationError {
	/// The `Accept` header violates the media-range grammar
	#[error("Malformed Accept header: {0}")]
	MalformedAcceptHeader(#[from] ParseError),

	/// No candidate offers a representation the client accepts
	#[error("No acceptable representation available")]
	NotAcceptable,
}

impl NegotiationError {
	/// HTTP status the failure maps to
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::NegotiationError;
	/// use http::StatusCode;
	///
	/// assert_eq!(NegotiationError::NotAcceptable.status_code(), StatusCode::NOT_ACCEPTABLE);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::MalformedAcceptHeader(_) => StatusCode::BAD_REQUEST,
			Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
		}
	}
}

/// Errors raised while loading [`crate::NegotiationSettings`]
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings document is not valid TOML or has mistyped keys
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The fallback media type does not parse or is a wildcard
	#[error("Fallback media type must be a concrete type/subtype: {0:?}")]
	InvalidFallback(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(NegotiationError::NotAcceptable, StatusCode::NOT_ACCEPTABLE)]
	#[case(
		NegotiationError::MalformedAcceptHeader(ParseError::InvalidQuality { value: "1.1".into() }),
		StatusCode::BAD_REQUEST
	)]
	#[case(
		NegotiationError::MalformedAcceptHeader(ParseError::InvalidHeaderEncoding),
		StatusCode::BAD_REQUEST
	)]
	fn test_status_code_mapping(#[case] error: NegotiationError, #[case] expected: StatusCode) {
		assert_eq!(error.status_code(), expected);
	}

	#[rstest]
	fn test_parse_error_converts_into_malformed_header() {
		let error: NegotiationError = ParseError::WildcardType {
			value: "*/html".into(),
		}
		.into();
		assert!(matches!(error, NegotiationError::MalformedAcceptHeader(_)));
		assert!(error.to_string().contains("*/html"));
	}
}
