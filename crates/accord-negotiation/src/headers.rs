//! Glue between negotiation and `http` request/response types

use crate::candidate::Candidate;
use crate::error::{NegotiationResult, ParseError};
use crate::negotiator::{Negotiator, Selection};
use http::header::{ACCEPT, InvalidHeaderValue};
use http::{HeaderMap, HeaderValue};

/// Collects every `Accept` occurrence in request order
///
/// # Errors
///
/// [`ParseError::InvalidHeaderEncoding`] when a value is not visible ASCII.
///
/// # Examples
///
/// ```
/// use accord_negotiation::headers::accept_values;
/// use http::header::{ACCEPT, HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.append(ACCEPT, HeaderValue::from_static("text/html"));
/// headers.append(ACCEPT, HeaderValue::from_static("application/json;q=0.5"));
///
/// assert_eq!(accept_values(&headers).unwrap(), vec!["text/html", "application/json;q=0.5"]);
/// ```
pub fn accept_values(headers: &HeaderMap) -> Result<Vec<&str>, ParseError> {
	headers
		.get_all(ACCEPT)
		.iter()
		.map(|value| value.to_str().map_err(|_| ParseError::InvalidHeaderEncoding))
		.collect()
}

impl Negotiator {
	/// Negotiates straight from a request's header map
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::{Candidate, Negotiator};
	/// use http::header::{ACCEPT, HeaderMap, HeaderValue};
	/// use http::StatusCode;
	///
	/// let candidates = [Candidate::producing("get", ["application/json"]).unwrap()];
	/// let mut headers = HeaderMap::new();
	/// headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
	///
	/// let error = Negotiator::new().negotiate_headers(&headers, &candidates).unwrap_err();
	/// assert_eq!(error.status_code(), StatusCode::NOT_ACCEPTABLE);
	/// ```
	pub fn negotiate_headers<'a, E>(
		&self,
		headers: &HeaderMap,
		candidates: &'a [Candidate<E>],
	) -> NegotiationResult<Selection<'a, E>> {
		let values = accept_values(headers).inspect_err(|error| {
			tracing::debug!(%error, "rejecting request with undecodable Accept header");
		})?;
		self.negotiate(values.as_slice(), candidates)
	}
}

impl<E> Selection<'_, E> {
	/// The negotiated type as a `Content-Type` header value
	pub fn content_type(&self) -> Result<HeaderValue, InvalidHeaderValue> {
		HeaderValue::from_str(&self.media_type.to_string())
	}
}
