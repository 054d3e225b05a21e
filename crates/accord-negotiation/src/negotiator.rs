//! The negotiation pipeline: parse, match, select

use crate::accept::AcceptHeader;
use crate::candidate::Candidate;
use crate::error::{NegotiationError, NegotiationResult, SettingsError};
use crate::matcher::{MatchResult, match_all};
use crate::media_type::MediaType;
use crate::selector::rank;
use crate::settings::NegotiationSettings;

/// The outcome of a successful negotiation
#[derive(Debug)]
pub struct Selection<'a, E> {
	/// The winning candidate and how it matched
	pub result: MatchResult<'a, E>,
	/// The concrete type to stamp on the response
	pub media_type: MediaType,
}

impl<E> Clone for Selection<'_, E> {
	fn clone(&self) -> Self {
		Self {
			result: self.result.clone(),
			media_type: self.media_type.clone(),
		}
	}
}

impl<'a, E> Selection<'a, E> {
	pub fn endpoint(&self) -> &'a E {
		self.result.endpoint()
	}
}

/// Selects a representation for each request
///
/// A `Negotiator` holds only immutable settings and can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use accord_negotiation::{Candidate, Negotiator};
///
/// let candidates = [
///     Candidate::producing("get_foo", ["application/foo"]).unwrap(),
///     Candidate::producing("get_bar", ["application/bar"]).unwrap(),
/// ];
/// let negotiator = Negotiator::new();
///
/// let selection = negotiator
///     .negotiate(&["application/foo;q=0.4, application/bar"], &candidates)
///     .unwrap();
/// assert_eq!(*selection.endpoint(), "get_bar");
/// assert_eq!(selection.media_type.essence(), "application/bar");
///
/// assert!(negotiator.negotiate(&["application/foo;q=1.1"], &candidates).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Negotiator {
	fallback: MediaType,
}

impl Negotiator {
	/// Creates a negotiator with default settings
	pub fn new() -> Self {
		Self {
			fallback: MediaType::new("application", "octet-stream"),
		}
	}

	/// Creates a negotiator from settings, validating them
	pub fn with_settings(settings: &NegotiationSettings) -> Result<Self, SettingsError> {
		Ok(Self {
			fallback: settings.fallback()?,
		})
	}

	/// Media type used when negotiation leaves the type open
	pub fn fallback_media_type(&self) -> &MediaType {
		&self.fallback
	}

	/// Negotiates from raw Accept header values
	///
	/// An empty `accept_values` slice means the request had no Accept header.
	///
	/// # Errors
	///
	/// [`NegotiationError::MalformedAcceptHeader`] when any value fails to
	/// parse, [`NegotiationError::NotAcceptable`] when no candidate matches.
	pub fn negotiate<'a, E, S>(
		&self,
		accept_values: &[S],
		candidates: &'a [Candidate<E>],
	) -> NegotiationResult<Selection<'a, E>>
	where
		S: AsRef<str>,
	{
		let accept = AcceptHeader::parse_all(accept_values).map_err(|error| {
			tracing::debug!(%error, "rejecting request with malformed Accept header");
			NegotiationError::from(error)
		})?;
		self.negotiate_parsed(accept.as_ref(), candidates)
	}

	/// Negotiates from an already parsed header; `None` means no header
	///
	/// Results are tried in precedence order. A result whose type stays a
	/// wildcard takes the fallback type, but only when both the declared
	/// type and the client range allow it; otherwise the next result is
	/// tried.
	pub fn negotiate_parsed<'a, E>(
		&self,
		accept: Option<&AcceptHeader>,
		candidates: &'a [Candidate<E>],
	) -> NegotiationResult<Selection<'a, E>> {
		let selection = rank(match_all(accept, candidates))
			.into_iter()
			.find_map(|result| {
				let media_type = self.resolve(&result)?;
				Some(Selection { result, media_type })
			});

		let Some(selection) = selection else {
			tracing::debug!(
				candidates = candidates.len(),
				"no acceptable representation among candidates"
			);
			return Err(NegotiationError::NotAcceptable);
		};

		tracing::debug!(
			candidate_order = selection.result.candidate_order,
			media_type = %selection.media_type,
			weight = %selection.result.weight,
			"negotiated response representation"
		);
		Ok(selection)
	}

	fn resolve<E>(&self, result: &MatchResult<'_, E>) -> Option<MediaType> {
		let media_type = result
			.concrete_type()
			.or_else(|| result.admits(&self.fallback).then(|| self.fallback.clone()));
		if media_type.is_none() {
			tracing::trace!(
				candidate_order = result.candidate_order,
				fallback = %self.fallback,
				"open media type does not admit the fallback"
			);
		}
		media_type
	}
}

impl Default for Negotiator {
	fn default() -> Self {
		Self::new()
	}
}
