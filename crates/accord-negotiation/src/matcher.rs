//! Matching client ranges against every candidate's declared types
//!
//! Each candidate contributes at most one [`MatchResult`]: the best pairing
//! of one of its declared types with one of the client's ranges.

use crate::accept::{AcceptHeader, MediaRange};
use crate::candidate::{Candidate, DeclaredType};
use crate::media_type::MediaType;
use crate::quality::Weight;
use crate::score::{Score, Specificity, score};
use std::cmp::Ordering;

/// The best representation one candidate can offer for this request
#[derive(Debug)]
pub struct MatchResult<'a, E> {
	pub candidate: &'a Candidate<E>,
	/// Position of the candidate in the routing order
	pub candidate_order: usize,
	pub declared: &'a DeclaredType,
	/// Position of `declared` within the candidate's declared types
	pub declaration_order: usize,
	/// The client range that produced the score; `None` without an Accept header
	pub range: Option<MediaRange>,
	pub specificity: Specificity,
	pub weight: Weight,
}

impl<E> Clone for MatchResult<'_, E> {
	fn clone(&self) -> Self {
		Self {
			candidate: self.candidate,
			candidate_order: self.candidate_order,
			declared: self.declared,
			declaration_order: self.declaration_order,
			range: self.range.clone(),
			specificity: self.specificity,
			weight: self.weight,
		}
	}
}

impl<'a, E> MatchResult<'a, E> {
	pub fn endpoint(&self) -> &'a E {
		self.candidate.endpoint()
	}

	/// The concrete media type to put on the response, if one is determined
	///
	/// A concrete declared type is used as is. A wildcard declaration takes
	/// the more specific of itself and the client range; `None` means both
	/// sides left it open and the caller must pick a fallback.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::{AcceptHeader, Candidate, match_all};
	///
	/// let candidates = [Candidate::producing("get", ["text/*"]).unwrap()];
	/// let accept = AcceptHeader::parse("text/plain").unwrap();
	/// let results = match_all(Some(&accept), &candidates);
	/// assert_eq!(results[0].concrete_type().unwrap().essence(), "text/plain");
	/// ```
	pub fn concrete_type(&self) -> Option<MediaType> {
		let declared = &self.declared.media_type;
		let chosen = match &self.range {
			Some(range) if range.media_type.specificity() > declared.specificity() => {
				&range.media_type
			}
			_ => declared,
		};
		chosen.is_concrete().then(|| chosen.clone())
	}

	/// Returns true when both the declared type and the client range allow
	/// `media_type`
	pub fn admits(&self, media_type: &MediaType) -> bool {
		self.declared.media_type.is_compatible(media_type)
			&& self
				.range
				.as_ref()
				.is_none_or(|range| range.media_type.is_compatible(media_type))
	}
}

/// A scored pairing inside one candidate, before it becomes a result
struct Pairing<'a, 'h> {
	declaration_order: usize,
	declared: &'a DeclaredType,
	range: Option<&'h MediaRange>,
	score: Score,
}

/// Ranks two pairings of the same candidate; `Less` is better
///
/// Higher weight first, then the more specific tier, then the earliest
/// declared type. Client listing order is never consulted.
fn compare_pairings(a: &Pairing<'_, '_>, b: &Pairing<'_, '_>) -> Ordering {
	b.score
		.weight
		.cmp(&a.score.weight)
		.then_with(|| b.score.specificity.cmp(&a.score.specificity))
		.then_with(|| a.declaration_order.cmp(&b.declaration_order))
}

fn best_pairing<'a, 'h, E>(
	accept: &'h AcceptHeader,
	candidate: &'a Candidate<E>,
) -> Option<Pairing<'a, 'h>> {
	candidate
		.declared_types()
		.iter()
		.enumerate()
		.flat_map(|(declaration_order, declared)| {
			accept.ranges().iter().filter_map(move |range| {
				score(range, declared).map(|score| Pairing {
					declaration_order,
					declared,
					range: Some(range),
					score,
				})
			})
		})
		.filter(|pairing| !pairing.score.is_excluded())
		// min_by keeps the first of equal elements, i.e. the earliest client range
		.min_by(compare_pairings)
}

/// Without an Accept header every candidate offers its first declared type
fn default_pairing<E>(candidate: &Candidate<E>) -> Option<Pairing<'_, 'static>> {
	candidate.declared_types().first().map(|declared| Pairing {
		declaration_order: 0,
		declared,
		range: None,
		score: Score {
			specificity: Specificity::FullWildcard,
			weight: Weight::ONE,
		},
	})
}

/// Scores every candidate and keeps each one's best pairing
///
/// `accept` is `None` when the request carried no Accept header. Candidates
/// with no pairing of non-zero weight are dropped. The result is in
/// candidate order but otherwise unsorted.
///
/// # Examples
///
/// ```
/// use accord_negotiation::{AcceptHeader, Candidate, match_all};
///
/// let candidates = [
///     Candidate::producing("foo", ["application/foo"]).unwrap(),
///     Candidate::producing("bar", ["application/bar"]).unwrap(),
/// ];
/// let accept = AcceptHeader::parse("application/bar").unwrap();
///
/// let results = match_all(Some(&accept), &candidates);
/// assert_eq!(results.len(), 1);
/// assert_eq!(*results[0].endpoint(), "bar");
/// ```
pub fn match_all<'a, E>(
	accept: Option<&AcceptHeader>,
	candidates: &'a [Candidate<E>],
) -> Vec<MatchResult<'a, E>> {
	candidates
		.iter()
		.enumerate()
		.filter_map(|(candidate_order, candidate)| {
			let pairing = match accept {
				Some(accept) => best_pairing(accept, candidate),
				None => default_pairing(candidate),
			};
			if pairing.is_none() {
				tracing::trace!(candidate_order, "candidate has no acceptable representation");
			}

			pairing.map(|pairing| MatchResult {
				candidate,
				candidate_order,
				declared: pairing.declared,
				declaration_order: pairing.declaration_order,
				range: pairing.range.cloned(),
				specificity: pairing.score.specificity,
				weight: pairing.score.weight,
			})
		})
		.collect()
}
