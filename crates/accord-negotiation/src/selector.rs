//! Choosing a single winner among matched candidates
//!
//! Results are ordered by four keys, applied in turn:
//!
//! 1. weight, highest first
//! 2. specificity tier, most specific first
//! 3. candidate order, earliest registered first
//! 4. declaration order within the candidate, earliest declared first
//!
//! Candidate order and declaration order are unique within their scopes, so
//! the ordering is total and the winner is deterministic.

use crate::error::NegotiationError;
use crate::matcher::MatchResult;
use std::cmp::Ordering;

/// Higher weight sorts first
pub fn by_weight<E>(a: &MatchResult<'_, E>, b: &MatchResult<'_, E>) -> Ordering {
	b.weight.cmp(&a.weight)
}

/// More specific tier sorts first
pub fn by_specificity<E>(a: &MatchResult<'_, E>, b: &MatchResult<'_, E>) -> Ordering {
	b.specificity.cmp(&a.specificity)
}

/// Earlier candidate sorts first
pub fn by_candidate_order<E>(a: &MatchResult<'_, E>, b: &MatchResult<'_, E>) -> Ordering {
	a.candidate_order.cmp(&b.candidate_order)
}

/// Earlier declared type sorts first
pub fn by_declaration_order<E>(a: &MatchResult<'_, E>, b: &MatchResult<'_, E>) -> Ordering {
	a.declaration_order.cmp(&b.declaration_order)
}

/// Full precedence of two results; `Less` means `a` is preferred
pub fn precedence<E>(a: &MatchResult<'_, E>, b: &MatchResult<'_, E>) -> Ordering {
	by_weight(a, b)
		.then_with(|| by_specificity(a, b))
		.then_with(|| by_candidate_order(a, b))
		.then_with(|| by_declaration_order(a, b))
}

/// Sorts results from most to least preferred
pub fn rank<E>(mut results: Vec<MatchResult<'_, E>>) -> Vec<MatchResult<'_, E>> {
	results.sort_by(precedence);
	results
}

/// Picks the most preferred result
///
/// # Errors
///
/// Returns [`NegotiationError::NotAcceptable`] when `results` is empty.
///
/// # Examples
///
/// ```
/// use accord_negotiation::{AcceptHeader, Candidate, match_all, select};
///
/// let candidates = [
///     Candidate::producing("any_text", ["text/*"]).unwrap(),
///     Candidate::producing("plain", ["text/plain"]).unwrap(),
/// ];
/// let accept = AcceptHeader::parse("text/plain").unwrap();
///
/// let winner = select(match_all(Some(&accept), &candidates)).unwrap();
/// assert_eq!(*winner.endpoint(), "plain");
///
/// let accept = AcceptHeader::parse("image/png").unwrap();
/// assert!(select(match_all(Some(&accept), &candidates)).is_err());
/// ```
pub fn select<E>(results: Vec<MatchResult<'_, E>>) -> Result<MatchResult<'_, E>, NegotiationError> {
	results
		.into_iter()
		.min_by(precedence)
		.ok_or(NegotiationError::NotAcceptable)
}
