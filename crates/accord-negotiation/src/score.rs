//! Scoring a client media range against a declared media type

use crate::accept::MediaRange;
use crate::candidate::DeclaredType;
use crate::quality::Weight;

/// How exactly a range and a declared type line up
///
/// Variants are ordered from least to most specific, so `Exact` compares
/// greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
	/// `*/*` on either side
	FullWildcard,
	/// Types agree, `*` subtype on either side
	SubtypeWildcard,
	/// Both type and subtype agree literally
	Exact,
}

/// Outcome of a matching range/declared pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
	pub specificity: Specificity,
	pub weight: Weight,
}

impl Score {
	/// A zero weight can never be selected
	pub fn is_excluded(&self) -> bool {
		self.weight.is_excluded()
	}
}

/// Scores `range` against `declared`, or `None` when they do not match
///
/// The tier is the lower of the two sides' specificities, and the weight is
/// the client quality times the declared quality.
///
/// # Examples
///
/// ```
/// use accord_negotiation::{DeclaredType, MediaRange, Specificity, score};
///
/// let range = MediaRange::parse("text/*;q=0.5").unwrap();
/// let declared = DeclaredType::parse("text/plain;qs=0.5").unwrap();
///
/// let s = score(&range, &declared).unwrap();
/// assert_eq!(s.specificity, Specificity::SubtypeWildcard);
/// assert_eq!(s.weight.as_f64(), 0.25);
///
/// let other = MediaRange::parse("image/png").unwrap();
/// assert!(score(&other, &declared).is_none());
/// ```
pub fn score(range: &MediaRange, declared: &DeclaredType) -> Option<Score> {
	if !range.media_type.is_compatible(&declared.media_type) {
		return None;
	}

	Some(Score {
		specificity: range
			.media_type
			.specificity()
			.min(declared.media_type.specificity()),
		weight: Weight::combine(range.quality, declared.quality),
	})
}
