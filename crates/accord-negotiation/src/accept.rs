//! Accept header parsing
//!
//! Every header occurrence may carry a comma-separated list of media ranges.
//! All occurrences are flattened into one sequence that keeps header order
//! and in-header order. Quality values are validated strictly; any violation
//! rejects the whole header.

use crate::error::ParseError;
use crate::media_type::{MediaType, parse_parameter, split_unquoted};
use crate::quality::{Quality, quality_parameter};
use std::fmt;

/// A single client media range with its quality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRange {
	pub media_type: MediaType,
	pub quality: Quality,
}

impl MediaRange {
	/// Creates a range with `q=1`
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::{MediaRange, MediaType, Quality};
	///
	/// let range = MediaRange::new(MediaType::new("text", "*"));
	/// assert_eq!(range.quality, Quality::ONE);
	/// ```
	pub fn new(media_type: MediaType) -> Self {
		Self {
			media_type,
			quality: Quality::ONE,
		}
	}

	pub fn with_quality(mut self, quality: Quality) -> Self {
		self.quality = quality;
		self
	}

	/// Parses one element of an Accept header list
	///
	/// Parameters before `q` are media type parameters. `q` sets the quality
	/// and everything after it is an accept extension, which is dropped. The
	/// `q` value must be a bare qvalue; quoting it or omitting it is an error.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::MediaRange;
	///
	/// let range = MediaRange::parse("text/html;level=1;q=0.7;ext=x").unwrap();
	/// assert_eq!(range.media_type.parameter("level"), Some("1"));
	/// assert_eq!(range.media_type.parameter("ext"), None);
	/// assert_eq!(range.quality.millis(), 700);
	///
	/// assert!(MediaRange::parse("text/html;q=1.1").is_err());
	/// ```
	pub fn parse(input: &str) -> Result<Self, ParseError> {
		let mut segments = split_unquoted(input, b';');
		let essence = segments.next().unwrap_or_default();
		let mut range = Self::new(MediaType::parse_essence(essence, input)?);

		for segment in segments {
			if let Some(quality) = quality_parameter(segment, "q") {
				range.quality = quality?;
				break;
			}
			if let Some((name, value)) = parse_parameter(segment) {
				range.media_type.insert_parameter(name, value);
			}
		}
		Ok(range)
	}
}

impl fmt::Display for MediaRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.media_type)?;
		if self.quality != Quality::ONE {
			write!(f, ";q={}", self.quality)?;
		}
		Ok(())
	}
}

/// The parsed media ranges of a request, in client order
///
/// An `AcceptHeader` with no ranges means the header was present but empty,
/// which is different from a request carrying no Accept header at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptHeader {
	ranges: Vec<MediaRange>,
}

impl AcceptHeader {
	/// Parses a single Accept header value
	///
	/// Empty list elements are skipped.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json, text/html; q=0.9").unwrap();
	/// assert_eq!(accept.ranges().len(), 2);
	/// // Client order is kept; nothing is sorted here
	/// assert_eq!(accept.ranges()[0].media_type.subtype(), "json");
	/// assert_eq!(accept.ranges()[1].quality.millis(), 900);
	///
	/// assert!(AcceptHeader::parse("application/foo;q=0.1234").is_err());
	/// ```
	pub fn parse(value: &str) -> Result<Self, ParseError> {
		let mut ranges = Vec::new();
		extend_ranges(value, &mut ranges)?;
		Ok(Self { ranges })
	}

	/// Parses every occurrence of the header for one request
	///
	/// Returns `Ok(None)` when `values` is empty, i.e. the client expressed no
	/// preference at all.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse_all(["application/foo", "application/bar;q=0.4, application/baz;q=0.2"])
	///     .unwrap()
	///     .unwrap();
	/// assert_eq!(accept.ranges().len(), 3);
	///
	/// let none: [&str; 0] = [];
	/// assert!(AcceptHeader::parse_all(none).unwrap().is_none());
	/// ```
	pub fn parse_all<I, S>(values: I) -> Result<Option<Self>, ParseError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut present = false;
		let mut ranges = Vec::new();
		for value in values {
			present = true;
			extend_ranges(value.as_ref(), &mut ranges)?;
		}
		Ok(present.then_some(Self { ranges }))
	}

	pub fn ranges(&self) -> &[MediaRange] {
		&self.ranges
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}
}

fn extend_ranges(value: &str, ranges: &mut Vec<MediaRange>) -> Result<(), ParseError> {
	for element in split_unquoted(value, b',') {
		if element.trim().is_empty() {
			continue;
		}
		ranges.push(MediaRange::parse(element)?);
	}
	Ok(())
}

impl FromIterator<MediaRange> for AcceptHeader {
	fn from_iter<T: IntoIterator<Item = MediaRange>>(iter: T) -> Self {
		Self {
			ranges: iter.into_iter().collect(),
		}
	}
}
