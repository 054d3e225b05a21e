//! Candidate endpoints and the media types they declare
//!
//! Routing hands the negotiator an ordered slice of [`Candidate`]s. A
//! candidate's position in that slice is its candidate order, and a declared
//! type's position in its candidate's list is its declaration order. Both
//! orders are positional so they cannot drift out of sync with the data.

use crate::error::ParseError;
use crate::media_type::{MediaType, parse_parameter, split_unquoted};
use crate::quality::{Quality, quality_parameter};
use std::fmt;
use std::sync::Arc;

/// Parameter carrying the server-side quality of a declared type
const SERVER_QUALITY_PARAM: &str = "qs";

/// A media type an endpoint can produce, with its server quality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
	pub media_type: MediaType,
	/// Author preference among the endpoint's own types, `qs` in declarations
	pub quality: Quality,
}

impl DeclaredType {
	/// Declares a media type with server quality `1`
	pub fn new(media_type: MediaType) -> Self {
		Self {
			media_type,
			quality: Quality::ONE,
		}
	}

	/// The implicit `*/*` of an endpoint that declares nothing
	pub fn wildcard() -> Self {
		Self::new(MediaType::wildcard())
	}

	pub fn with_quality(mut self, quality: Quality) -> Self {
		self.quality = quality;
		self
	}

	/// Parses a declaration such as `application/xml;qs=0.5`
	///
	/// `qs` follows the same strict grammar as the client `q` parameter.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::DeclaredType;
	///
	/// let xml = DeclaredType::parse("application/xml; qs=0.5").unwrap();
	/// assert_eq!(xml.media_type.essence(), "application/xml");
	/// assert_eq!(xml.quality.millis(), 500);
	///
	/// assert!(DeclaredType::parse("application/xml;qs=1.5").is_err());
	/// ```
	pub fn parse(input: &str) -> Result<Self, ParseError> {
		let mut segments = split_unquoted(input, b';');
		let essence = segments.next().unwrap_or_default();
		let mut declared = Self::new(MediaType::parse_essence(essence, input)?);

		for segment in segments {
			if let Some(quality) = quality_parameter(segment, SERVER_QUALITY_PARAM) {
				declared.quality = quality?;
			} else if let Some((name, value)) = parse_parameter(segment) {
				declared.media_type.insert_parameter(name, value);
			}
		}
		Ok(declared)
	}
}

impl From<MediaType> for DeclaredType {
	fn from(media_type: MediaType) -> Self {
		Self::new(media_type)
	}
}

impl fmt::Display for DeclaredType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.media_type)?;
		if self.quality != Quality::ONE {
			write!(f, ";{SERVER_QUALITY_PARAM}={}", self.quality)?;
		}
		Ok(())
	}
}

/// An endpoint under negotiation
///
/// The declared list is immutable and shared, so a router can build its
/// candidates once and reuse them across concurrent requests.
#[derive(Debug, Clone)]
pub struct Candidate<E> {
	endpoint: E,
	declared: Arc<[DeclaredType]>,
}

impl<E> Candidate<E> {
	/// Creates a candidate from its declared types in author order
	///
	/// An empty list becomes a single implicit `*/*` declaration.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::{Candidate, DeclaredType};
	///
	/// let candidate = Candidate::new("get", Vec::<DeclaredType>::new());
	/// assert_eq!(candidate.declared_types().len(), 1);
	/// assert_eq!(candidate.declared_types()[0].media_type.essence(), "*/*");
	/// ```
	pub fn new(endpoint: E, declared: impl IntoIterator<Item = DeclaredType>) -> Self {
		let mut declared: Vec<DeclaredType> = declared.into_iter().collect();
		if declared.is_empty() {
			declared.push(DeclaredType::wildcard());
		}
		Self {
			endpoint,
			declared: declared.into(),
		}
	}

	/// Creates a candidate from declaration strings such as `"text/html;qs=0.9"`
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::Candidate;
	///
	/// let candidate = Candidate::producing("get_foo", ["application/foo", "application/bar"]).unwrap();
	/// assert_eq!(*candidate.endpoint(), "get_foo");
	/// assert_eq!(candidate.declared_types()[1].media_type.subtype(), "bar");
	/// ```
	pub fn producing<I, S>(endpoint: E, declarations: I) -> Result<Self, ParseError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let declared = declarations
			.into_iter()
			.map(|d| DeclaredType::parse(d.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(endpoint, declared))
	}

	pub fn endpoint(&self) -> &E {
		&self.endpoint
	}

	/// Declared types in declaration order, never empty
	pub fn declared_types(&self) -> &[DeclaredType] {
		&self.declared
	}
}
