//! Media types and header tokenizing shared by ranges and declared types

use crate::error::ParseError;
use crate::score::Specificity;
use std::collections::BTreeMap;
use std::fmt;

pub(crate) const WILDCARD: &str = "*";

/// A `type/subtype` pair with parameters
///
/// Type, subtype and parameter names are stored lower-cased. Either side may
/// be `*`, but `*/subtype` is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	type_: String,
	subtype: String,
	parameters: BTreeMap<String, String>,
}

impl MediaType {
	/// Creates a media type without parameters
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::MediaType;
	///
	/// let json = MediaType::new("Application", "JSON");
	/// assert_eq!(json.to_string(), "application/json");
	/// assert!(json.is_concrete());
	/// ```
	pub fn new(type_: impl AsRef<str>, subtype: impl AsRef<str>) -> Self {
		Self {
			type_: type_.as_ref().to_ascii_lowercase(),
			subtype: subtype.as_ref().to_ascii_lowercase(),
			parameters: BTreeMap::new(),
		}
	}

	/// `*/*`
	pub fn wildcard() -> Self {
		Self::new(WILDCARD, WILDCARD)
	}

	/// Adds a parameter; the name is lower-cased
	pub fn with_parameter(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.parameters
			.insert(name.as_ref().to_ascii_lowercase(), value.into());
		self
	}

	/// Parses a bare `type/subtype` with parameters
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::MediaType;
	///
	/// let html = MediaType::parse("text/html; charset=UTF-8").unwrap();
	/// assert_eq!(html.type_(), "text");
	/// assert_eq!(html.parameter("charset"), Some("UTF-8"));
	/// assert!(MediaType::parse("texthtml").is_err());
	/// ```
	pub fn parse(input: &str) -> Result<Self, ParseError> {
		let mut segments = split_unquoted(input, b';');
		let essence = segments.next().unwrap_or_default();
		let mut media_type = Self::parse_essence(essence, input)?;
		for (name, value) in segments.filter_map(parse_parameter) {
			media_type.parameters.insert(name, value);
		}
		Ok(media_type)
	}

	/// Parses the `type/subtype` part; `input` is only used for error reports
	pub(crate) fn parse_essence(essence: &str, input: &str) -> Result<Self, ParseError> {
		let essence = essence.trim();
		if essence == WILDCARD {
			return Ok(Self::wildcard());
		}

		let invalid = || ParseError::InvalidMediaType {
			value: input.trim().to_string(),
		};
		let (type_, subtype) = essence.split_once('/').ok_or_else(invalid)?;
		if !is_token(type_) || !is_token(subtype) {
			return Err(invalid());
		}
		if type_ == WILDCARD && subtype != WILDCARD {
			return Err(ParseError::WildcardType {
				value: input.trim().to_string(),
			});
		}
		Ok(Self::new(type_, subtype))
	}

	pub(crate) fn insert_parameter(&mut self, name: String, value: String) {
		self.parameters.insert(name, value);
	}

	pub fn type_(&self) -> &str {
		&self.type_
	}

	pub fn subtype(&self) -> &str {
		&self.subtype
	}

	/// Looks up a parameter by case-insensitive name
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	pub fn parameters(&self) -> &BTreeMap<String, String> {
		&self.parameters
	}

	/// `type/subtype` without parameters
	pub fn essence(&self) -> String {
		format!("{}/{}", self.type_, self.subtype)
	}

	/// Returns true when neither the type nor the subtype is a wildcard
	pub fn is_concrete(&self) -> bool {
		self.specificity() == Specificity::Exact
	}

	/// How specific this pattern is on its own
	pub fn specificity(&self) -> Specificity {
		if self.type_ == WILDCARD {
			Specificity::FullWildcard
		} else if self.subtype == WILDCARD {
			Specificity::SubtypeWildcard
		} else {
			Specificity::Exact
		}
	}

	/// Pattern compatibility, with wildcards honoured on both sides
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::MediaType;
	///
	/// let text_any = MediaType::new("text", "*");
	/// assert!(text_any.is_compatible(&MediaType::new("text", "plain")));
	/// assert!(MediaType::new("text", "plain").is_compatible(&text_any));
	/// assert!(!text_any.is_compatible(&MediaType::new("image", "png")));
	/// ```
	pub fn is_compatible(&self, other: &MediaType) -> bool {
		if self.type_ == WILDCARD || other.type_ == WILDCARD {
			return true;
		}
		self.type_ == other.type_
			&& (self.subtype == WILDCARD
				|| other.subtype == WILDCARD
				|| self.subtype == other.subtype)
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.type_, self.subtype)?;
		for (name, value) in &self.parameters {
			if is_token(value) {
				write!(f, ";{name}={value}")?;
			} else {
				write!(f, ";{name}=\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))?;
			}
		}
		Ok(())
	}
}

/// RFC 7230 `tchar`
fn is_tchar(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte)
}

pub(crate) fn is_token(value: &str) -> bool {
	!value.is_empty() && value.bytes().all(is_tchar)
}

/// Splits on `separator` outside of double-quoted strings
pub(crate) fn split_unquoted(input: &str, separator: u8) -> impl Iterator<Item = &str> {
	let mut rest = Some(input);
	std::iter::from_fn(move || {
		let current = rest?;
		let mut in_quotes = false;
		let mut escaped = false;
		for (index, byte) in current.bytes().enumerate() {
			match byte {
				_ if escaped => escaped = false,
				b'\\' if in_quotes => escaped = true,
				b'"' => in_quotes = !in_quotes,
				_ if byte == separator && !in_quotes => {
					rest = Some(&current[index + 1..]);
					return Some(&current[..index]);
				}
				_ => {}
			}
		}
		rest = None;
		Some(current)
	})
}

/// Parses `name=value`, unquoting the value
///
/// Segments without `=` or with an empty name are tolerated and skipped.
pub(crate) fn parse_parameter(segment: &str) -> Option<(String, String)> {
	let (name, value) = segment.split_once('=')?;
	let name = name.trim();
	if name.is_empty() {
		return None;
	}
	Some((name.to_ascii_lowercase(), unquote(value.trim())))
}

fn unquote(value: &str) -> String {
	let Some(inner) = value
		.strip_prefix('"')
		.and_then(|v| v.strip_suffix('"'))
	else {
		return value.to_string();
	};

	let mut unquoted = String::with_capacity(inner.len());
	let mut chars = inner.chars();
	while let Some(c) = chars.next() {
		if c == '\\' {
			if let Some(next) = chars.next() {
				unquoted.push(next);
			}
		} else {
			unquoted.push(c);
		}
	}
	unquoted
}
