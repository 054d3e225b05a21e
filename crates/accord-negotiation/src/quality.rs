//! Quality values and combined weights
//!
//! Quality values are stored as thousandths, so `q=0.125` is `125`. All
//! arithmetic stays in integers, which keeps weights totally ordered.

use crate::error::ParseError;
use std::fmt;

/// A quality value (`qvalue`) in `[0, 1]` with at most three decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
	/// `q=0`, explicitly not acceptable
	pub const ZERO: Quality = Quality(0);
	/// `q=1`, the default when no quality is given
	pub const ONE: Quality = Quality(1000);

	/// Creates a quality from thousandths, rejecting values above `1000`
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::Quality;
	///
	/// assert_eq!(Quality::from_millis(500).unwrap().to_string(), "0.5");
	/// assert!(Quality::from_millis(1001).is_none());
	/// ```
	pub fn from_millis(millis: u16) -> Option<Self> {
		(millis <= 1000).then_some(Self(millis))
	}

	/// Parses a qvalue using the strict header grammar
	///
	/// Accepted forms are `0`, `0.` followed by one to three digits, `1`, and
	/// `1.` followed by up to three zeros. Anything else, including values
	/// above one, extra decimals, signs or exponents, is rejected.
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::Quality;
	///
	/// assert_eq!(Quality::parse("0.25").unwrap().millis(), 250);
	/// assert_eq!(Quality::parse("1.000").unwrap(), Quality::ONE);
	/// assert!(Quality::parse("1.1").is_err());
	/// assert!(Quality::parse("0.1234").is_err());
	/// ```
	pub fn parse(value: &str) -> Result<Self, ParseError> {
		let invalid = || ParseError::InvalidQuality {
			value: value.to_string(),
		};

		let bytes = value.as_bytes();
		let (&lead, rest) = bytes.split_first().ok_or_else(invalid)?;
		let fraction = match rest {
			[] => rest,
			[b'.', digits @ ..] if digits.len() <= 3 => digits,
			_ => return Err(invalid()),
		};

		match lead {
			// `0.` needs a digit, `1.` does not
			b'0' if fraction.is_empty() && !rest.is_empty() => Err(invalid()),
			b'0' => {
				let mut millis = 0u16;
				for (i, &digit) in fraction.iter().enumerate() {
					if !digit.is_ascii_digit() {
						return Err(invalid());
					}
					millis += u16::from(digit - b'0') * [100, 10, 1][i];
				}
				Ok(Self(millis))
			}
			b'1' if fraction.iter().all(|&digit| digit == b'0') => Ok(Self::ONE),
			_ => Err(invalid()),
		}
	}

	/// Thousandths, `0..=1000`
	pub fn millis(self) -> u16 {
		self.0
	}

	/// Returns true for `q=0`
	pub fn is_zero(self) -> bool {
		self.0 == 0
	}
}

impl Default for Quality {
	fn default() -> Self {
		Self::ONE
	}
}

impl fmt::Display for Quality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			1000 => f.write_str("1"),
			0 => f.write_str("0"),
			millis => {
				let digits = format!("{millis:03}");
				write!(f, "0.{}", digits.trim_end_matches('0'))
			}
		}
	}
}

/// Reads the quality parameter `name` from one raw `;`-separated segment
///
/// Returns `None` when the segment is a different parameter. The value is
/// validated as written: a quoted value or a bare name without `=` is an
/// invalid quality.
pub(crate) fn quality_parameter(segment: &str, name: &str) -> Option<Result<Quality, ParseError>> {
	let (key, value) = match segment.split_once('=') {
		Some((key, value)) => (key, Some(value)),
		None => (segment, None),
	};
	if !key.trim().eq_ignore_ascii_case(name) {
		return None;
	}

	Some(match value {
		Some(value) => Quality::parse(value.trim()),
		None => Err(ParseError::InvalidQuality {
			value: segment.trim().to_string(),
		}),
	})
}

/// Client quality multiplied by declared quality, in millionths
///
/// A weight of zero marks a pairing as explicitly excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
	pub const ZERO: Weight = Weight(0);
	pub const ONE: Weight = Weight(1_000_000);

	/// Combines a client quality with a declared (server) quality
	///
	/// # Examples
	///
	/// ```
	/// use accord_negotiation::{Quality, Weight};
	///
	/// let q = Quality::parse("0.5").unwrap();
	/// let qs = Quality::parse("0.4").unwrap();
	/// assert_eq!(Weight::combine(q, qs).as_f64(), 0.2);
	/// ```
	pub fn combine(client: Quality, declared: Quality) -> Self {
		Self(u32::from(client.millis()) * u32::from(declared.millis()))
	}

	/// Returns true when the pairing is explicitly excluded
	pub fn is_excluded(self) -> bool {
		self.0 == 0
	}

	pub fn as_f64(self) -> f64 {
		f64::from(self.0) / 1_000_000.0
	}
}

impl fmt::Display for Weight {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_f64())
	}
}
