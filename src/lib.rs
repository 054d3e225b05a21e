//! # Accord
//!
//! Server-driven content negotiation for HTTP services.
//!
//! Accord decides which representation of a resource to send back: given
//! the `Accept` header of a request and the endpoints that can answer it,
//! each declaring the media types it produces, it selects one endpoint and
//! the concrete media type to respond with. Requests whose `Accept` header
//! is malformed map to `400 Bad Request`; requests nothing can satisfy map
//! to `406 Not Acceptable`.
//!
//! ## Feature Flags
//!
//! - `negotiation` (default) - The negotiation engine ([`negotiation`])
//! - `http` - Re-exports of the `http` types used at the boundary
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use accord::prelude::*;
//!
//! let candidates = [
//!     Candidate::producing("list_json", ["application/json"]).unwrap(),
//!     Candidate::producing("list_html", ["text/html;qs=0.9"]).unwrap(),
//! ];
//!
//! let selection = Negotiator::new()
//!     .negotiate(&["text/html, application/json;q=0.8"], &candidates)
//!     .unwrap();
//! assert_eq!(*selection.endpoint(), "list_html");
//! assert_eq!(selection.media_type.to_string(), "text/html");
//! ```

#[cfg(feature = "negotiation")]
pub use accord_negotiation as negotiation;

#[cfg(feature = "http")]
pub use http::{HeaderMap, HeaderValue, StatusCode, header};

/// Commonly used types
#[cfg(feature = "negotiation")]
pub mod prelude {
	pub use crate::negotiation::{
		AcceptHeader, Candidate, DeclaredType, MediaRange, MediaType, NegotiationError,
		NegotiationResult, NegotiationSettings, Negotiator, Quality, Selection,
	};
}
