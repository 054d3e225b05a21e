//! # Accord Negotiation
//!
//! Server-driven content negotiation on the `Accept` header.
//!
//! Given the raw `Accept` values of a request and the candidate endpoints
//! routing found for it, the negotiator picks one endpoint and the concrete
//! media type it should respond with, or classifies the request as a bad
//! request (400) or not acceptable (406).
//!
//! The pipeline is a chain of pure functions:
//!
//! 1. [`AcceptHeader::parse_all`] turns header values into [`MediaRange`]s,
//!    validating quality values strictly.
//! 2. [`score`] rates one range against one [`DeclaredType`].
//! 3. [`match_all`] keeps the best pairing of each [`Candidate`].
//! 4. [`select`] orders the survivors and returns the winner.
//!
//! [`Negotiator`] runs all four steps and resolves the response media type.
//!
//! ## Tie-breaking
//!
//! Among equally weighted and equally specific offers, the earlier
//! registered candidate wins, and within a candidate the earlier declared
//! type wins. The order in which the client lists its ranges never breaks
//! ties.
//!
//! ```
//! use accord_negotiation::{Candidate, Negotiator};
//!
//! let candidates = [Candidate::producing("get", ["application/foo", "application/bar"]).unwrap()];
//! let negotiator = Negotiator::new();
//!
//! let selection = negotiator
//!     .negotiate(&["application/bar, application/foo"], &candidates)
//!     .unwrap();
//! assert_eq!(selection.media_type.essence(), "application/foo");
//! ```

pub mod accept;
pub mod candidate;
pub mod error;
pub mod headers;
pub mod matcher;
pub mod media_type;
pub mod negotiator;
pub mod quality;
pub mod score;
pub mod selector;
pub mod settings;

pub use accept::{AcceptHeader, MediaRange};
pub use candidate::{Candidate, DeclaredType};
pub use error::{NegotiationError, NegotiationResult, ParseError, SettingsError};
pub use matcher::{MatchResult, match_all};
pub use media_type::MediaType;
pub use negotiator::{Negotiator, Selection};
pub use quality::{Quality, Weight};
pub use score::{Score, Specificity, score};
pub use selector::{rank, select};
pub use settings::NegotiationSettings;
