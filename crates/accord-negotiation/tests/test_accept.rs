//! Accept negotiation scenarios
//!
//! Each fixture mirrors a resource with one or more GET handlers and the
//! media types they produce, in declaration order.

use accord_negotiation::{Candidate, NegotiationError, NegotiationSettings, Negotiator};
use http::StatusCode;
use rstest::*;

type Endpoints = Vec<Candidate<&'static str>>;

fn endpoints(handlers: &[(&'static str, &[&str])]) -> Endpoints {
	handlers
		.iter()
		.map(|(name, produces)| Candidate::producing(*name, produces.iter().copied()).unwrap())
		.collect()
}

/// Negotiates and returns `(handler, content type)`
fn negotiate(candidates: &Endpoints, accept: &[&str]) -> (&'static str, String) {
	let selection = Negotiator::new().negotiate(accept, candidates).unwrap();
	(*selection.endpoint(), selection.media_type.to_string())
}

fn status(candidates: &Endpoints, accept: &[&str]) -> StatusCode {
	Negotiator::new()
		.negotiate(accept, candidates)
		.unwrap_err()
		.status_code()
}

// ============================================================================
// Fixtures
// ============================================================================

/// Four handlers: foo, bar, baz and a catch-all
#[fixture]
fn resource() -> Endpoints {
	endpoints(&[
		("foo", &["application/foo"]),
		("bar", &["application/bar"]),
		("baz", &["application/baz"]),
		("wildcard", &["*/*"]),
	])
}

/// One handler producing foo then bar
#[fixture]
fn multiple() -> Endpoints {
	endpoints(&[("get", &["application/foo", "application/bar"])])
}

#[fixture]
fn sub_type() -> Endpoints {
	endpoints(&[("get", &["text/*"])])
}

#[fixture]
fn no_produces() -> Endpoints {
	endpoints(&[("get", &[])])
}

// ============================================================================
// Quality ordering
// ============================================================================

#[rstest]
#[case(&["application/foo"], "foo")]
#[case(&["application/foo;q=0.1"], "foo")]
#[case(&["application/foo", "application/bar;q=0.4", "application/baz;q=0.2"], "foo")]
#[case(&["application/foo;q=0.4", "application/bar", "application/baz;q=0.2"], "bar")]
#[case(&["application/foo;q=0.4", "application/bar;q=0.2", "application/baz"], "baz")]
fn test_accept_get(resource: Endpoints, #[case] accept: &[&str], #[case] handler: &str) {
	let (selected, media_type) = negotiate(&resource, accept);
	assert_eq!(selected, handler);
	assert_eq!(media_type, format!("application/{handler}"));
}

#[rstest]
fn test_accept_get_wildcard(resource: Endpoints) {
	let accept = [
		"application/wildcard",
		"application/foo;q=0.6",
		"application/bar;q=0.4",
		"application/baz;q=0.2",
	];
	assert_eq!(
		negotiate(&resource, &accept),
		("wildcard", "application/wildcard".to_string())
	);
}

#[rstest]
fn test_exact_handler_beats_catch_all_at_equal_quality(resource: Endpoints) {
	// The catch-all is registered last, but it would lose even if it were first
	let mut reversed = resource;
	reversed.reverse();
	assert_eq!(negotiate(&reversed, &["application/bar"]).0, "bar");
}

// ============================================================================
// Strict quality grammar
// ============================================================================

#[rstest]
#[case("application/foo;q=1.1")]
#[case("application/foo;q=0.1234")]
#[case("application/foo;q=high")]
fn test_invalid_quality_is_bad_request(resource: Endpoints, #[case] accept: &str) {
	assert_eq!(status(&resource, &[accept]), StatusCode::BAD_REQUEST);
}

#[rstest]
fn test_invalid_quality_in_later_occurrence_is_bad_request(resource: Endpoints) {
	let result = Negotiator::new().negotiate(&["application/foo", "application/bar;q=2"], &resource);
	assert!(matches!(
		result,
		Err(NegotiationError::MalformedAcceptHeader(_))
	));
}

// ============================================================================
// One handler, several declared types
// ============================================================================

#[rstest]
#[case(&["application/foo"], "application/foo")]
#[case(&["application/bar"], "application/bar")]
#[case(&["*/*"], "application/foo")]
#[case(&["application/*"], "application/foo")]
#[case(&["application/foo;q=0.1", "application/bar"], "application/bar")]
#[case(&["application/foo;q=0.5", "application/bar;q=0.1"], "application/foo")]
fn test_accept_multiple(multiple: Endpoints, #[case] accept: &[&str], #[case] expected: &str) {
	assert_eq!(negotiate(&multiple, accept), ("get", expected.to_string()));
}

#[rstest]
#[case(&["application/foo", "application/bar"])]
#[case(&["application/bar", "application/foo"])]
#[case(&["application/bar, application/foo"])]
fn test_declaration_order_breaks_equal_quality(multiple: Endpoints, #[case] accept: &[&str]) {
	assert_eq!(negotiate(&multiple, accept).1, "application/foo");
}

// ============================================================================
// Wildcard declarations
// ============================================================================

#[rstest]
#[case(&["text/plain"], "text/plain")]
#[case(&["image/png, text/plain"], "text/plain")]
#[case(&["text/plain;q=0.5, text/html"], "text/html")]
fn test_accept_sub_type(sub_type: Endpoints, #[case] accept: &[&str], #[case] expected: &str) {
	assert_eq!(negotiate(&sub_type, accept).1, expected);
}

#[rstest]
#[case(&["image/png"])]
#[case(&["text/*"])]
#[case(&["*/*"])]
fn test_sub_type_declaration_rejects_open_or_other_types(sub_type: Endpoints, #[case] accept: &[&str]) {
	// Both `text/*` and `*/*` leave the type open, and the fallback is not text
	assert_eq!(status(&sub_type, accept), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_sub_type_declaration_takes_text_fallback(sub_type: Endpoints) {
	let settings = NegotiationSettings::default().with_fallback_media_type("text/plain");
	let negotiator = Negotiator::with_settings(&settings).unwrap();
	let selection = negotiator.negotiate(&["text/*"], &sub_type).unwrap();
	assert_eq!(selection.media_type.to_string(), "text/plain");
}

#[rstest]
#[case(&["image/png, text/plain"], "image/png")]
#[case(&["text/plain;q=0.5, text/html"], "text/html")]
#[case(&["*/*"], "application/octet-stream")]
#[case(&["application/*"], "application/octet-stream")]
fn test_accept_no_produces(no_produces: Endpoints, #[case] accept: &[&str], #[case] expected: &str) {
	assert_eq!(negotiate(&no_produces, accept).1, expected);
}

#[rstest]
#[case(&["text/*"])]
#[case(&["image/*, text/*;q=0.5"])]
fn test_accept_no_produces_open_range_is_not_acceptable(no_produces: Endpoints, #[case] accept: &[&str]) {
	assert_eq!(status(&no_produces, accept), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_open_winner_yields_to_next_concrete_offer() {
	let candidates = endpoints(&[
		("any_text", &["text/*"]),
		("json", &["application/json;qs=0.5"]),
	]);
	assert_eq!(
		negotiate(&candidates, &["text/*, application/json"]),
		("json", "application/json".to_string())
	);
}

// ============================================================================
// Tie-breaking between handlers
// ============================================================================

#[rstest]
#[case(&["application/foo"], "get_foo", "application/foo")]
#[case(&["application/bar"], "get_bar", "application/bar")]
#[case(&["application/foo", "application/bar"], "get_foo", "application/foo")]
#[case(&["application/bar", "application/foo"], "get_foo", "application/foo")]
fn test_two_handlers_foo_registered_first(
	#[case] accept: &[&str],
	#[case] handler: &str,
	#[case] media_type: &str,
) {
	let candidates = endpoints(&[
		("get_foo", &["application/foo"]),
		("get_bar", &["application/bar"]),
	]);
	assert_eq!(
		negotiate(&candidates, accept),
		(handler, media_type.to_string())
	);
}

#[rstest]
#[case(&["application/foo"], "get_foo", "application/foo")]
#[case(&["application/bar"], "get_bar", "application/bar")]
#[case(&["application/foo", "application/bar"], "get_bar", "application/bar")]
#[case(&["application/bar", "application/foo"], "get_bar", "application/bar")]
fn test_two_handlers_bar_registered_first(
	#[case] accept: &[&str],
	#[case] handler: &str,
	#[case] media_type: &str,
) {
	let candidates = endpoints(&[
		("get_bar", &["application/bar"]),
		("get_foo", &["application/foo"]),
	]);
	assert_eq!(
		negotiate(&candidates, accept),
		(handler, media_type.to_string())
	);
}

#[rstest]
#[case(&[("any_text", &["text/*"][..]), ("plain", &["text/plain"][..])])]
#[case(&[("plain", &["text/plain"][..]), ("any_text", &["text/*"][..])])]
fn test_specific_declaration_beats_registration_order(#[case] handlers: &[(&'static str, &[&str])]) {
	let candidates = endpoints(handlers);
	assert_eq!(negotiate(&candidates, &["text/plain"]).0, "plain");
}

#[rstest]
#[case(&[("html", &["text/html"][..]), ("plain", &["text/plain"][..])])]
#[case(&[("plain", &["text/plain"][..]), ("html", &["text/html"][..])])]
fn test_specific_range_beats_registration_order(#[case] handlers: &[(&'static str, &[&str])]) {
	let candidates = endpoints(handlers);
	assert_eq!(negotiate(&candidates, &["text/*, text/plain"]).0, "plain");
}

#[rstest]
fn test_declared_quality_steers_between_handlers() {
	let candidates = endpoints(&[
		("xml", &["application/xml;qs=0.5"]),
		("json", &["application/json"]),
	]);
	assert_eq!(negotiate(&candidates, &["*/*"]).0, "json");
	// Client quality still multiplies in
	assert_eq!(
		negotiate(&candidates, &["application/xml, application/json;q=0.4"]).0,
		"xml"
	);
}

// ============================================================================
// Exclusion and absence
// ============================================================================

#[rstest]
fn test_zero_quality_excludes_only_match(multiple: Endpoints) {
	assert_eq!(
		status(&multiple, &["application/foo;q=0, application/bar;q=0"]),
		StatusCode::NOT_ACCEPTABLE
	);
	assert_eq!(
		negotiate(&multiple, &["application/foo;q=0, application/bar;q=0.1"]).1,
		"application/bar"
	);
}

#[rstest]
fn test_no_match_is_not_acceptable(resource: Endpoints) {
	let candidates: Endpoints = resource.into_iter().take(3).collect();
	assert_eq!(status(&candidates, &["image/png"]), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_empty_header_is_not_acceptable(multiple: Endpoints) {
	assert_eq!(status(&multiple, &[""]), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_no_header_selects_first_declared_of_first_candidate() {
	let candidates = endpoints(&[
		("get_bar", &["application/bar", "application/foo"]),
		("get_foo", &["application/foo"]),
	]);
	assert_eq!(
		negotiate(&candidates, &[]),
		("get_bar", "application/bar".to_string())
	);
}

#[rstest]
fn test_no_header_with_undeclared_type_uses_fallback(no_produces: Endpoints) {
	assert_eq!(negotiate(&no_produces, &[]).1, "application/octet-stream");

	let settings = NegotiationSettings::default().with_fallback_media_type("application/json");
	let negotiator = Negotiator::with_settings(&settings).unwrap();
	let no_accept: [&str; 0] = [];
	let selection = negotiator.negotiate(&no_accept, &no_produces).unwrap();
	assert_eq!(selection.media_type.to_string(), "application/json");
}

#[rstest]
fn test_no_header_with_sub_type_declaration_is_not_acceptable(sub_type: Endpoints) {
	assert_eq!(status(&sub_type, &[]), StatusCode::NOT_ACCEPTABLE);
}

#[rstest]
fn test_no_candidates_is_not_acceptable() {
	let candidates = Endpoints::new();
	assert_eq!(status(&candidates, &[]), StatusCode::NOT_ACCEPTABLE);
}
