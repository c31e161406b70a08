use super::*;

#[test]
fn fragment_href_resolves_to_id() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact"), Some("contact"));
}

#[test]
fn bare_hash_resolves_to_nothing() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn external_href_resolves_to_nothing() {
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id("about"), None);
}

#[test]
fn target_lands_below_header() {
    assert!((scroll_top_for(500.0) - 420.0).abs() < f64::EPSILON);
    assert!((scroll_top_for(0.0) + 80.0).abs() < f64::EPSILON);
}

#[test]
fn scrolling_to_missing_target_is_silent() {
    scroll_to_fragment("#does-not-exist");
    scroll_to_fragment("not-a-fragment");
}
