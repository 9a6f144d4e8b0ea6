//! Google Maps link builders.
//!
//! Pure string formatting; nothing here touches the network.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Link for a map pin at a coordinate.
const MAPS_URL: &str = "https://www.google.com/maps";

/// Link for a free-text place search.
const SEARCH_URL: &str = "https://www.google.com/maps/search";

/// Bytes escaped when encoding a single URI component.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as one URI component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Build a map-pin link, optionally labelled.
///
/// The query puts longitude first: `?q={lng},{lat}`. An empty label is
/// treated as no label.
///
/// ```
/// use station_finder::maps::google_maps_link;
///
/// assert_eq!(
///     google_maps_link(52.5, 13.4, Some("Berlin")),
///     "https://www.google.com/maps?q=13.4,52.5+(Berlin)"
/// );
/// ```
pub fn google_maps_link(lat: f64, lng: f64, label: Option<&str>) -> String {
    // -0.0 prints as "-0"; adding +0.0 turns it into 0
    let (lat, lng) = (lat + 0.0, lng + 0.0);
    match label.filter(|l| !l.is_empty()) {
        Some(label) => format!("{MAPS_URL}?q={lng},{lat}+({})", encode_component(label)),
        None => format!("{MAPS_URL}?q={lng},{lat}"),
    }
}

/// Build a place-search link for a free-text address.
pub fn place_search_link(address: &str) -> String {
    format!("{SEARCH_URL}/{}", encode_component(address))
}
