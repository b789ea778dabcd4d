// Host-side tests for YouTube URL normalization.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod video {
    include!("../src/core/video.rs");
}

use video::*;

#[test]
fn bare_integer_is_seconds() {
    assert_eq!(parse_time_to_seconds("457"), 457);
    assert_eq!(parse_time_to_seconds("0"), 0);
}

#[test]
fn compound_durations_accumulate() {
    assert_eq!(parse_time_to_seconds("457s"), 457);
    assert_eq!(parse_time_to_seconds("7m37s"), 7 * 60 + 37);
    assert_eq!(parse_time_to_seconds("1h2m3s"), 3600 + 120 + 3);
    assert_eq!(parse_time_to_seconds("2m"), 120);
    assert_eq!(parse_time_to_seconds("3h"), 10800);
}

#[test]
fn unparseable_time_is_zero() {
    assert_eq!(parse_time_to_seconds(""), 0);
    assert_eq!(parse_time_to_seconds("abc"), 0);
    assert_eq!(parse_time_to_seconds("h"), 0);
}

#[test]
fn watch_url_with_timestamp_becomes_embed_with_start() {
    assert_eq!(
        to_embed_url("https://www.youtube.com/watch?v=abc123&t=97"),
        "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&start=97"
    );
}

#[test]
fn watch_url_with_compound_timestamp() {
    assert_eq!(
        to_embed_url("https://www.youtube.com/watch?v=abc123&t=7m37s"),
        "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&start=457"
    );
}

#[test]
fn short_url_without_timestamp_has_no_start() {
    assert_eq!(
        to_embed_url("https://youtu.be/abc123"),
        "https://www.youtube.com/embed/abc123?autoplay=1&rel=0"
    );
}

#[test]
fn short_url_with_timestamp() {
    assert_eq!(
        to_embed_url("https://youtu.be/abc123?t=42"),
        "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&start=42"
    );
}

#[test]
fn embed_url_is_re_normalized() {
    assert_eq!(
        to_embed_url("https://www.youtube.com/embed/xyz?start=9"),
        "https://www.youtube.com/embed/xyz?autoplay=1&rel=0&start=9"
    );
}

#[test]
fn malformed_or_foreign_urls_pass_through_unchanged() {
    assert_eq!(to_embed_url("not a url"), "not a url");
    assert_eq!(to_embed_url(""), "");
    assert_eq!(
        to_embed_url("https://example.com/watch?v=abc123"),
        "https://example.com/watch?v=abc123"
    );
    // youtube.com but no recognizable video id
    assert_eq!(
        to_embed_url("https://www.youtube.com/feed"),
        "https://www.youtube.com/feed"
    );
}
