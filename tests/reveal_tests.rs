// Host-side tests for reveal timing, scroll progress math, and the one-way
// reveal state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn stagger_delays_grow_linearly() {
    assert_eq!(stagger_delay_secs(0), 0.0);
    assert!((stagger_delay_secs(1) - 0.1).abs() < 1e-6);
    assert!((stagger_delay_secs(5) - 0.5).abs() < 1e-6);
    assert!((grid_stagger_delay_secs(2) - 0.3).abs() < 1e-6);
}

#[test]
fn scroll_progress_is_zero_at_top_and_full_at_bottom() {
    for (doc, viewport) in [(2000.0, 800.0), (1500.0, 700.0), (10_000.0, 1080.0)] {
        let range = doc - viewport;
        assert_eq!(scroll_progress_pct(0.0, doc, viewport), 0.0);
        assert!((scroll_progress_pct(range, doc, viewport) - 100.0).abs() < 1e-9);
    }
}

#[test]
fn scroll_progress_midpoint_is_half() {
    let pct = scroll_progress_pct(600.0, 2000.0, 800.0);
    assert!((pct - 50.0).abs() < 1e-9);
}

#[test]
fn unscrollable_document_reports_zero() {
    assert_eq!(scroll_progress_pct(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress_pct(0.0, 500.0, 800.0), 0.0);
}

#[test]
fn unseen_elements_carry_no_reveal_marker() {
    let phase = RevealPhase::default();
    assert!(!phase.is_revealed());
}

#[test]
fn reveal_is_one_way_and_idempotent() {
    let mut phase = RevealPhase::default();
    assert!(phase.reveal(), "first intersection applies the marker");
    assert!(phase.is_revealed());
    for _ in 0..10 {
        assert!(!phase.reveal(), "repeat observations are no-ops");
        assert!(phase.is_revealed(), "the marker is never removed");
    }
}
