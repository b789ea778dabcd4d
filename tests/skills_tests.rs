// Host-side tests for the skill-bar fill table.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod skills {
    include!("../src/core/skills.rs");
}

use skills::*;

#[test]
fn top_tier_categories_fill_to_95() {
    for category in ["pharo", "mysql", "ci", "french"] {
        assert_eq!(fill_percent(category), 95, "category {category}");
    }
}

#[test]
fn remaining_categories_match_the_table() {
    assert_eq!(fill_percent("analysis"), 85);
    assert_eq!(fill_percent("java"), 80);
    assert_eq!(fill_percent("english"), 80);
    assert_eq!(fill_percent("html"), 70);
    assert_eq!(fill_percent("angular"), 60);
    assert_eq!(fill_percent("flutter"), 60);
    assert_eq!(fill_percent("docker"), 40);
}

#[test]
fn unknown_categories_default_to_zero() {
    assert_eq!(fill_percent("cobol"), 0);
    assert_eq!(fill_percent(""), 0);
    assert_eq!(fill_percent("PHARO"), 0); // lookup is case-sensitive
}

#[test]
fn hash_map_mirrors_the_table() {
    let map = fill_targets();
    assert_eq!(map.len(), FILL_TARGETS.len());
    for (name, pct) in FILL_TARGETS {
        assert_eq!(map.get(name), Some(pct));
    }
}
