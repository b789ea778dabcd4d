use fnv::FnvHashMap;

// Skill-bar fill percentages. These are fixed editorial content keyed on the
// bar's category class, not derived from any metric.

/// Category -> fill percent, as an explicit table rather than a conditional
/// chain. Unlisted categories resolve to 0.
pub const FILL_TARGETS: &[(&str, u32)] = &[
    ("pharo", 95),
    ("mysql", 95),
    ("ci", 95),
    ("french", 95),
    ("analysis", 85),
    ("java", 80),
    ("english", 80),
    ("html", 70),
    ("angular", 60),
    ("flutter", 60),
    ("docker", 40),
];

/// Resolve a single category label to its fill percent.
pub fn fill_percent(category: &str) -> u32 {
    FILL_TARGETS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, pct)| *pct)
        .unwrap_or(0)
}

/// The table as a hash map, for callers that probe many class tokens per
/// element (the skill-bar observer).
pub fn fill_targets() -> FnvHashMap<&'static str, u32> {
    FILL_TARGETS.iter().copied().collect()
}
