// Pure logic behind the scroll reveal controller: stagger timing, scroll
// progress math, and the one-way per-element reveal state.

/// Delay step between consecutive elements of a reveal category.
pub const STAGGER_STEP_SECS: f32 = 0.1;

/// Wider step used for project grid items so the cascade reads left to right.
pub const GRID_STAGGER_STEP_SECS: f32 = 0.15;

/// Animation delay for the `index`-th element within its category.
pub fn stagger_delay_secs(index: usize) -> f32 {
    index as f32 * STAGGER_STEP_SECS
}

/// Animation delay for the `index`-th project grid item.
pub fn grid_stagger_delay_secs(index: usize) -> f32 {
    index as f32 * GRID_STAGGER_STEP_SECS
}

/// Page scroll progress as a percentage of the scrollable range.
///
/// Returns 0 when there is nothing to scroll. The ratio is naturally bounded
/// by the document extremes, so no explicit clamp is applied for in-range
/// inputs.
pub fn scroll_progress_pct(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let range = doc_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    scroll_top / range * 100.0
}

/// Per-element reveal state: `Unseen -> Revealed`, one-way and terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unseen,
    Revealed,
}

impl RevealPhase {
    /// Transition to `Revealed`. Returns true only on the first call, so the
    /// caller applies the DOM class exactly once per element.
    pub fn reveal(&mut self) -> bool {
        match self {
            RevealPhase::Unseen => {
                *self = RevealPhase::Revealed;
                true
            }
            RevealPhase::Revealed => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealPhase::Revealed)
    }
}
