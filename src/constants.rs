//! Page wiring constants: element ids, selectors, thresholds.
//!
//! Scene-simulation tuning lives next to the scene code in `core/scene.rs`;
//! this file only holds the values the DOM wiring needs.

// Background canvas and the CSS gradient used when the GPU is unavailable.
pub const CANVAS_ID: &str = "webgl-bg";
pub const FALLBACK_GRADIENT: &str =
    "linear-gradient(135deg, #0a1628 0%, #1a365d 50%, #104041 100%)";

// Device-pixel-ratio cap, bounding fill-rate cost on high-density displays.
pub const MAX_DPR: f64 = 2.0;

// Resize events are coalesced; only the last one within this window runs.
pub const RESIZE_DEBOUNCE_MS: i32 = 150;

// Content-block categories registered for the staggered scroll reveal.
pub const REVEAL_SELECTORS: &[&str] = &[
    ".about-me",
    ".langage-skills",
    ".hobbies-interests",
    ".skills-habilities",
    ".education-jobs",
    ".award",
    ".project-item",
    ".timeline-event",
    ".skills-bar",
];
pub const PROJECT_GRID_SELECTOR: &str = ".project-items .project-item";
pub const TIMELINE_SELECTOR: &str = ".timeline-event";

// Reveal observer: fire slightly before the element reaches the viewport
// edge, once ~10% is visible.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Skill bars animate once half the bar is visible.
pub const SKILL_BAR_SELECTOR: &str = ".progressbar-line";
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;

// Video lightbox.
pub const LIGHTBOX_ID: &str = "video-lightbox";
pub const LIGHTBOX_CONTAINER_ID: &str = "lightbox-video-container";
pub const WATCH_BUTTON_SELECTOR: &str = ".projects-demos .btn.watch";
