//! Tuning knobs shared by the interactive components.

/// Vertical scroll offset (px) past which the navbar gets its elevated shadow.
pub const SCROLL_ELEVATION_PX: f64 = 8.0;

/// Intersection margin for the scroll spy. Shrinks the viewport band so a
/// section counts as active once it occupies the upper part of the screen.
pub const SPY_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

/// Default duration of the milestone count-up.
pub const COUNT_UP_DURATION_MS: f64 = 1600.0;

/// Visible fraction of the counter that starts the count-up.
pub const COUNT_UP_THRESHOLD: f64 = 0.6;

/// Visible fraction that fires a reveal animation.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// How long the outgoing tab pane takes to fade out before the next one
/// mounts. Must match the `paneOut` animation in the services tabs styles.
pub const TAB_EXIT_MS: u32 = 300;

/// How long the quote-form acknowledgment stays on screen.
pub const FORM_ACK_DISMISS_MS: u32 = 6_000;
