use web_sys::window;

const DRAG_TICK_MS: u32 = 8;

/// Short vibration when a drag steps the carousel to another card.
///
/// Only fires for coarse (touch) pointers; desktop browsers that expose the
/// Vibration API would otherwise buzz on mouse drags.
pub fn drag_tick() {
    let Some(window) = window() else {
        return;
    };
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    if coarse {
        let _ = window.navigator().vibrate_with_duration(DRAG_TICK_MS);
    }
}
