use leptos::*;

/// Widths below this use the narrow-screen layouts.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

impl Viewport {
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }

    /// Current window inner size, or `None` outside a browser.
    pub fn read() -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self { width, height })
    }
}

/// Reactive window size, updated on `resize` for as long as the calling
/// component is mounted.
pub fn use_viewport() -> ReadSignal<Viewport> {
    let (viewport, set_viewport) = create_signal(Viewport::read().unwrap_or_default());
    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(size) = Viewport::read() {
            if size != viewport.get_untracked() {
                set_viewport.set(size);
            }
        }
    });
    on_cleanup(move || handle.remove());
    viewport
}

/// `prefers-reduced-motion: reduce` from the user agent.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
