use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Custom events reported to Umami.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    WaitlistClick,
    MobileMenuOpen,
    ReviewFlip,
}

impl SiteEvent {
    pub fn name(self) -> &'static str {
        match self {
            SiteEvent::WaitlistClick => "waitlist-click",
            SiteEvent::MobileMenuOpen => "mobile-menu-open",
            SiteEvent::ReviewFlip => "review-flip",
        }
    }
}

/// Track a custom event in Umami analytics.
/// Does nothing if Umami is not loaded (e.g., blocked by an adblocker).
pub fn track(event: SiteEvent) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event.name());
    } else {
        log::debug!("analytics unavailable, dropped {}", event.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_kebab_case() {
        for event in [SiteEvent::WaitlistClick, SiteEvent::MobileMenuOpen, SiteEvent::ReviewFlip] {
            let name = event.name();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{}", name);
        }
    }
}
