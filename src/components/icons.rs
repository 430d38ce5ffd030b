use crate::content::Icon;
use leptos::*;

// Outline glyphs on a 24×24 grid, drawn with `stroke="currentColor"`.
fn icon_paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Shield => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        Icon::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        Icon::Palette => &[
            "M12 22a10 10 0 1 1 10-10c0 2.5-2 3.5-3.5 3.5H16a2 2 0 0 0-1.5 3.33A2 2 0 0 1 12 22z",
            "M7.5 10.5h.01",
            "M10.5 7h.01",
            "M15 7.5h.01",
        ],
        Icon::Zap => &[
            "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
        ],
        Icon::Globe => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        Icon::Lock => &["M5 11h14v11H5z", "M7 11V7a5 5 0 0 1 10 0v4"],
        Icon::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        Icon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
    }
}

#[component]
pub fn IconSvg(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}

/// Left/right chevron for the carousel buttons.
#[component]
pub fn Chevron(#[prop(optional)] left: bool) -> impl IntoView {
    let d = if left { "M15 18l-6-6 6-6" } else { "M9 18l6-6-6-6" };
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d=d/>
        </svg>
    }
}

#[component]
pub fn ArrowRight() -> impl IntoView {
    view! {
        <svg class="arrow-right" width="15" height="12" viewBox="0 0 15 12" fill="none" aria-hidden="true">
            <path d="M14.47 6.21c0 .19-.07.35-.22.49L9.38 11.56a.68.68 0 0 1-1.13-.43c0-.17.06-.32.18-.46l1.64-1.67 2.91-2.64.15.36-2.36.15H1.51a.63.63 0 0 1-.65-.65c0-.19.06-.35.18-.47a.63.63 0 0 1 .47-.18h9.27l2.36.15-.15.37-2.91-2.65-1.64-1.67a.66.66 0 0 1 0-.91.63.63 0 0 1 .91 0l4.86 4.84c.15.14.22.3.22.49z" fill="white"/>
        </svg>
    }
}

#[component]
pub fn GithubMark(size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M9 19c-4.3 1.4-4.3-2.5-6-3m12 5v-3.5c0-1 .1-1.4-.5-2 2.8-.3 5.5-1.4 5.5-6a4.6 4.6 0 0 0-1.3-3.2 4.2 4.2 0 0 0-.1-3.2s-1.1-.3-3.5 1.3a12.3 12.3 0 0 0-6.2 0C6.5 2.8 5.4 3.1 5.4 3.1a4.2 4.2 0 0 0-.1 3.2A4.6 4.6 0 0 0 4 9.5c0 4.6 2.7 5.7 5.5 6-.6.6-.6 1.2-.5 2V21"/>
        </svg>
    }
}

#[component]
pub fn XMark(size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M4 4l11.733 16h4.267l-11.733-16z"/>
            <path d="M4 20l6.768-6.768m2.46-2.46l6.772-6.772"/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let all = [
            Icon::Shield,
            Icon::Brain,
            Icon::Palette,
            Icon::Zap,
            Icon::Globe,
            Icon::Lock,
            Icon::Smartphone,
            Icon::Cloud,
        ];
        for icon in all {
            let paths = icon_paths(icon);
            assert!(!paths.is_empty(), "{:?} has no paths", icon);
            assert!(paths.iter().all(|d| d.starts_with('M')), "{:?}", icon);
        }
    }
}
