use crate::analytics::{track, SiteEvent};
use crate::components::icons::ArrowRight;
use leptos::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("Features", "#features"),
    ("Testimonials", "#testimonials"),
    ("Get Started", "#getstarted"),
];

#[component]
pub fn NavBar(waitlist_url: String) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    let toggle_menu = move |_: ev::MouseEvent| {
        set_menu_open.update(|open| *open = !*open);
        if menu_open.get_untracked() {
            track(SiteEvent::MobileMenuOpen);
        }
    };
    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <div class="site-nav-wrap">
            <nav class="site-nav">
                <a class="nav-brand" href="/" aria-label="Trowser">
                    <img class="nav-logo" src="/Trowser_Transparant.webp" width="40" height="40" alt="Logo"/>
                    <span class="nav-brand-name">"Trowser™"</span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! {
                            <a class="nav-link" href=*href>
                                <span class="nav-link-dot"></span>
                                {*name}
                            </a>
                        })
                        .collect_view()}
                </div>

                <a
                    class="nav-waitlist"
                    title="Join the waitlist"
                    target="_blank"
                    rel="noopener noreferrer"
                    href=waitlist_url.clone()
                    on:click=move |_| track(SiteEvent::WaitlistClick)
                >
                    <span>"Join the waitlist"</span>
                    <ArrowRight/>
                </a>

                <button class="nav-menu-toggle" aria-label="Toggle mobile menu" on:click=toggle_menu>
                    <svg
                        class="nav-menu-icon"
                        class:open=move || menu_open.get()
                        width="20"
                        height="20"
                        viewBox="0 0 20 20"
                        fill="none"
                        aria-hidden="true"
                    >
                        <path d="M10 3V17M3 10H17" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
                    </svg>
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="nav-overlay" on:click=close_menu></div>
            </Show>

            <div class="nav-mobile-menu" class:open=move || menu_open.get()>
                <div class="nav-mobile-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! {
                            <a class="nav-mobile-link" href=*href on:click=close_menu>{*name}</a>
                        })
                        .collect_view()}
                </div>
                <a
                    class="nav-mobile-waitlist"
                    title="Join the waitlist"
                    target="_blank"
                    rel="noopener noreferrer"
                    href=waitlist_url
                    on:click=move |ev| {
                        track(SiteEvent::WaitlistClick);
                        close_menu(ev);
                    }
                >
                    "Join the waitlist"
                    <ArrowRight/>
                </a>
            </div>
        </div>
    }
}
