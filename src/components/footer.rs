use crate::components::icons::{GithubMark, XMark};
use crate::config::SiteLinks;
use leptos::*;

const SITE_LINKS: [(&str, &str); 4] = [
    ("Home", "/#home"),
    ("Features", "/#features"),
    ("Testimonials", "/#testimonials"),
    ("Get Started", "/#getstarted"),
];

const HELP_LINKS: [(&str, &str); 4] = [
    ("Help Center", "/"),
    ("FAQs", "/#faqs"),
    ("Privacy Policy", "/"),
    ("Terms & Conditions", "/"),
];

fn link_list(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <ul class="footer-links">
            {links
                .iter()
                .map(|(name, href)| view! {
                    <li><a class="footer-link" href=*href>{*name}</a></li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer(links: SiteLinks) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-top">
                <div class="footer-brand">
                    <img src="/Trowser_Logo.webp" width="200" height="200" alt="Logo"/>
                    <p class="footer-tagline">
                        "The next-generation browser engineered for speed, privacy, and precision, without the clutter."
                    </p>
                </div>
                <div class="footer-columns">
                    {link_list(&SITE_LINKS)}
                    {link_list(&HELP_LINKS)}
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-copyright">{format!("Copyright © {} Trowser. All rights are reserved.", year)}</p>
                <div class="footer-socials">
                    <a href=links.github aria-label="GitHub" target="_blank" rel="noopener noreferrer">
                        <GithubMark size=28/>
                    </a>
                    <a href=links.x aria-label="X" target="_blank" rel="noopener noreferrer">
                        <XMark size=28/>
                    </a>
                </div>
            </div>
        </footer>
    }
}
