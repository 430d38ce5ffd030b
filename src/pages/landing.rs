use crate::components::{CallToAction, Faqs, Features, Footer, Hero, NavBar, Reviews};
use crate::config::site_config;
use crate::content::{faq_entries, feature_slides, review_deck};
use crate::viewport::use_viewport;
use leptos::*;

/// The single marketing page: nav, hero, feature reveal, reviews, CTA, FAQs, footer.
///
/// Content errors surface through the enclosing `ErrorBoundary`; each section
/// that needs content renders its `Result` directly.
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = site_config();
    let viewport = use_viewport();

    let features = feature_slides().map(|slides| {
        view! { <Features slides=slides config=config.features viewport=viewport/> }
    });
    let reviews = review_deck().map(|deck| {
        view! { <Reviews deck=deck config=config.reviews viewport=viewport/> }
    });
    let faqs = faq_entries().map(|entries| view! { <Faqs entries=entries/> });

    view! {
        <NavBar waitlist_url=config.links.waitlist.clone()/>
        <main class="landing">
            <Hero viewport=viewport/>
            {features}
            {reviews}
            <CallToAction waitlist_url=config.links.waitlist.clone()/>
            {faqs}
        </main>
        <Footer links=config.links/>
    }
}
