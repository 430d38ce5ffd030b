use crate::analytics::{track, SiteEvent};
use leptos::*;

#[component]
pub fn CallToAction(waitlist_url: String) -> impl IntoView {
    view! {
        <section id="getstarted" class="cta">
            <div class="cta-body">
                <h2 class="cta-title">
                    "The tab is not the task."
                    <br/>
                    "Trowser knows the difference."
                </h2>
                <a
                    class="cta-button"
                    href=waitlist_url
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |_| track(SiteEvent::WaitlistClick)
                >
                    <span class="cta-button-label">"Join Waitlist →"</span>
                    <span class="cta-button-rocket" aria-hidden="true">"🚀"</span>
                </a>
            </div>
            <div class="cta-backdrop" aria-hidden="true"></div>
        </section>
    }
}
