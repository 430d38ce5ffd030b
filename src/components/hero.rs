use crate::viewport::Viewport;
use leptos::*;

const ENTRANCE_LEAD_MS: u32 = 100;
const ENTRANCE_STAGGER_MS: u32 = 200;

/// Start delay for the `index`-th hero element's rise-and-unblur entrance.
fn entrance_delay_ms(index: u32) -> u32 {
    ENTRANCE_LEAD_MS + ENTRANCE_STAGGER_MS * index
}

fn entrance_style(index: u32) -> String {
    format!("animation-delay: {}ms;", entrance_delay_ms(index))
}

#[component]
pub fn Hero(viewport: ReadSignal<Viewport>) -> impl IntoView {
    let image_width = move || if viewport.get().is_mobile() { 350 } else { 1080 };

    view! {
        <section id="home" class="hero">
            <h2 class="hero-title hero-enter" style=entrance_style(0)>
                "Browse Beyond."
                <br/>
                "Faster. Smarter. Simpler."
            </h2>
            <p class="hero-tagline hero-enter" style=entrance_style(1)>
                "The next-generation browser engineered for speed, privacy, and precision, without the clutter."
            </p>
            <div class="hero-shot hero-enter" style=entrance_style(2)>
                <div class="hero-shot-frame">
                    <img src="/hero.webp" width=image_width height="555" alt="Dashboard Image"/>
                    <div class="hero-shot-fade"></div>
                </div>
                <div class="hero-shot-glow" aria-hidden="true"></div>
            </div>
            <div class="hero-floor-glow" aria-hidden="true"></div>
        </section>
    }
}
