use crate::analytics::{track, SiteEvent};
use crate::components::carousel_3d::Carousel3D;
use crate::content::{CardDeck, CarouselCard};
use crate::motion::CarouselConfig;
use crate::viewport::Viewport;
use leptos::*;

#[component]
pub fn Reviews(deck: CardDeck, config: CarouselConfig, viewport: ReadSignal<Viewport>) -> impl IntoView {
    view! {
        <section id="testimonials" class="reviews">
            <div class="section-heading">
                <span class="section-eyebrow">"Testimonials"</span>
                <h2 class="section-title">"What Makes Us Different"</h2>
                <p class="section-subtitle">
                    "Early testers on the browser that finally keeps up with how they work."
                </p>
            </div>
            <Carousel3D
                deck=deck
                config=config
                viewport=viewport
                on_card_click=move |(card, index): (CarouselCard, usize)| {
                    log::debug!("Review card {} clicked ({})", index, card.id);
                }
                on_card_flip=move |(card, index, flipped): (CarouselCard, usize, bool)| {
                    log::debug!("Review card {} ({}) flipped: {}", index, card.id, flipped);
                    if flipped {
                        track(SiteEvent::ReviewFlip);
                    }
                }
                on_rotate=move |index: usize| log::debug!("Reviews rotated to {}", index)
            />
        </section>
    }
}
