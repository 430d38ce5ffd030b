use crate::components::icons::{Chevron, IconSvg};
use crate::content::{CardDeck, CarouselCard};
use crate::haptics::drag_tick;
use crate::motion::{place_card, CarouselConfig, CarouselEvent, CarouselLayout, CarouselState};
use crate::viewport::{prefers_reduced_motion, Viewport};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::time::Duration;

/// Run one transition against a copy of the state and commit it only if
/// something changed, so idle autoplay ticks do not wake the view.
fn apply(
    state: RwSignal<CarouselState>,
    f: impl FnOnce(&mut CarouselState, f64) -> Vec<CarouselEvent>,
) -> Vec<CarouselEvent> {
    let mut next = state.get_untracked();
    let events = f(&mut next, js_sys::Date::now());
    if state.with_untracked(|current| *current != next) {
        state.set(next);
    }
    events
}

fn rotates(events: &[CarouselEvent]) -> bool {
    events.iter().any(|e| matches!(e, CarouselEvent::Rotated(_)))
}

/// Rotating card carousel: a 3D ring on wide screens, flat tiers on narrow ones.
///
/// Clicking a side card brings it to the front; clicking the front card flips
/// it to show its full text. Drag, arrow keys, the chevron buttons and the dot
/// row all rotate it. Autoplay pauses while hovered or dragged.
#[component]
pub fn Carousel3D(
    deck: CardDeck,
    #[prop(optional)] config: CarouselConfig,
    viewport: ReadSignal<Viewport>,
    #[prop(optional, into)] on_card_click: Option<Callback<(CarouselCard, usize)>>,
    #[prop(optional, into)] on_card_flip: Option<Callback<(CarouselCard, usize, bool)>>,
    #[prop(optional, into)] on_rotate: Option<Callback<usize>>,
) -> impl IntoView {
    let count = deck.len();
    let mut initial = CarouselState::new(count, config, js_sys::Date::now());
    if prefers_reduced_motion() {
        initial.set_autoplay(false, js_sys::Date::now());
    }
    let state = create_rw_signal(initial);
    let cards = deck.cards().to_vec();
    let deck = store_value(deck);

    let active = create_memo(move |_| state.with(CarouselState::active));
    let dragging = create_memo(move |_| state.with(CarouselState::is_dragging));
    let layout = create_memo(move |_| {
        if viewport.get().is_mobile() {
            CarouselLayout::Tiered
        } else {
            CarouselLayout::Ring
        }
    });

    let dispatch = move |events: Vec<CarouselEvent>| {
        for event in events {
            match event {
                CarouselEvent::Rotated(index) => {
                    if let Some(on_rotate) = on_rotate {
                        on_rotate.call(index);
                    }
                }
                CarouselEvent::CardClicked(index) => {
                    if let Some(on_card_click) = on_card_click {
                        let card = deck.with_value(|d| d.get(index).clone());
                        on_card_click.call((card, index));
                    }
                }
                CarouselEvent::Flipped { index, flipped } => {
                    if let Some(on_card_flip) = on_card_flip {
                        let card = deck.with_value(|d| d.get(index).clone());
                        on_card_flip.call((card, index, flipped));
                    }
                }
            }
        }
    };

    let autoplay_timer = store_value(None::<IntervalHandle>);
    let restart_autoplay = move || {
        if let Some(handle) = autoplay_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        if !state.with_untracked(CarouselState::autoplay_enabled) {
            return;
        }
        let tick = move || dispatch(apply(state, |s, now| s.autoplay_tick(now).into_iter().collect()));
        let period = Duration::from_millis(u64::from(config.interval_ms.max(1)));
        match set_interval_with_handle(tick, period) {
            Ok(handle) => autoplay_timer.set_value(Some(handle)),
            Err(err) => log::warn!("Carousel autoplay timer could not start: {:?}", err),
        }
    };
    restart_autoplay();
    on_cleanup(move || {
        if let Some(handle) = autoplay_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    // Manual rotation restarts the interval so the next automatic step is a
    // full period away.
    let user_input = move |events: Vec<CarouselEvent>| {
        if rotates(&events) {
            restart_autoplay();
        }
        dispatch(events);
    };

    // A drag that stepped the carousel must not also count as a card click.
    let suppress_click = store_value(false);

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        suppress_click.set_value(false);
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        apply(state, |s, _| {
            s.drag_start(x, y);
            Vec::new()
        });
    };
    let on_pointer_move = move |ev: ev::PointerEvent| {
        if !state.with_untracked(CarouselState::is_dragging) {
            return;
        }
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let events = apply(state, |s, now| s.drag_move(x, y, now));
        if !events.is_empty() {
            suppress_click.set_value(true);
        }
        for _ in &events {
            drag_tick();
        }
        user_input(events);
    };
    let end_drag = move || {
        if !state.with_untracked(CarouselState::is_dragging) {
            return;
        }
        apply(state, |s, now| {
            s.drag_end(now);
            Vec::new()
        });
        restart_autoplay();
    };

    let on_key = move |ev: ev::KeyboardEvent| {
        let key = ev.key();
        let events = apply(state, |s, now| s.handle_key(&key, now).into_iter().collect());
        if !events.is_empty() {
            ev.prevent_default();
        }
        user_input(events);
    };

    let stage_style = move || match layout.get() {
        CarouselLayout::Ring => format!("transform: translateZ({:.0}px);", -config.radius_px),
        CarouselLayout::Tiered => String::new(),
    };

    let card_views = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| {
            let placement =
                create_memo(move |_| place_card(i, active.get(), count, config.radius_px, layout.get()));
            let flipped = move || state.with(|s| s.is_flipped(i));
            let on_click = move |_: ev::MouseEvent| {
                if suppress_click.get_value() {
                    suppress_click.set_value(false);
                    return;
                }
                user_input(apply(state, |s, now| s.click_card(i, now)));
            };
            let visual = match card.image_url {
                Some(src) => view! { <img class="carousel-card-image" src=src alt="" loading="lazy"/> }.into_view(),
                None => view! {
                    <div class="carousel-card-glyph"><IconSvg icon=card.icon class="carousel-card-icon"/></div>
                }
                .into_view(),
            };

            view! {
                <div
                    class="carousel-card"
                    class:active=move || placement.get().active
                    class:flipped=flipped
                    style=move || placement.get().style()
                    on:click=on_click
                >
                    <div class="carousel-card-inner">
                        <div class="carousel-face carousel-face-front">
                            {visual}
                            <span class="carousel-category">{card.category}</span>
                            <h3 class="carousel-title">{card.title.clone()}</h3>
                            <p class="carousel-preview">{card.preview}</p>
                        </div>
                        <div class="carousel-face carousel-face-back">
                            <h3 class="carousel-title">{card.title}</h3>
                            <p class="carousel-content">{card.content}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..count.get())
        .map(|i| {
            view! {
                <button
                    class="carousel-dot"
                    class:active=move || active.get() == i
                    aria-label=format!("Show card {}", i + 1)
                    on:click=move |_| user_input(apply(state, |s, now| s.select(i, now).into_iter().collect()))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div
            class="carousel"
            class:tiered=move || layout.get() == CarouselLayout::Tiered
            role="region"
            aria-roledescription="carousel"
            tabindex="0"
            on:keydown=on_key
            on:mouseenter=move |_| {
                apply(state, |s, now| {
                    s.set_hovered(true, now);
                    Vec::new()
                });
            }
            on:mouseleave=move |_| {
                apply(state, |s, now| {
                    s.set_hovered(false, now);
                    Vec::new()
                });
                end_drag();
                restart_autoplay();
            }
        >
            <div
                class="carousel-viewport"
                class:dragging=move || dragging.get()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=move |_| end_drag()
                on:pointercancel=move |_| end_drag()
            >
                <div class="carousel-stage" style=stage_style>
                    {card_views}
                </div>
            </div>

            <div class="carousel-controls">
                <button
                    class="carousel-arrow"
                    aria-label="Previous card"
                    on:click=move |_| user_input(apply(state, |s, now| vec![s.prev(now)]))
                >
                    <Chevron left=true/>
                </button>
                <div class="carousel-dots">{dots}</div>
                <button
                    class="carousel-arrow"
                    aria-label="Next card"
                    on:click=move |_| user_input(apply(state, |s, now| vec![s.next(now)]))
                >
                    <Chevron/>
                </button>
            </div>
        </div>
    }
}
