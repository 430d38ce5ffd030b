use crate::components::icons::IconSvg;
use crate::content::Slide;
use crate::motion::{scroll_progress, slide_visuals, ScrollGeometry, SequencerConfig, SlideVisual};
use crate::viewport::Viewport;
use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::*;

/// Coalesces scroll events into at most one measurement per animation frame.
///
/// `H` is the handle of the requested frame, kept so teardown can cancel it.
struct FrameGate<H> {
    pending: Option<H>,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameGate<H> {
    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Call `request` unless a frame is already pending. `Ok(true)` means a
    /// new frame was requested.
    fn schedule<E>(&mut self, request: impl FnOnce() -> Result<H, E>) -> Result<bool, E> {
        if self.is_pending() {
            return Ok(false);
        }
        self.pending = Some(request()?);
        Ok(true)
    }

    /// The requested frame fired; the next event may schedule another.
    fn frame_ran(&mut self) {
        self.pending = None;
    }

    fn take(&mut self) -> Option<H> {
        self.pending.take()
    }
}

/// Scroll-pinned feature showcase.
///
/// The slide stack sticks to the top of the viewport while a spacer below it
/// scrolls past; the distance scrolled through the spacer drives which slides
/// are revealed and how far along each one is.
#[component]
pub fn Features(
    slides: Vec<Slide>,
    config: SequencerConfig,
    viewport: ReadSignal<Viewport>,
) -> impl IntoView {
    let slide_count = slides.len();
    let section_ref = create_node_ref::<html::Section>();
    let container_ref = create_node_ref::<html::Div>();
    let (progress, set_progress) = create_signal(0.0_f64);

    let measure = move || {
        let (Some(section), Some(container)) =
            (section_ref.get_untracked(), container_ref.get_untracked())
        else {
            return;
        };
        let section_rect = section.get_bounding_client_rect();
        let geometry = ScrollGeometry {
            container_top: container.get_bounding_client_rect().top(),
            section_top: section_rect.top(),
            section_height: section_rect.height(),
            viewport_height: viewport.get_untracked().height,
        };
        let next = scroll_progress(&geometry, slide_count, &config);
        if next != progress.get_untracked() {
            set_progress.set(next);
        }
    };

    let frame_gate = store_value(FrameGate::<AnimationFrameRequestHandle>::default());
    let schedule_measure = move || {
        let scheduled = frame_gate.try_update_value(|gate| {
            gate.schedule(|| {
                request_animation_frame_with_handle(move || {
                    frame_gate.try_update_value(FrameGate::frame_ran);
                    measure();
                })
            })
        });
        if let Some(Err(err)) = scheduled {
            log::warn!("Could not schedule feature measurement: {:?}", err);
        }
    };

    let listener = window_event_listener(ev::scroll, move |_| schedule_measure());
    on_cleanup(move || {
        listener.remove();
        if let Some(handle) = frame_gate.try_update_value(FrameGate::take).flatten() {
            handle.cancel();
        }
    });

    section_ref.on_load(move |_| schedule_measure());
    create_effect(move |_| {
        // re-measure after a resize changes the viewport height
        let _ = viewport.get();
        schedule_measure();
    });

    let visuals = create_memo(move |_| slide_visuals(progress.get(), slide_count, &config));
    let mobile = move || viewport.get().is_mobile();

    let layers = slides
        .into_iter()
        .enumerate()
        .map(|(i, slide)| {
            let layer = move |f: fn(&SlideVisual) -> String| {
                move || visuals.with(|v| v.get(i).map(f).unwrap_or_default())
            };
            let visible = move || visuals.with(|v| v.get(i).is_some_and(SlideVisual::is_visible));
            let side = slide.side;
            let side = move || side.for_viewport(mobile()).as_str();
            let title_gradient = slide.tone.title_gradient();
            let title_rise = layer(|s| s.rise_style(30.0, 300));

            view! {
                <div
                    class="feature-slide"
                    data-slide=slide.id
                    data-side=side
                    aria-hidden=move || (!visible()).to_string()
                    style=layer(SlideVisual::style)
                >
                    <div class="feature-blob feature-blob-a" style=layer(|s| s.backdrop_style(0))></div>
                    <div class="feature-blob feature-blob-b" style=layer(|s| s.backdrop_style(200))></div>

                    <div class=move || format!("feature-slide-inner side-{}", side())>
                        <div class="feature-glyph" style=layer(SlideVisual::glyph_style)>
                            <div
                                class="feature-glyph-disc"
                                style=format!("background: {};", slide.tone.glyph_gradient())
                            >
                                <IconSvg icon=slide.icon class="feature-glyph-icon"/>
                            </div>
                        </div>

                        <div class="feature-copy">
                            <div class="feature-badge" style=layer(|s| s.rise_style(20.0, 200))>
                                <IconSvg icon=slide.icon class="feature-badge-icon"/>
                            </div>
                            <h3
                                class="feature-title"
                                style=move || format!("{} background-image: {};", title_rise(), title_gradient)
                            >
                                {slide.title}
                            </h3>
                            <p class="feature-description" style=layer(|s| s.rise_style(30.0, 400))>
                                {slide.description}
                            </p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let spacer_height = format!("height: {}vh;", config.spacer_viewports(slide_count) * 100);

    view! {
        <section id="features" class="features" node_ref=section_ref>
            <div class="features-sticky" node_ref=container_ref>
                {layers}
            </div>
            <div class="features-spacer" style=spacer_height aria-hidden="true"></div>
        </section>
    }
}
