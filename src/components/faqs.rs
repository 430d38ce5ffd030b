use crate::content::FaqEntry;
use leptos::*;

/// Single-open, collapsible accordion: opening one item closes the others,
/// and clicking the open item closes it.
fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn Faqs(entries: Vec<FaqEntry>) -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_open = move || open.get() == Some(i);
            let panel_id = format!("faq-panel-{}", i);
            view! {
                <div class="faq-item" class:open=is_open>
                    <h3 class="faq-heading">
                        <button
                            class="faq-trigger"
                            aria-controls=panel_id.clone()
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| set_open.update(|o| *o = toggle_open(*o, i))
                        >
                            <span>{entry.question}</span>
                            <svg class="faq-chevron" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                <path d="M6 9l6 6 6-6"/>
                            </svg>
                        </button>
                    </h3>
                    <div class="faq-panel" id=panel_id role="region" hidden=move || !is_open()>
                        <p>{entry.answer}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="faqs" class="faqs">
            <div class="section-heading">
                <h2 class="section-title">"Why Trowser?"</h2>
                <p class="section-subtitle">"Explore what sets Trowser apart in a sea of sameness."</p>
            </div>
            <div class="faq-list">{items}</div>
        </section>
    }
}
