use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"This page wandered off. The browser didn't."</p>
            <A href="/" class="not-found-home">"Back to Trowser"</A>
        </main>
    }
}
