pub mod analytics;
pub mod components;
pub mod config;
pub mod content;
pub mod haptics;
pub mod motion;
pub mod pages;
pub mod viewport;

use leptos::*;
use leptos_router::*;
use pages::{LandingPage, NotFoundPage};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="error-container">
                <h2>"Something went wrong"</h2>
                <p>"Part of the page could not be loaded. Try refreshing."</p>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=move |_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Reload"</button>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    mount_to_body(Root);
}
