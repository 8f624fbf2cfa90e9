mod app;
mod components;
mod pages;

pub use app::App;
pub use components::prompt_view::{submit_prompt, PromptView};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
