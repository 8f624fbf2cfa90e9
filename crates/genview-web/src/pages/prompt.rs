use leptos::prelude::*;
use crate::components::prompt_view::PromptView;

#[component]
pub fn PromptPage() -> impl IntoView {
    view! {
        <div class="prompt-page" style="text-align: center; padding: 20px;">
            <PromptView/>
        </div>
    }
}
