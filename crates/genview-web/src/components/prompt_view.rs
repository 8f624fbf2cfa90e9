use leptos::prelude::*;
use leptos::task::spawn_local;

use genview_client::{
    ClientConfig, Generator, HttpGenerator, PromptSession, RequestId, DEFAULT_ENDPOINT,
};

/// Start a submission from the view state and settle it when the reply arrives.
///
/// Returns `None` without spawning anything when the prompt is empty.
pub fn submit_prompt<G>(session: RwSignal<PromptSession>, generator: G) -> Option<RequestId>
where
    G: Generator + 'static,
{
    let submission = session.try_update(|s| s.begin_submit()).flatten()?;
    let id = submission.id;

    spawn_local(async move {
        let outcome = generator.generate(&submission.prompt).await;
        if let Err(e) = &outcome {
            leptos::logging::error!("Error fetching response: {e}");
        }
        session.update(|s| {
            s.settle(submission.id, outcome);
        });
    });

    Some(id)
}

/// Prompt input, a Generate button, and the latest response.
///
/// ## Props
/// - `endpoint`: where prompts are posted (default `http://localhost:8000/generate/`)
#[component]
pub fn PromptView(#[prop(optional, into)] endpoint: Option<String>) -> impl IntoView {
    let config = ClientConfig::new(endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()));
    let session = RwSignal::new(PromptSession::new());

    let on_submit = move |_| {
        submit_prompt(session, HttpGenerator::new(config.clone()));
    };

    view! {
        <div class="prompt-view">
            <h1>"DeepSeek-R1 Chat"</h1>
            <textarea
                rows="4"
                cols="50"
                placeholder="Enter a prompt..."
                prop:value=move || session.with(|s| s.prompt().to_string())
                on:input=move |ev| {
                    session.update(|s| s.set_prompt(event_target_value(&ev)));
                }
            />
            <br/>
            <button style="margin-top: 10px;" on:click=on_submit>
                "Generate"
            </button>
            <h2>"Response:"</h2>
            <p class="response">{move || session.with(|s| s.response().to_string())}</p>
        </div>
    }
}
