//! 解析ボタンコンポーネント

use leptos::prelude::*;
use photo_insight_common::AnalyzeButton as ButtonState;

#[component]
pub fn AnalyzeButton<F>(button: Signal<ButtonState>, on_analyze: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || button.get() != ButtonState::Hidden>
            <button
                class="btn btn-primary btn-block"
                disabled=move || button.get().is_disabled()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                <Show when=move || button.get() == ButtonState::Busy fallback=|| view! { <span class="icon">"✨"</span> }>
                    <span class="spinner" />
                </Show>
                {move || button.get().label()}
            </button>
        </Show>
    }
}
