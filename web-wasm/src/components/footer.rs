use leptos::prelude::*;
use photo_insight_common::landing::FOOTER_NOTE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="text-muted">{FOOTER_NOTE}</p>
        </footer>
    }
}
