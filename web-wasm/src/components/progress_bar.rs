//! プログレスバーコンポーネント（進捗率なし）

use leptos::prelude::*;
use photo_insight_common::view::PROGRESS_CAPTION;

#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar indeterminate">
                <div class="progress-fill" />
            </div>
            <p class="progress-text text-muted">{PROGRESS_CAPTION}</p>
        </div>
    }
}
