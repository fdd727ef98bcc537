//! サインイン欄（アカウント機能は未提供のため案内のみ）

use leptos::prelude::*;
use photo_insight_common::landing::SIGN_IN_PLACEHOLDER;

#[component]
pub fn SignInPanel() -> impl IntoView {
    view! {
        <section class="auth-section">
            <div class="card">
                <h3>{SIGN_IN_PLACEHOLDER.heading}</h3>
                <p class="text-muted">{SIGN_IN_PLACEHOLDER.subheading}</p>
            </div>
        </section>
    }
}
