//! 機能紹介セクション

use leptos::prelude::*;
use photo_insight_common::landing::{FEATURES, FEATURES_SECTION};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="section-header">
                <h2>{FEATURES_SECTION.heading}</h2>
                <p class="text-muted">{FEATURES_SECTION.subheading}</p>
            </div>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class="feature-card">
                            <div class=format!("feature-icon icon-{}", feature.icon) />
                            <h3>{feature.title}</h3>
                            <p class="text-muted">{feature.body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
