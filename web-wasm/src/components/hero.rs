//! ヒーローセクション

use leptos::prelude::*;
use photo_insight_common::landing::HERO;

/// アップロード欄の要素ID
pub const UPLOAD_SECTION_ID: &str = "upload-section";

#[component]
pub fn Hero<F>(on_toggle_sign_in: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="hero">
            <div class="hero-icon">"✨"</div>
            <h1>{HERO.title}</h1>
            <p class="hero-tagline">{HERO.tagline}</p>
            <div class="hero-actions">
                <button class="btn btn-primary btn-lg" on:click=move |_| scroll_to_upload()>
                    {HERO.primary_cta}
                </button>
                <button
                    class="btn btn-outline btn-lg"
                    on:click=move |_| on_toggle_sign_in(())
                >
                    {HERO.secondary_cta}
                </button>
            </div>
        </section>
    }
}

fn scroll_to_upload() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(UPLOAD_SECTION_ID))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}
