//! 写真アップロードコンポーネント
//!
//! ドロップ領域とファイル選択ボタン。写真選択後はプレビューと削除ボタンを表示する。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use gloo::file::ObjectUrl;
use photo_insight_common::drag::{DragEvent as ZoneEvent, DragState};
use photo_insight_common::landing::{CHOOSE_PHOTO_LABEL, UPLOAD_PROMPT};
use photo_insight_common::PhotoHandle;
use crate::photo::{photos_from_list, BrowserPhoto};

const INPUT_ID: &str = "photo-upload";

#[component]
pub fn PhotoUpload<FS, FR>(
    selected: Signal<Option<BrowserPhoto>, LocalStorage>,
    on_photo_select: FS,
    on_remove_photo: FR,
) -> impl IntoView
where
    FS: Fn(BrowserPhoto) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let drag = RwSignal::new(DragState::Inactive);

    // 写真が変わるたびにURLを作り直す。古いURLはドロップ時に revoke される
    let preview = RwSignal::new_local(None::<ObjectUrl>);
    Effect::new(move |_| {
        let url = selected.with(|photo| photo.as_ref().map(BrowserPhoto::object_url));
        preview.set(url);
    });
    let preview_src = move || preview.with(|url| url.as_ref().map(|u| u.to_string()));

    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let event = match ev.type_().as_str() {
            "dragenter" => ZoneEvent::Enter,
            "dragover" => ZoneEvent::Over,
            _ => ZoneEvent::Leave,
        };
        drag.update(|state| *state = state.handle::<BrowserPhoto>(event).state);
    };

    let on_drop = {
        let on_photo_select = on_photo_select.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();

            let files = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| photos_from_list(&list))
                .unwrap_or_default();
            let outcome = drag.get_untracked().handle(ZoneEvent::Drop(files));
            drag.set(outcome.state);

            match outcome.accepted {
                Some(photo) => on_photo_select(photo),
                None => log::debug!("画像以外のドロップを無視しました"),
            }
        }
    };

    let on_change = {
        let on_photo_select = on_photo_select.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                on_photo_select(BrowserPhoto::from(file));
            }
            // 同じファイルを選び直せるように
            input.set_value("");
        }
    };

    view! {
        <div class="card photo-upload">
            <Show
                when=move || selected.with(Option::is_some)
                fallback=move || view! {
                    <div
                        class=move || {
                            let mut classes = vec!["upload-area"];
                            if drag.get().is_active() {
                                classes.push("dragover");
                            }
                            classes.join(" ")
                        }
                        on:dragenter=on_drag
                        on:dragover=on_drag
                        on:dragleave=on_drag
                        on:drop=on_drop.clone()
                    >
                        <div class="upload-icon">"🖼"</div>
                        <h3>{UPLOAD_PROMPT.heading}</h3>
                        <p class="text-muted">{UPLOAD_PROMPT.subheading}</p>
                        <label for=INPUT_ID class="btn btn-primary">
                            <span class="icon">"⬆"</span>
                            {CHOOSE_PHOTO_LABEL}
                        </label>
                        <input
                            id=INPUT_ID
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=on_change.clone()
                        />
                    </div>
                }
            >
                <div class="preview">
                    <img src=preview_src alt="Selected photo" class="preview-image" />
                    <button
                        class="btn btn-destructive btn-sm remove-button"
                        on:click={
                            let on_remove_photo = on_remove_photo.clone();
                            move |_| on_remove_photo(())
                        }
                    >
                        "✕"
                    </button>
                </div>
                <p class="file-name text-muted">
                    {move || selected.with(|photo| photo.as_ref().map(|p| p.name().to_string()))}
                </p>
            </Show>
        </div>
    }
}
