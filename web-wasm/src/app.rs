//! メインアプリケーションコンポーネント
//!
//! ページ全体の状態（写真・解析中・結果・エラー）を `AnalysisState` で保持し、
//! 操作はすべて `reduce` を通して反映する。

use futures::future::{abortable, AbortHandle, Aborted};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use photo_insight_common::landing::UPLOAD_SECTION;
use photo_insight_common::state::{self as flow, AnalysisState, TicketIssuer};
use photo_insight_common::{
    AnalysisResult, AnalyzeButton as ButtonState, MockAnalysis, PhotoHandle, ResultsView,
};
use crate::components::{
    analysis_results::AnalysisResults,
    analyze_button::AnalyzeButton,
    features::Features,
    footer::Footer,
    hero::{Hero, UPLOAD_SECTION_ID},
    photo_upload::PhotoUpload,
    sign_in_panel::SignInPanel,
};
use crate::photo::BrowserPhoto;

/// ページの状態と実行中の解析
#[derive(Clone, Copy)]
struct Page {
    state: RwSignal<AnalysisState<BrowserPhoto>, LocalStorage>,
    tickets: StoredValue<TicketIssuer>,
    inflight: StoredValue<Option<AbortHandle>>,
    mock: MockAnalysis,
}

impl Page {
    fn new() -> Self {
        Self {
            state: RwSignal::new_local(AnalysisState::Idle),
            tickets: StoredValue::new(TicketIssuer::default()),
            inflight: StoredValue::new(None),
            mock: mock_from_location(),
        }
    }

    fn select_photo(self, photo: BrowserPhoto) {
        if !photo.is_image() {
            log::debug!("画像ではないため無視: {} ({})", photo.name(), photo.mime_type());
            return;
        }
        log::info!("写真を選択: {} ({} bytes)", photo.name(), photo.size());
        self.dispatch(flow::Action::SelectPhoto(photo));
    }

    fn remove_photo(self) {
        self.dispatch(flow::Action::RemovePhoto);
    }

    fn analyze(self) {
        if !self.state.with_untracked(AnalysisState::can_analyze) {
            return;
        }
        let Some(ticket) = self.tickets.try_update_value(TicketIssuer::issue) else {
            return;
        };
        self.dispatch(flow::Action::StartAnalysis { ticket });
    }

    fn dispatch(self, action: flow::Action<BrowserPhoto>) {
        let Some(transition) = self.state.try_with_untracked(|state| flow::reduce(state, action)) else {
            return;
        };
        self.state.set(transition.state);
        if let Some(effect) = transition.effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(self, effect: flow::Effect<BrowserPhoto>) {
        match effect {
            flow::Effect::Run { ticket, photo } => {
                log::info!("解析を開始 {}: {}", ticket, photo.name());
                let (task, handle) = abortable(run_mock(self.mock));
                if let Some(previous) = self.inflight.try_update_value(|h| h.replace(handle)).flatten() {
                    previous.abort();
                }

                spawn_local(async move {
                    match task.await {
                        Ok(Ok(results)) => {
                            self.dispatch(flow::Action::AnalysisSucceeded { ticket, results });
                        }
                        Ok(Err(e)) => {
                            log::warn!("解析失敗 {}: {}", ticket, e);
                            self.dispatch(flow::Action::AnalysisFailed { ticket });
                        }
                        Err(Aborted) => log::debug!("解析を中断 {}", ticket),
                    }
                });
            }
            flow::Effect::Cancel { ticket } => {
                log::info!("実行中の解析をキャンセル {}", ticket);
                self.cancel_inflight();
            }
        }
    }

    fn cancel_inflight(self) {
        if let Some(handle) = self.inflight.try_update_value(Option::take).flatten() {
            handle.abort();
        }
    }
}

async fn run_mock(mock: MockAnalysis) -> photo_insight_common::Result<Vec<AnalysisResult>> {
    TimeoutFuture::new(mock.delay_ms.min(u32::MAX as u64) as u32).await;
    mock.outcome()
}

/// `?fail` 付きで開くと解析を失敗させる（エラー表示の確認用）
fn mock_from_location() -> MockAnalysis {
    let fail = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .is_some_and(|query| fail_requested(&query));
    MockAnalysis {
        fail,
        ..MockAnalysis::default()
    }
}

/// クエリ文字列に `fail` / `fail=...` が含まれるか
fn fail_requested(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "fail" || pair.starts_with("fail="))
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let page = Page::new();
    let (show_sign_in, set_show_sign_in) = signal(false);

    // ページ離脱時は実行中の解析を破棄
    on_cleanup(move || page.cancel_inflight());

    let selected = Signal::derive_local(move || page.state.with(|s| s.photo().cloned()));
    let results = Signal::derive(move || page.state.with(ResultsView::from_state));
    let button = Signal::derive(move || page.state.with(ButtonState::from_state));

    view! {
        <div class="page">
            <Hero on_toggle_sign_in=move |_| set_show_sign_in.update(|v| *v = !*v) />

            <Features />

            <Show when=move || show_sign_in.get()>
                <SignInPanel />
            </Show>

            <section id=UPLOAD_SECTION_ID class="upload-section">
                <div class="section-header">
                    <h2>{UPLOAD_SECTION.heading}</h2>
                    <p class="text-muted">{UPLOAD_SECTION.subheading}</p>
                </div>

                <div class="upload-grid">
                    <div class="upload-column">
                        <PhotoUpload
                            selected=selected
                            on_photo_select=move |photo| page.select_photo(photo)
                            on_remove_photo=move |_| page.remove_photo()
                        />
                        <AnalyzeButton button=button on_analyze=move |_| page.analyze() />
                    </div>

                    <div class="results-column">
                        <AnalysisResults results=results />
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_requested_flag() {
        assert!(fail_requested("?fail"));
        assert!(fail_requested("fail"));
    }

    #[test]
    fn test_fail_requested_among_params() {
        assert!(fail_requested("?x=1&fail=1"));
        assert!(fail_requested("?fail=&x=1"));
    }

    #[test]
    fn test_fail_requested_rejects_similar_names() {
        assert!(!fail_requested("?failure"));
        assert!(!fail_requested("?x=fail"));
        assert!(!fail_requested("?nofail"));
    }

    #[test]
    fn test_fail_requested_empty() {
        assert!(!fail_requested(""));
        assert!(!fail_requested("?"));
    }
}
