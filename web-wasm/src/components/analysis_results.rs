//! 解析結果パネル
//!
//! 表示内容は `ResultsView` で決まる。コンポーネント自体は状態を持たない。

use leptos::prelude::*;
use photo_insight_common::view::NO_FEATURES_MESSAGE;
use photo_insight_common::{ResultRow, ResultsView};
use crate::components::progress_bar::ProgressBar;

#[component]
pub fn AnalysisResults(results: Signal<ResultsView>) -> impl IntoView {
    move || {
        let current = results.get();
        let Some(heading) = current.heading() else {
            return ().into_any();
        };
        let icon_class = match &current {
            ResultsView::Analyzing => "status-icon spinning",
            ResultsView::Failed { .. } => "status-icon error",
            _ => "status-icon success",
        };

        let body = match current {
            ResultsView::Hidden => ().into_any(),
            ResultsView::Analyzing => view! { <ProgressBar /> }.into_any(),
            ResultsView::Failed { message } => view! {
                <div class="text-destructive">
                    <p>{message}</p>
                </div>
            }
            .into_any(),
            ResultsView::Results { rows } => view! {
                <div class="result-list">
                    {rows.into_iter().map(|row| view! { <ResultCard row=row /> }).collect_view()}
                </div>
            }
            .into_any(),
            ResultsView::Empty => view! { <p class="text-muted">{NO_FEATURES_MESSAGE}</p> }.into_any(),
        };

        view! {
            <div class="card analysis-results">
                <h3 class="results-heading">
                    <span class=icon_class />
                    {heading}
                </h3>
                {body}
            </div>
        }
        .into_any()
    }
}

#[component]
fn ResultCard(row: ResultRow) -> impl IntoView {
    let percent = row.percent_label();
    view! {
        <div class="result-card" data-id=row.id>
            <div class="result-header">
                <h4>{row.label}</h4>
                <span class="badge">{percent}</span>
            </div>
            {row.description.map(|d| view! { <p class="text-muted">{d}</p> })}
        </div>
    }
}
