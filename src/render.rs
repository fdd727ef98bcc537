//! ターミナル向けの描画

use indicatif::{ProgressBar, ProgressStyle};
use photo_insight_common::landing::{
    FEATURES, FEATURES_SECTION, FOOTER_NOTE, HERO, UPLOAD_PROMPT, UPLOAD_SECTION,
};
use photo_insight_common::view::{NO_FEATURES_MESSAGE, PROGRESS_CAPTION};
use photo_insight_common::{AnalysisState, ResultsView, SelectedPhoto};
use serde_json::json;
use std::time::Duration;

/// 解析結果パネルをテキスト化する（Hidden は空文字）
pub fn render_results(view: &ResultsView) -> String {
    let Some(heading) = view.heading() else {
        return String::new();
    };

    let mut out = format!("{}\n", heading);
    match view {
        ResultsView::Hidden => {}
        ResultsView::Analyzing => {
            out.push_str(&format!("  {}\n", PROGRESS_CAPTION));
        }
        ResultsView::Failed { message } => {
            out.push_str(&format!("  {}\n", message));
        }
        ResultsView::Results { rows } => {
            let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
            for row in rows {
                out.push_str(&format!(
                    "  {:<width$}  {:>4}\n",
                    row.label,
                    row.percent_label(),
                    width = width
                ));
                if let Some(description) = &row.description {
                    out.push_str(&format!("    {}\n", description));
                }
            }
        }
        ResultsView::Empty => {
            out.push_str(&format!("  {}\n", NO_FEATURES_MESSAGE));
        }
    }
    out
}

/// `--json` 用の出力（状態・結果・エラーをまとめる）
///
/// 失敗や中断と「特徴なし」を区別できるよう、結果がない場合は `null` にする。
pub fn analysis_report(state: &AnalysisState<SelectedPhoto>) -> serde_json::Value {
    json!({
        "phase": state.phase().as_str(),
        "photo": state.photo().map(|photo| photo.name.as_str()),
        "results": state.results(),
        "error": state.error(),
    })
}

/// 選択中の写真の概要
pub fn render_photo(photo: &SelectedPhoto) -> String {
    format!("{} ({}, {} bytes)", photo.name, photo.mime_type, photo.size())
}

/// ランディングページの文言
pub fn render_landing() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", HERO.title, HERO.tagline));
    out.push_str(&format!("[{}]  [{}]\n\n", HERO.primary_cta, HERO.secondary_cta));

    out.push_str(&format!("{}\n{}\n", FEATURES_SECTION.heading, FEATURES_SECTION.subheading));
    for feature in FEATURES.iter() {
        out.push_str(&format!("  - {}: {}\n", feature.title, feature.body));
    }

    out.push_str(&format!("\n{}\n{}\n", UPLOAD_SECTION.heading, UPLOAD_SECTION.subheading));
    out.push_str(&format!("  {}: {}\n", UPLOAD_PROMPT.heading, UPLOAD_PROMPT.subheading));
    out.push_str(&format!("\n{}\n", FOOTER_NOTE));
    out
}

/// 解析中のスピナー（進捗率は出さない）
pub fn analyzing_spinner(file_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} {}", PROGRESS_CAPTION, file_name));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
