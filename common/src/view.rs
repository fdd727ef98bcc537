//! 表示モデル
//!
//! 解析結果パネルと解析ボタンの表示内容を状態から求める。
//! CLI（テキスト出力）とWeb（Leptos）の両方がこの結果を描画する。

use crate::state::AnalysisState;
use crate::types::AnalysisResult;

pub const HEADING_ANALYZING: &str = "Analyzing Photo...";
pub const HEADING_FAILED: &str = "Analysis Failed";
pub const HEADING_COMPLETE: &str = "Analysis Complete";
pub const PROGRESS_CAPTION: &str = "Processing your image with AI...";
pub const NO_FEATURES_MESSAGE: &str = "No significant features detected in this image.";

/// 結果1行分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub id: String,
    pub label: String,
    pub percent: u8,
    pub description: Option<String>,
}

impl From<&AnalysisResult> for ResultRow {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            id: result.id.clone(),
            label: result.label.clone(),
            percent: result.confidence_percent(),
            description: result.description.clone(),
        }
    }
}

impl ResultRow {
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// 解析結果パネルの表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// 何も表示しない
    Hidden,
    Analyzing,
    Failed { message: String },
    Results { rows: Vec<ResultRow> },
    /// 結果が0件
    Empty,
}

impl ResultsView {
    /// 優先順位: 解析中 → エラー → 結果あり → 結果0件
    pub fn build(
        is_analyzing: bool,
        results: Option<&[AnalysisResult]>,
        error: Option<&str>,
    ) -> Self {
        if is_analyzing {
            return ResultsView::Analyzing;
        }
        if let Some(message) = error {
            return ResultsView::Failed {
                message: message.to_string(),
            };
        }
        match results {
            Some([]) => ResultsView::Empty,
            Some(results) => ResultsView::Results {
                rows: results.iter().map(ResultRow::from).collect(),
            },
            None => ResultsView::Hidden,
        }
    }

    pub fn from_state<P>(state: &AnalysisState<P>) -> Self {
        let flags = state.flags();
        Self::build(flags.is_analyzing, flags.results, flags.error)
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultsView::Hidden)
    }

    pub fn heading(&self) -> Option<&'static str> {
        match self {
            ResultsView::Hidden => None,
            ResultsView::Analyzing => Some(HEADING_ANALYZING),
            ResultsView::Failed { .. } => Some(HEADING_FAILED),
            ResultsView::Results { .. } | ResultsView::Empty => Some(HEADING_COMPLETE),
        }
    }
}

/// 解析ボタンの表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeButton {
    /// 写真未選択
    Hidden,
    Ready,
    Busy,
}

impl AnalyzeButton {
    pub fn from_state<P>(state: &AnalysisState<P>) -> Self {
        if state.is_analyzing() {
            AnalyzeButton::Busy
        } else if state.photo().is_some() {
            AnalyzeButton::Ready
        } else {
            AnalyzeButton::Hidden
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyzeButton::Busy => "Analyzing...",
            AnalyzeButton::Hidden | AnalyzeButton::Ready => "Analyze Photo",
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, AnalyzeButton::Ready)
    }
}
