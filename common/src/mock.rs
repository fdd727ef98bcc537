//! 仮の解析処理
//!
//! 実際の解析APIに置き換えるまでの固定結果と遅延設定

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// 仮解析の待ち時間（ミリ秒）
pub const MOCK_DELAY_MS: u64 = 3000;

/// 解析失敗時にユーザーへ表示するメッセージ
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// 固定の解析結果（3件）
pub fn mock_results() -> Vec<AnalysisResult> {
    vec![
        AnalysisResult::new(
            "1",
            "Object Detection",
            0.92,
            Some("Detected multiple objects with high confidence"),
        ),
        AnalysisResult::new(
            "2",
            "Scene Classification",
            0.87,
            Some("Classified as outdoor/nature scene"),
        ),
        AnalysisResult::new(
            "3",
            "Color Analysis",
            0.95,
            Some("Dominant colors: blue, green, yellow"),
        ),
    ]
}

/// 仮解析の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAnalysis {
    pub delay_ms: u64,
    /// trueなら常に失敗させる（エラー表示の確認用）
    pub fail: bool,
}

impl Default for MockAnalysis {
    fn default() -> Self {
        Self {
            delay_ms: MOCK_DELAY_MS,
            fail: false,
        }
    }
}

impl MockAnalysis {
    /// 待機後に返す結果
    pub fn outcome(&self) -> Result<Vec<AnalysisResult>> {
        if self.fail {
            return Err(Error::AnalysisFailed("simulated failure".into()));
        }
        Ok(mock_results())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_results_fixed_set() {
        let results = mock_results();
        assert_eq!(results.len(), 3);

        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Object Detection", "Scene Classification", "Color Analysis"]);

        let percents: Vec<u8> = results.iter().map(|r| r.confidence_percent()).collect();
        assert_eq!(percents, vec![92, 87, 95]);
    }

    #[test]
    fn test_mock_results_invariants() {
        let results = mock_results();
        let ids: HashSet<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), results.len(), "IDが重複している");

        for r in &results {
            assert!((0.0..=1.0).contains(&r.confidence), "{} の信頼度が範囲外", r.label);
            assert!(r.description.is_some());
        }
    }

    #[test]
    fn test_default_delay() {
        let mock = MockAnalysis::default();
        assert_eq!(mock.delay_ms, 3000);
        assert!(!mock.fail);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(MockAnalysis::default().outcome().unwrap().len(), 3);

        let failing = MockAnalysis { delay_ms: 0, fail: true };
        assert!(matches!(failing.outcome(), Err(Error::AnalysisFailed(_))));
    }
}
