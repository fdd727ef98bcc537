//! 解析処理
//!
//! `Analyzer` が写真から結果リストを作る。現状は固定結果を返す `MockAnalyzer` のみ。

mod task;

pub use task::{AnalysisMessage, AnalysisTask};

use crate::error::Result;
use photo_insight_common::{AnalysisResult, MockAnalysis, SelectedPhoto};
use std::future::Future;
use std::time::Duration;

/// 解析バックエンド
///
/// 入力は写真（生バイト列）、出力は順序付きの結果リストまたはエラー。
pub trait Analyzer: Send + Sync + 'static {
    fn analyze(
        &self,
        photo: &SelectedPhoto,
    ) -> impl Future<Output = Result<Vec<AnalysisResult>>> + Send;
}

/// 一定時間待ってから固定結果を返す仮の解析
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer {
    mock: MockAnalysis,
}

impl MockAnalyzer {
    pub fn new(mock: MockAnalysis) -> Self {
        Self { mock }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockAnalysis {
            delay_ms: delay.as_millis() as u64,
            fail: false,
        })
    }

    pub fn failing(delay: Duration) -> Self {
        Self::new(MockAnalysis {
            delay_ms: delay.as_millis() as u64,
            fail: true,
        })
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(
        &self,
        photo: &SelectedPhoto,
    ) -> impl Future<Output = Result<Vec<AnalysisResult>>> + Send {
        let mock = self.mock;
        let file_name = photo.name.clone();
        let size = photo.size();
        async move {
            tracing::debug!(file = %file_name, size, delay_ms = mock.delay_ms, "仮解析を開始");
            tokio::time::sleep(Duration::from_millis(mock.delay_ms)).await;
            Ok(mock.outcome()?)
        }
    }
}
