//! キャンセル可能な解析タスク

use super::Analyzer;
use crate::error::{PhotoInsightError, Result};
use photo_insight_common::{AnalysisResult, AnalysisTicket, SelectedPhoto};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// 解析タスクからの完了通知
#[derive(Debug)]
pub struct AnalysisMessage {
    pub ticket: AnalysisTicket,
    pub outcome: Result<Vec<AnalysisResult>>,
}

/// 実行中の解析1件
///
/// キャンセル後（またはドロップ後）は完了通知を送らない。
#[derive(Debug)]
pub struct AnalysisTask {
    ticket: AnalysisTicket,
    token: CancellationToken,
}

impl AnalysisTask {
    pub fn spawn<A: Analyzer>(
        analyzer: Arc<A>,
        ticket: AnalysisTicket,
        photo: SelectedPhoto,
        tx: UnboundedSender<AnalysisMessage>,
    ) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            // パニックも失敗として通知するため内側で実行する
            let work = tokio::spawn(async move { analyzer.analyze(&photo).await });
            let abort = work.abort_handle();

            tokio::select! {
                _ = cancelled.cancelled() => {
                    abort.abort();
                    tracing::debug!(%ticket, "解析タスクを破棄しました");
                }
                joined = work => {
                    if cancelled.is_cancelled() {
                        return;
                    }
                    let outcome = joined
                        .unwrap_or_else(|e| Err(PhotoInsightError::TaskAborted(e.to_string())));
                    if tx.send(AnalysisMessage { ticket, outcome }).is_err() {
                        tracing::debug!(%ticket, "受信側が終了済み");
                    }
                }
            }
        });

        Self { ticket, token }
    }

    pub fn ticket(&self) -> AnalysisTicket {
        self.ticket
    }

    pub fn cancel(self) {
        self.token.cancel();
    }
}

impl Drop for AnalysisTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
