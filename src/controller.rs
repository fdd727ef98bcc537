//! ページコントローラ
//!
//! 解析フローの状態を所有し、アクションを `reduce` に通して遷移させる。
//! `Effect` に応じて解析タスクを起動・破棄し、完了通知をチャネルで受け取る。

use crate::analyzer::{AnalysisMessage, AnalysisTask, Analyzer};
use photo_insight_common::{
    reduce, Action, AnalysisState, AnalyzeButton, Effect, Phase, PhotoHandle, ResultsView,
    SelectedPhoto, TicketIssuer, Transition,
};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct PageController<A: Analyzer> {
    analyzer: Arc<A>,
    state: AnalysisState<SelectedPhoto>,
    tickets: TicketIssuer,
    inflight: Option<AnalysisTask>,
    tx: UnboundedSender<AnalysisMessage>,
    rx: UnboundedReceiver<AnalysisMessage>,
}

impl<A: Analyzer> PageController<A> {
    pub fn new(analyzer: A) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            analyzer: Arc::new(analyzer),
            state: AnalysisState::Idle,
            tickets: TicketIssuer::default(),
            inflight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AnalysisState<SelectedPhoto> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_analyzing(&self) -> bool {
        self.state.is_analyzing()
    }

    pub fn results_view(&self) -> ResultsView {
        ResultsView::from_state(&self.state)
    }

    pub fn analyze_button(&self) -> AnalyzeButton {
        AnalyzeButton::from_state(&self.state)
    }

    /// 写真を選択する。画像以外は無視して false を返す
    pub fn select_photo(&mut self, photo: SelectedPhoto) -> bool {
        if !photo.is_image() {
            tracing::debug!(file = %photo.name, mime = %photo.mime_type, "画像ではないため選択を無視");
            return false;
        }
        tracing::info!(file = %photo.name, size = photo.size(), "写真を選択");
        self.dispatch(Action::SelectPhoto(photo));
        true
    }

    pub fn remove_photo(&mut self) {
        tracing::info!("写真を削除");
        self.dispatch(Action::RemovePhoto);
    }

    /// 解析を開始する。写真未選択・解析中なら何もせず false を返す
    pub fn analyze(&mut self) -> bool {
        if !self.state.can_analyze() {
            tracing::debug!(phase = self.phase().as_str(), "解析を開始できない状態");
            return false;
        }
        let ticket = self.tickets.issue();
        self.dispatch(Action::StartAnalysis { ticket });
        self.is_analyzing()
    }

    /// 実行中の解析が終わるまで完了通知を処理する
    pub async fn wait_for_completion(&mut self) -> Phase {
        while self.is_analyzing() {
            match self.rx.recv().await {
                Some(message) => self.handle_message(message),
                None => break,
            }
        }
        self.phase()
    }

    /// 完了通知を反映する（古いチケットは `reduce` 側で無視される）
    pub fn handle_message(&mut self, message: AnalysisMessage) {
        let AnalysisMessage { ticket, outcome } = message;

        if self.inflight.as_ref().map(AnalysisTask::ticket) == Some(ticket) {
            self.inflight = None;
        }

        let action = match outcome {
            Ok(results) => {
                tracing::info!(%ticket, count = results.len(), "解析完了");
                Action::AnalysisSucceeded { ticket, results }
            }
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "解析失敗");
                Action::AnalysisFailed { ticket }
            }
        };
        self.dispatch(action);
    }

    fn dispatch(&mut self, action: Action<SelectedPhoto>) {
        let from = self.phase();
        let Transition { state, effect } = reduce(&self.state, action);
        self.state = state;

        let to = self.phase();
        if from != to {
            tracing::debug!(from = from.as_str(), to = to.as_str(), "状態遷移");
        }

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect<SelectedPhoto>) {
        match effect {
            Effect::Run { ticket, photo } => {
                tracing::info!(%ticket, file = %photo.name, "解析を開始");
                let task = AnalysisTask::spawn(Arc::clone(&self.analyzer), ticket, photo, self.tx.clone());
                if let Some(previous) = self.inflight.replace(task) {
                    previous.cancel();
                }
            }
            Effect::Cancel { ticket } => {
                if let Some(task) = self.inflight.take() {
                    tracing::info!(%ticket, "実行中の解析をキャンセル");
                    task.cancel();
                }
            }
        }
    }
}
