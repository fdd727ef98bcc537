//! 解析フローの状態遷移
//!
//! Idle → PhotoSelected → Analyzing → Complete | Failed
//!
//! 状態は `reduce` でのみ遷移する。解析タスクの起動・キャンセルは
//! `Effect` として呼び出し側に返し、実行は各ランタイム（tokio / WASM）に任せる。

use crate::mock::ANALYSIS_FAILED_MESSAGE;
use crate::types::{AnalysisResult, PhotoHandle};

/// 解析1回分の識別子
///
/// 完了通知はチケットが一致した場合のみ反映される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnalysisTicket(pub u64);

impl std::fmt::Display for AnalysisTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// チケット発行器（単調増加）
#[derive(Debug, Clone, Default)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> AnalysisTicket {
        self.last += 1;
        AnalysisTicket(self.last)
    }
}

/// 解析フローの状態
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState<P> {
    Idle,
    PhotoSelected { photo: P },
    Analyzing { photo: P, ticket: AnalysisTicket },
    Complete { photo: P, results: Vec<AnalysisResult> },
    Failed { photo: P, error: String },
}

impl<P> Default for AnalysisState<P> {
    fn default() -> Self {
        AnalysisState::Idle
    }
}

/// 状態の種類（ログ・テスト用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PhotoSelected,
    Analyzing,
    Complete,
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::PhotoSelected => "photo_selected",
            Phase::Analyzing => "analyzing",
            Phase::Complete => "complete",
            Phase::Failed => "failed",
        }
    }
}

/// 表示側から見た4つのフラグ
///
/// results と error は同時に Some にならない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiFlags<'a, P> {
    pub selected_photo: Option<&'a P>,
    pub is_analyzing: bool,
    pub results: Option<&'a [AnalysisResult]>,
    pub error: Option<&'a str>,
}

impl<P> AnalysisState<P> {
    pub fn phase(&self) -> Phase {
        match self {
            AnalysisState::Idle => Phase::Idle,
            AnalysisState::PhotoSelected { .. } => Phase::PhotoSelected,
            AnalysisState::Analyzing { .. } => Phase::Analyzing,
            AnalysisState::Complete { .. } => Phase::Complete,
            AnalysisState::Failed { .. } => Phase::Failed,
        }
    }

    pub fn photo(&self) -> Option<&P> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::PhotoSelected { photo }
            | AnalysisState::Analyzing { photo, .. }
            | AnalysisState::Complete { photo, .. }
            | AnalysisState::Failed { photo, .. } => Some(photo),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing { .. })
    }

    /// 実行中の解析チケット
    pub fn ticket(&self) -> Option<AnalysisTicket> {
        match self {
            AnalysisState::Analyzing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&[AnalysisResult]> {
        match self {
            AnalysisState::Complete { results, .. } => Some(results),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn flags(&self) -> UiFlags<'_, P> {
        UiFlags {
            selected_photo: self.photo(),
            is_analyzing: self.is_analyzing(),
            results: self.results(),
            error: self.error(),
        }
    }

    /// 解析を開始できる状態か
    pub fn can_analyze(&self) -> bool {
        matches!(
            self,
            AnalysisState::PhotoSelected { .. }
                | AnalysisState::Complete { .. }
                | AnalysisState::Failed { .. }
        )
    }
}

/// 状態遷移のトリガー
#[derive(Debug, Clone, PartialEq)]
pub enum Action<P> {
    /// 写真を選択（非画像は無視）
    SelectPhoto(P),
    RemovePhoto,
    /// 解析開始。チケットは呼び出し側が `TicketIssuer` で発行する
    StartAnalysis { ticket: AnalysisTicket },
    AnalysisSucceeded {
        ticket: AnalysisTicket,
        results: Vec<AnalysisResult>,
    },
    AnalysisFailed { ticket: AnalysisTicket },
}

/// 遷移に伴って呼び出し側が実行する副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<P> {
    /// 解析タスクを起動
    Run { ticket: AnalysisTicket, photo: P },
    /// 実行中の解析タスクを破棄
    Cancel { ticket: AnalysisTicket },
}

/// 遷移結果
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<P> {
    pub state: AnalysisState<P>,
    pub effect: Option<Effect<P>>,
}

impl<P> Transition<P> {
    fn to(state: AnalysisState<P>) -> Self {
        Self { state, effect: None }
    }

    fn with(state: AnalysisState<P>, effect: Effect<P>) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }

    /// 状態が変化しなかった場合の遷移
    fn unchanged(state: &AnalysisState<P>) -> Self
    where
        P: Clone,
    {
        Self::to(state.clone())
    }
}

/// 状態遷移関数
///
/// 現在の状態とアクションから次の状態と副作用を求める。入力は変更しない。
pub fn reduce<P: PhotoHandle>(state: &AnalysisState<P>, action: Action<P>) -> Transition<P> {
    match action {
        Action::SelectPhoto(photo) => {
            if !photo.is_image() {
                return Transition::unchanged(state);
            }
            let next = AnalysisState::PhotoSelected { photo };
            match state.ticket() {
                Some(ticket) => Transition::with(next, Effect::Cancel { ticket }),
                None => Transition::to(next),
            }
        }

        Action::RemovePhoto => match state.ticket() {
            Some(ticket) => Transition::with(AnalysisState::Idle, Effect::Cancel { ticket }),
            None => Transition::to(AnalysisState::Idle),
        },

        Action::StartAnalysis { ticket } => {
            if !state.can_analyze() {
                return Transition::unchanged(state);
            }
            let Some(photo) = state.photo().cloned() else {
                return Transition::unchanged(state);
            };
            Transition::with(
                AnalysisState::Analyzing {
                    photo: photo.clone(),
                    ticket,
                },
                Effect::Run { ticket, photo },
            )
        }

        Action::AnalysisSucceeded { ticket, results } => match state {
            AnalysisState::Analyzing {
                photo,
                ticket: current,
            } if *current == ticket => Transition::to(AnalysisState::Complete {
                photo: photo.clone(),
                results,
            }),
            _ => Transition::unchanged(state),
        },

        Action::AnalysisFailed { ticket } => match state {
            AnalysisState::Analyzing {
                photo,
                ticket: current,
            } if *current == ticket => Transition::to(AnalysisState::Failed {
                photo: photo.clone(),
                error: ANALYSIS_FAILED_MESSAGE.to_string(),
            }),
            _ => Transition::unchanged(state),
        },
    }
}
