//! ドラッグ&ドロップの状態遷移
//!
//! Inactive ⇄ DragOver。解析フローとは独立しており、表示用のフラグのみを持つ。

use crate::types::PhotoHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Inactive,
    DragOver,
}

/// ドロップ領域で発生するイベント
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent<F> {
    Enter,
    Over,
    Leave,
    /// ドロップされたファイル（先頭のみ使用）
    Drop(Vec<F>),
}

/// イベント処理結果
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome<F> {
    pub state: DragState,
    /// 受け付けた写真（ドロップ時かつ画像の場合のみ）
    pub accepted: Option<F>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::DragOver)
    }

    pub fn handle<F: PhotoHandle>(self, event: DragEvent<F>) -> DragOutcome<F> {
        match event {
            DragEvent::Enter | DragEvent::Over => DragOutcome {
                state: DragState::DragOver,
                accepted: None,
            },
            DragEvent::Leave => DragOutcome {
                state: DragState::Inactive,
                accepted: None,
            },
            DragEvent::Drop(files) => DragOutcome {
                state: DragState::Inactive,
                accepted: files.into_iter().next().filter(|file| file.is_image()),
            },
        }
    }
}
