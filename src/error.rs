use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoInsightError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ではないファイルです: {0}")]
    NotAnImage(String),

    #[error("写真が選択されていません")]
    NoPhotoSelected,

    #[error("解析タスクが異常終了しました: {0}")]
    TaskAborted(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_insight_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoInsightError>;
