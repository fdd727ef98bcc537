//! 写真の選択
//!
//! ファイルを読み込み、MIMEタイプを判定して `SelectedPhoto` を作る。
//! ドロップ時と同じく先頭1件のみ、`image/` のみを受け付ける。

use crate::error::{PhotoInsightError, Result};
use image::ImageFormat;
use photo_insight_common::{DragEvent, DragState, PhotoHandle, SelectedPhoto};
use std::path::{Path, PathBuf};

const UNKNOWN_MIME: &str = "application/octet-stream";

/// 拡張子 → 内容の順でMIMEタイプを判定
pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if let Ok(format) = ImageFormat::from_path(path) {
        return format.to_mime_type();
    }
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => UNKNOWN_MIME,
    }
}

/// ファイルを読み込んで写真ハンドルを作る（画像かどうかは判定しない）
pub fn load_photo(path: &Path) -> Result<SelectedPhoto> {
    if !path.is_file() {
        return Err(PhotoInsightError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = detect_mime(path, &bytes);

    tracing::debug!(file = %name, mime = mime_type, size = bytes.len(), "写真を読み込みました");
    Ok(SelectedPhoto::new(name, mime_type, bytes))
}

/// 画像として読み込む。画像でなければエラー
pub fn load_image(path: &Path) -> Result<SelectedPhoto> {
    let photo = load_photo(path)?;
    if !photo.is_image() {
        return Err(PhotoInsightError::NotAnImage(format!(
            "{} ({})",
            photo.name, photo.mime_type
        )));
    }
    Ok(photo)
}

/// ドロップされたファイル群から写真を選ぶ
///
/// 先頭のみを見る。画像でなければ `None`（エラーにはしない）。
pub fn pick_dropped(paths: &[PathBuf]) -> Result<Option<SelectedPhoto>> {
    let Some(first) = paths.first() else {
        return Ok(None);
    };
    if paths.len() > 1 {
        tracing::debug!(ignored = paths.len() - 1, "先頭以外のファイルは無視します");
    }

    let photo = load_photo(first)?;
    let outcome = DragState::DragOver.handle(DragEvent::Drop(vec![photo]));
    if outcome.accepted.is_none() {
        tracing::debug!(file = %first.display(), "画像ではないため無視しました");
    }
    Ok(outcome.accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_detect_mime_by_extension() {
        assert_eq!(detect_mime(Path::new("a.jpg"), b""), "image/jpeg");
        assert_eq!(detect_mime(Path::new("a.JPEG"), b""), "image/jpeg");
        assert_eq!(detect_mime(Path::new("a.png"), b""), "image/png");
        assert_eq!(detect_mime(Path::new("a.webp"), b""), "image/webp");
    }

    #[test]
    fn test_detect_mime_by_content() {
        assert_eq!(detect_mime(Path::new("noext"), PNG_MAGIC), "image/png");
        assert_eq!(detect_mime(Path::new("a.txt"), b"hello"), UNKNOWN_MIME);
    }
}
