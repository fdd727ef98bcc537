//! 写真選択テスト
//!
//! ファイル読み込みとドロップ規則（先頭1件・画像のみ）を検証

use photo_insight::error::PhotoInsightError;
use photo_insight::picker;
use photo_insight_common::PhotoHandle;
use std::path::Path;
use tempfile::tempdir;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// 存在しないファイル
#[test]
fn test_load_missing_file() {
    let result = picker::load_photo(Path::new("/nonexistent/photo-12345.jpg"));
    assert!(matches!(result, Err(PhotoInsightError::FileNotFound(_))));
}

/// 拡張子から判定
#[test]
fn test_load_photo_by_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("beach.jpg");
    std::fs::write(&path, b"dummy").unwrap();

    let photo = picker::load_photo(&path).expect("読み込み失敗");
    assert_eq!(photo.name, "beach.jpg");
    assert_eq!(photo.mime_type, "image/jpeg");
    assert_eq!(photo.size(), 5);
    assert!(photo.is_image());
}

/// 拡張子なしでも内容から判定
#[test]
fn test_load_photo_by_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("upload");
    std::fs::write(&path, PNG_MAGIC).unwrap();

    let photo = picker::load_photo(&path).expect("読み込み失敗");
    assert_eq!(photo.mime_type, "image/png");
}

/// 画像以外は load_image でエラー
#[test]
fn test_load_image_rejects_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let result = picker::load_image(&path);
    assert!(matches!(result, Err(PhotoInsightError::NotAnImage(_))));
}

/// ドロップ: 先頭の画像を採用
#[test]
fn test_pick_dropped_first_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.jpg");
    std::fs::write(&a, PNG_MAGIC).unwrap();
    std::fs::write(&b, b"dummy").unwrap();

    let picked = picker::pick_dropped(&[a, b]).unwrap().expect("選択されるはず");
    assert_eq!(picked.name, "a.png");
}

/// ドロップ: 先頭が画像でなければ無視（エラーにしない）
#[test]
fn test_pick_dropped_ignores_non_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let txt = dir.path().join("readme.txt");
    let jpg = dir.path().join("photo.jpg");
    std::fs::write(&txt, "text").unwrap();
    std::fs::write(&jpg, b"dummy").unwrap();

    let picked = picker::pick_dropped(&[txt, jpg]).unwrap();
    assert!(picked.is_none());
}

/// ドロップ: 空
#[test]
fn test_pick_dropped_empty() {
    assert!(picker::pick_dropped(&[]).unwrap().is_none());
}
