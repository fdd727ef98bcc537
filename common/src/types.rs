//! 写真と解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - PhotoHandle: 選択された写真への参照（ネイティブはバイト列、WASMはFile）
//! - SelectedPhoto: ネイティブ側の写真
//! - AnalysisResult: 解析結果の1項目

use serde::{Deserialize, Serialize};

/// 画像として受け付けるMIMEタイプの接頭辞
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// MIMEタイプが画像かどうか
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with(IMAGE_MIME_PREFIX)
}

/// 状態機械が保持する写真ハンドル
///
/// 実体（バイト列、ブラウザのFile等）は実装側が持つ。
pub trait PhotoHandle: Clone {
    /// 表示用ファイル名
    fn name(&self) -> &str;

    /// MIMEタイプ（不明な場合は空文字）
    fn mime_type(&self) -> &str;

    fn is_image(&self) -> bool {
        is_image_mime(self.mime_type())
    }
}

/// ネイティブ環境で選択された写真
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedPhoto {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// ファイルサイズ（バイト）
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl PhotoHandle for SelectedPhoto {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// AI解析結果（1項目）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// リスト内で一意なID
    pub id: String,

    pub label: String,

    /// 信頼度 (0.0〜1.0)
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AnalysisResult {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        confidence: f64,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            confidence,
            description: description.map(str::to_string),
        }
    }

    /// 表示用パーセント値 round(confidence × 100)
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
        // 接頭辞一致のみ（大文字は画像扱いしない）
        assert!(!is_image_mime("IMAGE/PNG"));
    }

    #[test]
    fn test_selected_photo_handle() {
        let photo = SelectedPhoto::new("cat.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]);
        assert_eq!(photo.name(), "cat.jpg");
        assert_eq!(photo.size(), 3);
        assert!(photo.is_image());

        let text = SelectedPhoto::new("notes.txt", "text/plain", b"hello".to_vec());
        assert!(!text.is_image());
    }

    #[test]
    fn test_confidence_percent() {
        let r = AnalysisResult::new("1", "Object Detection", 0.92, None);
        assert_eq!(r.confidence_percent(), 92);

        let r = AnalysisResult::new("2", "Half", 0.875, None);
        assert_eq!(r.confidence_percent(), 88);

        let r = AnalysisResult::new("3", "Zero", 0.0, None);
        assert_eq!(r.confidence_percent(), 0);

        let r = AnalysisResult::new("4", "Full", 1.0, None);
        assert_eq!(r.confidence_percent(), 100);
    }

    #[test]
    fn test_confidence_percent_out_of_range_is_clamped() {
        assert_eq!(AnalysisResult::new("1", "x", 1.7, None).confidence_percent(), 100);
        assert_eq!(AnalysisResult::new("2", "y", -0.3, None).confidence_percent(), 0);
    }

    #[test]
    fn test_analysis_result_serialize() {
        let result = AnalysisResult::new("1", "Color Analysis", 0.95, Some("Dominant colors"));
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("\"label\":\"Color Analysis\""));
        assert!(json.contains("\"description\":\"Dominant colors\""));

        let bare = AnalysisResult::new("2", "Scene", 0.5, None);
        let json = serde_json::to_string(&bare).expect("シリアライズ失敗");
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_analysis_result_deserialize_without_description() {
        let json = r#"{"id":"9","label":"Faces","confidence":0.4}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("パース失敗");
        assert_eq!(result.id, "9");
        assert_eq!(result.description, None);
    }
}
