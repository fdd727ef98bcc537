//! ブラウザで選択された写真

use gloo::file::{File, ObjectUrl};
use photo_insight_common::PhotoHandle;

/// ドロップ/ファイル選択で得たFile
#[derive(Debug, Clone)]
pub struct BrowserPhoto {
    file: File,
    name: String,
    mime_type: String,
}

impl BrowserPhoto {
    /// プレビュー用URLを作る（ドロップ時に revoke される）
    pub fn object_url(&self) -> ObjectUrl {
        ObjectUrl::from(self.file.clone())
    }

    pub fn size(&self) -> u64 {
        self.file.size()
    }
}

impl From<web_sys::File> for BrowserPhoto {
    fn from(file: web_sys::File) -> Self {
        let file = File::from(file);
        Self {
            name: file.name(),
            mime_type: file.raw_mime_type(),
            file,
        }
    }
}

impl PhotoHandle for BrowserPhoto {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// FileList を写真ハンドルの列に変換
pub fn photos_from_list(list: &web_sys::FileList) -> Vec<BrowserPhoto> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserPhoto::from)
        .collect()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn web_file(name: &str, mime_type: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&JsValue::from_str("data"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime_type);
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    fn wasm_browser_photo_maps_name_and_mime() {
        let photo = BrowserPhoto::from(web_file("cat.png", "image/png"));
        assert_eq!(photo.name(), "cat.png");
        assert_eq!(photo.mime_type(), "image/png");
        assert!(photo.is_image());
        assert_eq!(photo.size(), 4);
    }

    #[wasm_bindgen_test]
    fn wasm_browser_photo_non_image() {
        let photo = BrowserPhoto::from(web_file("notes.txt", "text/plain"));
        assert_eq!(photo.mime_type(), "text/plain");
        assert!(!photo.is_image());
    }
}
