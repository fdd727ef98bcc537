//! ページコントローラのフローテスト
//!
//! 写真選択 → 解析 → 完了/失敗/キャンセルの状態遷移を検証

use photo_insight::analyzer::{AnalysisMessage, Analyzer, MockAnalyzer};
use photo_insight::controller::PageController;
use photo_insight::error::{PhotoInsightError, Result};
use photo_insight_common::{
    AnalysisResult, AnalysisTicket, AnalyzeButton, Phase, ResultsView, SelectedPhoto,
    ANALYSIS_FAILED_MESSAGE,
};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn jpeg(name: &str) -> SelectedPhoto {
    SelectedPhoto::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
}

fn text_file() -> SelectedPhoto {
    SelectedPhoto::new("notes.txt", "text/plain", b"hello".to_vec())
}

fn assert_exclusive<A: Analyzer>(controller: &PageController<A>) {
    let state = controller.state();
    assert!(
        !(state.results().is_some() && state.error().is_some()),
        "results と error が同時にセットされている"
    );
}

/// 呼び出し回数を数え、空の結果を返す解析
#[derive(Default)]
struct CountingAnalyzer {
    calls: Arc<AtomicUsize>,
}

impl Analyzer for CountingAnalyzer {
    fn analyze(
        &self,
        _photo: &SelectedPhoto,
    ) -> impl Future<Output = Result<Vec<AnalysisResult>>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Vec::new())
        }
    }
}

/// 必ずパニックする解析
struct PanickingAnalyzer;

impl Analyzer for PanickingAnalyzer {
    fn analyze(
        &self,
        photo: &SelectedPhoto,
    ) -> impl Future<Output = Result<Vec<AnalysisResult>>> + Send {
        let name = photo.name.clone();
        async move {
            if !name.is_empty() {
                panic!("analyzer exploded on {}", name);
            }
            Ok(Vec::new())
        }
    }
}

/// 非画像の選択は状態を変えない
#[tokio::test]
async fn test_select_non_image_is_noop() {
    let mut controller = PageController::new(MockAnalyzer::default());
    assert!(!controller.select_photo(text_file()));
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.analyze_button(), AnalyzeButton::Hidden);
}

/// 写真なしの解析は何もしない
#[tokio::test]
async fn test_analyze_without_photo_is_noop() {
    let mut controller = PageController::new(MockAnalyzer::default());
    assert!(!controller.analyze());
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.results_view(), ResultsView::Hidden);
}

/// 成功: PhotoSelected → Analyzing → Complete（固定3件）
#[tokio::test(start_paused = true)]
async fn test_successful_analysis() {
    let mut controller = PageController::new(MockAnalyzer::with_delay(Duration::from_millis(3000)));

    assert!(controller.select_photo(jpeg("beach.jpg")));
    assert_eq!(controller.phase(), Phase::PhotoSelected);
    assert_eq!(controller.analyze_button(), AnalyzeButton::Ready);

    assert!(controller.analyze());
    assert_eq!(controller.phase(), Phase::Analyzing);
    assert_eq!(controller.results_view(), ResultsView::Analyzing);
    assert_eq!(controller.analyze_button(), AnalyzeButton::Busy);

    let phase = controller.wait_for_completion().await;
    assert_eq!(phase, Phase::Complete);
    assert!(!controller.is_analyzing());

    let results = controller.state().results().expect("結果があるはず");
    assert_eq!(results.len(), 3);
    for r in results {
        assert!((0.0..=1.0).contains(&r.confidence));
        assert_eq!(r.confidence_percent() as f64, (r.confidence * 100.0).round());
    }
    assert!(controller.state().error().is_none());

    let ResultsView::Results { rows } = controller.results_view() else {
        panic!("Results が期待された");
    };
    let percents: Vec<u8> = rows.iter().map(|r| r.percent).collect();
    assert_eq!(percents, vec![92, 87, 95]);
}

/// 失敗: PhotoSelected → Analyzing → Failed（固定メッセージ、結果なし）
#[tokio::test(start_paused = true)]
async fn test_failed_analysis() {
    let mut controller = PageController::new(MockAnalyzer::failing(Duration::from_millis(3000)));
    controller.select_photo(jpeg("beach.jpg"));
    assert!(controller.analyze());

    let phase = controller.wait_for_completion().await;
    assert_eq!(phase, Phase::Failed);
    assert!(!controller.is_analyzing());
    assert_eq!(controller.state().error(), Some(ANALYSIS_FAILED_MESSAGE));
    assert!(controller.state().results().is_none());
    assert_eq!(
        controller.results_view(),
        ResultsView::Failed {
            message: ANALYSIS_FAILED_MESSAGE.to_string()
        }
    );
}

/// パニックした解析も失敗として扱う
#[tokio::test]
async fn test_panicking_analyzer_becomes_failed() {
    let mut controller = PageController::new(PanickingAnalyzer);
    controller.select_photo(jpeg("a.jpg"));
    controller.analyze();

    assert_eq!(controller.wait_for_completion().await, Phase::Failed);
    assert_eq!(controller.state().error(), Some(ANALYSIS_FAILED_MESSAGE));
}

/// 解析中の二重実行は防止される
#[tokio::test(start_paused = true)]
async fn test_double_submit_is_prevented() {
    let analyzer = CountingAnalyzer::default();
    let calls = Arc::clone(&analyzer.calls);
    let mut controller = PageController::new(analyzer);

    controller.select_photo(jpeg("a.jpg"));
    assert!(controller.analyze());
    assert!(!controller.analyze());
    assert!(!controller.analyze());

    assert_eq!(controller.wait_for_completion().await, Phase::Complete);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // 0件の結果は Empty 表示
    assert_eq!(controller.results_view(), ResultsView::Empty);
}

/// 写真削除は常に Idle に戻る
#[tokio::test(start_paused = true)]
async fn test_remove_photo_returns_to_idle() {
    let mut controller = PageController::new(MockAnalyzer::with_delay(Duration::from_millis(10)));

    controller.remove_photo();
    assert_eq!(controller.phase(), Phase::Idle);

    controller.select_photo(jpeg("a.jpg"));
    controller.remove_photo();
    assert_eq!(controller.phase(), Phase::Idle);

    controller.select_photo(jpeg("a.jpg"));
    controller.analyze();
    controller.wait_for_completion().await;
    assert_eq!(controller.phase(), Phase::Complete);
    controller.remove_photo();
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.state().results().is_none());
    assert_exclusive(&controller);
}

/// 解析中に写真を削除すると、完了結果は反映されない
#[tokio::test(start_paused = true)]
async fn test_remove_during_analysis_discards_completion() {
    let mut controller = PageController::new(MockAnalyzer::with_delay(Duration::from_millis(3000)));
    controller.select_photo(jpeg("a.jpg"));
    controller.analyze();

    let waited = tokio::time::timeout(Duration::from_millis(100), controller.wait_for_completion()).await;
    assert!(waited.is_err(), "3秒の解析が100msで終わるはずがない");

    controller.remove_photo();
    assert_eq!(controller.phase(), Phase::Idle);

    // 本来の完了時刻を過ぎても Idle のまま
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(controller.wait_for_completion().await, Phase::Idle);
    assert!(controller.state().results().is_none());
}

/// 解析中に別の写真を選ぶと、前の解析は破棄される
#[tokio::test(start_paused = true)]
async fn test_replace_photo_during_analysis() {
    let mut controller = PageController::new(MockAnalyzer::with_delay(Duration::from_millis(3000)));
    controller.select_photo(jpeg("first.jpg"));
    controller.analyze();

    let _ = tokio::time::timeout(Duration::from_millis(100), controller.wait_for_completion()).await;
    assert!(controller.select_photo(jpeg("second.jpg")));
    assert_eq!(controller.phase(), Phase::PhotoSelected);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(controller.phase(), Phase::PhotoSelected);
    assert_eq!(controller.state().photo().map(|p| p.name.as_str()), Some("second.jpg"));

    controller.analyze();
    assert_eq!(controller.wait_for_completion().await, Phase::Complete);
}

/// 古いチケットの完了通知は無視される
#[tokio::test(start_paused = true)]
async fn test_stale_message_is_ignored() {
    let mut controller = PageController::new(MockAnalyzer::with_delay(Duration::from_millis(3000)));
    controller.select_photo(jpeg("a.jpg"));
    controller.analyze();

    controller.handle_message(AnalysisMessage {
        ticket: AnalysisTicket(999),
        outcome: Err(PhotoInsightError::NoPhotoSelected),
    });
    assert_eq!(controller.phase(), Phase::Analyzing);

    assert_eq!(controller.wait_for_completion().await, Phase::Complete);
}

/// 失敗後に再解析すると結果で置き換わる
#[tokio::test(start_paused = true)]
async fn test_reanalyze_after_failure() {
    let mut controller = PageController::new(MockAnalyzer::failing(Duration::from_millis(10)));
    controller.select_photo(jpeg("a.jpg"));
    controller.analyze();
    assert_eq!(controller.wait_for_completion().await, Phase::Failed);

    assert!(controller.analyze());
    assert!(controller.state().error().is_none());
    assert_eq!(controller.wait_for_completion().await, Phase::Failed);
    assert_exclusive(&controller);

    // 新しい写真の選択でエラーは消える
    controller.select_photo(jpeg("b.jpg"));
    assert!(controller.state().error().is_none());
    assert_eq!(controller.phase(), Phase::PhotoSelected);
}
