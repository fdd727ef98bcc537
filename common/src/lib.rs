//! Photo Insight Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態遷移・表示モデル

pub mod types;
pub mod state;
pub mod drag;
pub mod view;
pub mod mock;
pub mod landing;
pub mod error;

pub use types::{AnalysisResult, PhotoHandle, SelectedPhoto, is_image_mime};
pub use state::{
    reduce, Action, AnalysisState, AnalysisTicket, Effect, Phase, TicketIssuer, Transition,
    UiFlags,
};
pub use drag::{DragEvent, DragOutcome, DragState};
pub use view::{AnalyzeButton, ResultRow, ResultsView};
pub use mock::{mock_results, MockAnalysis, ANALYSIS_FAILED_MESSAGE, MOCK_DELAY_MS};
pub use error::{Error, Result};
