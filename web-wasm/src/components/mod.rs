pub mod analysis_results;
pub mod analyze_button;
pub mod features;
pub mod footer;
pub mod hero;
pub mod photo_upload;
pub mod progress_bar;
pub mod sign_in_panel;
