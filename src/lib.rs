//! Photo Insight
//!
//! 写真の選択 → 仮解析 → 結果表示のフローをネイティブ環境で動かすライブラリ

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod picker;
pub mod render;
