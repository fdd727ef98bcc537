use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-insight")]
#[command(about = "写真AI解析デモ（写真選択・仮解析・結果表示）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真を選択して解析し、結果を表示
    Analyze {
        /// 写真ファイルのパス
        #[arg(required = true)]
        photo: PathBuf,

        /// 解析の待ち時間（ミリ秒、省略時は設定値）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// 解析を失敗させる（エラー表示の確認用）
        #[arg(long)]
        fail: bool,

        /// 指定ミリ秒後に写真を削除する（解析のキャンセル確認用）
        #[arg(long)]
        remove_after_ms: Option<u64>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ドロップ時と同じ規則でファイルを判定（先頭1件・画像のみ）
    Inspect {
        /// 判定するファイル
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// ランディングページの文言を表示
    Landing,

    /// 設定を表示/編集
    Config {
        /// 解析の待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// 解析を常に失敗させるかを設定
        #[arg(long)]
        set_simulate_failure: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
