use crate::error::{PhotoInsightError, Result};
use photo_insight_common::{MockAnalysis, MOCK_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DELAY_ENV: &str = "PHOTO_INSIGHT_DELAY_MS";
const LOG_ENV: &str = "PHOTO_INSIGHT_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 仮解析の待ち時間（ミリ秒）
    pub analysis_delay_ms: u64,
    /// 解析を常に失敗させる
    pub simulate_failure: bool,
    /// tracing の EnvFilter 文字列
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay_ms: MOCK_DELAY_MS,
            simulate_failure: false,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    /// 設定ファイル＋環境変数（警告は捨てる）
    pub fn load() -> Result<Self> {
        Self::load_with_warnings().map(|(config, _)| config)
    }

    /// 設定ファイル＋環境変数
    ///
    /// ログ初期化前に呼ばれるため、無視した環境変数は警告文として返す。
    pub fn load_with_warnings() -> Result<(Self, Vec<String>)> {
        Ok(Self::load_file()?.with_env_overrides())
    }

    /// 設定ファイルの値のみ（環境変数は反映しない）
    pub fn load_file() -> Result<Self> {
        match Self::config_path() {
            Ok(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                Ok(serde_json::from_str(&content)?)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoInsightError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-insight").join("config.json"))
    }

    /// 環境変数を優先
    fn with_env_overrides(mut self) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        if let Ok(value) = std::env::var(DELAY_ENV) {
            match value.trim().parse() {
                Ok(ms) => self.analysis_delay_ms = ms,
                Err(_) => warnings.push(format!("{} が数値ではないため無視します: {}", DELAY_ENV, value)),
            }
        }
        if let Ok(filter) = std::env::var(LOG_ENV) {
            if !filter.trim().is_empty() {
                self.log_filter = filter;
            }
        }
        (self, warnings)
    }

    pub fn mock_analysis(&self) -> MockAnalysis {
        MockAnalysis {
            delay_ms: self.analysis_delay_ms,
            fail: self.simulate_failure,
        }
    }

    /// 保存するのはファイル側の値のみ（環境変数の一時的な上書きは残さない）
    pub fn set_analysis_delay_ms(&mut self, ms: u64) -> Result<()> {
        let mut stored = Self::load_file()?;
        stored.analysis_delay_ms = ms;
        stored.save()?;
        self.analysis_delay_ms = ms;
        Ok(())
    }

    pub fn set_simulate_failure(&mut self, fail: bool) -> Result<()> {
        let mut stored = Self::load_file()?;
        stored.simulate_failure = fail;
        stored.save()?;
        self.simulate_failure = fail;
        Ok(())
    }
}
