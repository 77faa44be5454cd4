// src/config/game_config.rs

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// ゲームの設定だよ。JS から JSON で渡してもらう。
/// 書いてない項目は全部デフォルト値になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 配りを固定したいときのシード。None なら毎回ランダム。
    pub seed: Option<u64>,
    /// true ならキングは 1回クリックしただけで取り除く。
    /// false なら同じキングをもう一度クリックして確定する。
    pub kings_on_first_click: bool,
    /// コンソールに出すログのレベル ("error", "warn", "info", "debug", "trace")。
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            kings_on_first_click: false,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 読めないレベル名なら Info にしておく。
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
