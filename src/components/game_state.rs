// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// 一人用だから勝者の ID とかは要らない。遊んでるか、勝ったか、だけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// ピラミッドが全部消えた！勝利！
    Won,
}

/// ゲーム状態を保持する構造体。
/// セッションが一つだけ持って、WinConditionSystem が更新する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self { status: GameStatus::Playing }
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
