// src/system.rs

use crate::components::game_state::GameState;
use crate::logic::playing_field::PlayingField;

/// System（システム）トレイトだよ！
///
/// 盤面が変わったあとに走らせる小さなロジックの単位。
/// blocked の付け直しや勝利判定みたいに「毎回やること」をここにまとめる。
pub trait System {
    /// このシステムを実行するよ！
    ///
    /// # 引数
    /// - `field`: 盤面。必要ならカードの状態を書き換える。
    /// - `state`: ゲーム全体の状態 (Playing / Won)。
    fn run(&mut self, field: &mut PlayingField, state: &mut GameState);
}
