// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::playing_field::PlayingField;
use crate::system::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆
///
/// ピラミッドが空になっていたら GameState を Won に更新する。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, field: &mut PlayingField, state: &mut GameState) {
        if state.status != GameStatus::Playing {
            return;
        }
        if field.win() {
            info!("WinConditionSystem: pyramid cleared, you win!");
            state.status = GameStatus::Won;
        }
    }
}
