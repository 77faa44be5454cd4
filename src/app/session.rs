// src/app/session.rs
//! 1ゲーム分の状態をまとめて持つセッションだよ！
//! 盤面、選択中のカード、ゲーム状態、設定。UI のハンドラにはこれを &mut で渡す。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};

use crate::components::game_state::{GameState, GameStatus};
use crate::components::selection::Selection;
use crate::config::GameConfig;
use crate::error::DeckError;
use crate::logic::playing_field::PlayingField;
use crate::system::System;
use crate::systems::{BlockedStatusSystem, DealPyramidSystem, WinConditionSystem};

#[derive(Debug)]
pub struct GameSession {
    field: PlayingField,
    selection: Selection,
    state: GameState,
    config: GameConfig,
    deal_system: DealPyramidSystem,
}

impl GameSession {
    /// 設定を受け取って、すぐに 1ゲーム目を配る。
    pub fn new(config: GameConfig) -> Result<Self, DeckError> {
        let deal_system = DealPyramidSystem::new(config.seed);
        let mut session = Self {
            field: PlayingField::new(),
            selection: Selection::new(),
            state: GameState::new(),
            config,
            deal_system,
        };
        session.deal()?;
        Ok(session)
    }

    /// 今の盤面は捨てて、新しい盤面を配り直す。
    pub fn new_game(&mut self) -> Result<(), DeckError> {
        info!("Starting a new game");
        self.field = PlayingField::new();
        self.selection.clear();
        self.state = GameState::new();
        self.deal()
    }

    fn deal(&mut self) -> Result<(), DeckError> {
        self.deal_system.execute(&mut self.field)
    }

    /// カードが動いたあとに毎回走らせるシステムたち。
    pub(crate) fn run_systems(&mut self) {
        let mut blocked_status = BlockedStatusSystem::new();
        let mut win_condition = WinConditionSystem::new();
        let systems: [&mut dyn System; 2] = [&mut blocked_status, &mut win_condition];
        for system in systems {
            system.run(&mut self.field, &mut self.state);
        }
    }

    pub fn field(&self) -> &PlayingField {
        &self.field
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn field_mut(&mut self) -> &mut PlayingField {
        &mut self.field
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}

/// 共有されたセッションをロックする。
/// 前のハンドラがパニックしてロックが壊れていても、中身はそのまま使い続けるよ。
pub fn lock_session(session: &Arc<Mutex<GameSession>>) -> MutexGuard<'_, GameSession> {
    match session.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Session mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
