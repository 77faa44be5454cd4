// src/snapshot.rs
//! JS 側に渡す盤面のスナップショット！
//! セッションの中身をそのまま出すんじゃなくて、表示に要る情報だけを平たくまとめるよ。

use serde::{Deserialize, Serialize};

use crate::app::session::GameSession;
use crate::components::card::{Card, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::CardSource;

/// カード1枚分のデータ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub rank: u8,
    pub suit: Suit,
    pub label: String,
    pub blocked: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.value(),
            suit: card.suit(),
            label: card.rank().label().to_string(),
            blocked: card.is_blocked(),
        }
    }
}

/// 選択中のカードとその出どころ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionData {
    pub card: CardData,
    pub source: CardSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// 上の段から順に。空いたマスは null。
    pub pyramid: Vec<Vec<Option<CardData>>>,
    pub stock_count: usize,
    pub waste_top: Option<CardData>,
    pub waste_count: usize,
    pub selection: Vec<SelectionData>,
    pub removed_count: usize,
}

impl GameSnapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let field = session.field();
        let pyramid = field
            .pyramid_rows()
            .iter()
            .map(|row| row.iter().map(|slot| slot.as_ref().map(CardData::from)).collect())
            .collect();
        let selection = session
            .selection()
            .iter()
            .map(|picked| SelectionData {
                card: CardData::from(&picked.card),
                source: picked.source,
            })
            .collect();

        Self {
            status: session.status(),
            pyramid,
            stock_count: field.draw_pile().len(),
            waste_top: field.waste_pile().top().map(CardData::from),
            waste_count: field.waste_pile().len(),
            selection,
            removed_count: field.removed_count(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
