// src/components/selection.rs
//! プレイヤーが選んだカードを一時的に持っておくバッファだよ。
//! 昔はグローバルなリストだったけど、今はセッションが持つ普通の値！

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::PyramidPosition;

/// 選ばれたカードがどこから来たか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSource {
    /// ピラミッドのこのマスから
    Pyramid(PyramidPosition),
    /// 捨て札の一番上から
    Waste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    pub card: Card,
    pub source: CardSource,
}

impl SelectedCard {
    pub fn new(card: Card, source: CardSource) -> Self {
        Self { card, source }
    }

    /// 同じ場所から選ばれたなら同じ選択。
    pub fn same_source(&self, other: &SelectedCard) -> bool {
        self.source == other.source
    }
}

/// 0〜2 枚の選択。2 枚目が来たらすぐ判定するから、実際に溜まるのは 1 枚まで。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: Vec<SelectedCard>,
}

impl Selection {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&SelectedCard> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    /// 追加できたら true。満杯なら何もしない。
    pub fn push(&mut self, selected: SelectedCard) -> bool {
        if self.is_full() {
            return false;
        }
        self.cards.push(selected);
        true
    }

    pub fn contains_source(&self, source: CardSource) -> bool {
        self.cards.iter().any(|selected| selected.source == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedCard> {
        self.cards.iter()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
