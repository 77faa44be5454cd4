// src/logic/pyramid.rs

use crate::components::card::Card;
use crate::components::position::{PyramidPosition, PYRAMID_ROWS};
use crate::logic::rules::is_card_blocked;

/// 三角形に並んだカードのマスたち。
/// row 段目は row + 1 マス。None は「もう取り除かれた」って意味だよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pyramid {
    rows: Vec<Vec<Option<Card>>>,
}

impl Pyramid {
    /// 全マスが空のピラミッド。
    pub fn new() -> Self {
        Self {
            rows: (0..PYRAMID_ROWS).map(|row| vec![None; row + 1]).collect(),
        }
    }

    pub fn get(&self, position: PyramidPosition) -> Option<&Card> {
        self.rows[position.row()][position.column()].as_ref()
    }

    pub fn is_occupied(&self, position: PyramidPosition) -> bool {
        self.get(position).is_some()
    }

    /// カードを置く。置く前に位置を記録しておくよ。
    pub(crate) fn place(&mut self, position: PyramidPosition, mut card: Card) {
        card.set_position(position);
        self.rows[position.row()][position.column()] = Some(card);
    }

    /// マスからカードを取り除いて返す。もう空なら None。
    pub(crate) fn take(&mut self, position: PyramidPosition) -> Option<Card> {
        self.rows[position.row()][position.column()].take()
    }

    /// 押さえているカードがまだ残っているか。
    pub fn is_blocked(&self, position: PyramidPosition) -> bool {
        is_card_blocked(position, |child| self.is_occupied(child))
    }

    /// 残っている全カードの blocked フラグを付け直す。
    /// 先に判定だけ集めてから書き込むよ（読みながら書くと借用で怒られるからね）。
    pub(crate) fn refresh_blocked(&mut self) {
        let statuses: Vec<(PyramidPosition, bool)> = PyramidPosition::all()
            .filter(|&position| self.is_occupied(position))
            .map(|position| (position, self.is_blocked(position)))
            .collect();

        for (position, blocked) in statuses {
            if let Some(card) = self.rows[position.row()][position.column()].as_mut() {
                card.set_blocked_status(blocked);
            }
        }
    }

    /// まだ残っているカードの枚数。
    pub fn remaining(&self) -> usize {
        self.rows.iter().flatten().filter(|slot| slot.is_some()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.rows.iter().flatten().all(|slot| slot.is_none())
    }

    pub fn rows(&self) -> &[Vec<Option<Card>>] {
        &self.rows
    }

    /// 残っているカードを頂上から順に。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flatten().filter_map(|slot| slot.as_ref())
    }
}

impl Default for Pyramid {
    fn default() -> Self {
        Self::new()
    }
}
