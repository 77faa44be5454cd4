// src/logic/deck.rs

use std::fmt;

use itertools::Itertools;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::error::DeckError;

/// 52枚のトランプの山だよ！🃏
///
/// 山札 (draw pile) にも捨て札 (waste pile) にも同じ型を使う。
/// 「一番上」は Vec の末尾。pop も append も末尾で行うよ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 空のデッキ。
    pub fn new() -> Self {
        Self::default()
    }

    /// 52枚そろったデッキをいきなり作るヘルパー。
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// スート × ランクの全組み合わせ (4 × 13 = 52枚) を追加する。
    pub fn build(&mut self) {
        self.cards.reserve(ALL_SUITS.len() * ALL_RANKS.len());
        for (&suit, &rank) in ALL_SUITS.iter().cartesian_product(ALL_RANKS.iter()) {
            self.cards.push(Card::new(rank, suit));
        }
    }

    /// thread_rng でシャッフル！
    pub fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.shuffle_with(&mut rng);
    }

    /// Fisher–Yates シャッフル。
    /// 最後の要素から 1 番目まで下りながら、0..=i から選んだ要素と入れ替える。
    /// 乱数生成器を渡せるので、シード固定で同じ配りを再現できるよ。
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let r = rng.gen_range(0..=i);
            self.cards.swap(i, r);
        }
    }

    /// 一番上のカードを取り出す。空っぽならエラー！
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上のカードを覗き見するだけ（取り出さない）。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// 下から上の順に見ていくイテレータ。
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards.iter().join(", "))
    }
}
