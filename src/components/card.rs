// src/components/card.rs

// serde を使う宣言！カード情報を JS 側に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::components::position::PyramidPosition;
use crate::error::CardError;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 閉じた enum にしておけば、知らないスートのカードはそもそも作れない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "clubs")]
    Club,
    #[serde(rename = "diamonds")]
    Diamond,
    #[serde(rename = "hearts")]
    Heart,
    #[serde(rename = "spades")]
    Spade,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// ピラミッドでは足して 13 になるかが全てなので、`value()` で数値も取れるようにしてる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// デッキ生成で使う順番。clubs → diamonds → hearts → spades。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// アセットのファイル名にも使う小文字の名前。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Club => "clubs",
            Suit::Diamond => "diamonds",
            Suit::Heart => "hearts",
            Suit::Spade => "spades",
        }
    }

    /// 画像がまだ読めてないときに描くための記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamond | Suit::Heart)
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SUITS
            .iter()
            .copied()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rank {
    /// ランクの数値 (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_king(self) -> bool {
        self == Rank::King
    }

    /// 描画用の短いラベル。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // 1..=13 以外は全部エラー！ インデックスは value - 1 でOK。
        match value {
            1..=13 => Ok(ALL_RANKS[usize::from(value - 1)]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

/// カードそのものだよ！🃏
///
/// - `rank`, `suit`: 作った後は絶対に変わらない（フィールドは非公開にしてある）
/// - `position`: ピラミッドに配られたときに一度だけ設定される
/// - `blocked`: 下のカードに押さえられてるかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    position: Option<PyramidPosition>,
    blocked: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            position: None,
            blocked: false,
        }
    }

    /// 生の値からカードを作る。範囲外なら `CardError` を返すよ。
    pub fn from_parts(rank: u8, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, suit.parse()?))
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// ランクの数値。足し算の判定はこれを使う。
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn position(&self) -> Option<PyramidPosition> {
        self.position
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// ランクとスートが同じなら同じカード。52枚で重複はないから、これで一意に決まる。
    pub fn same_card(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    pub(crate) fn set_position(&mut self, position: PyramidPosition) {
        self.position = Some(position);
    }

    pub(crate) fn set_blocked_status(&mut self, blocked: bool) {
        self.blocked = blocked;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.suit)
    }
}
