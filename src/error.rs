// src/error.rs
//! ゲーム全体で使うエラー型をまとめておくよ！
//! thiserror で Display も Error も自動で生やしてもらう。

use thiserror::Error;

use crate::components::card::Card;
use crate::components::position::PyramidPosition;

/// カードを作るときの検証エラー。
/// ランクやスートが範囲外だったら、そもそもカードを作らせない！
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid rank {0}: expected a value in 1..=13")]
    InvalidRank(u8),
    #[error("unknown suit `{0}`: expected clubs, diamonds, hearts or spades")]
    InvalidSuit(String),
    #[error("invalid pyramid position ({row}, {column})")]
    InvalidPosition { row: usize, column: usize },
}

/// デッキ操作のエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot pop from an empty deck")]
    Empty,
    #[error("the pyramid already holds {0} cards")]
    AlreadyDealt(usize),
    #[error("need {needed} cards to deal the pyramid, only {available} left")]
    NotEnoughCards { needed: usize, available: usize },
}

/// プレイヤーの操作がルール的にダメだったときのエラー。
/// どれもゲーム状態は変えずに返すよ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Mismatched cards: {first} and {second} do not sum to 13")]
    Mismatched { first: Card, second: Card },
    #[error("{first} needs a partner: only kings are removed alone")]
    MissingPartner { first: Card },
    #[error("the card at {0} is blocked")]
    Blocked(PyramidPosition),
    #[error("the slot at {0} is empty")]
    EmptySlot(PyramidPosition),
    #[error("{0} is not in play")]
    NotInPlay(Card),
    #[error("the waste pile is empty")]
    EmptyWaste,
    #[error("the draw pile is empty")]
    NothingToDeal,
    #[error("there is nothing to recycle into the draw pile")]
    NothingToRecycle,
    #[error("the game is already won")]
    GameOver,
}
