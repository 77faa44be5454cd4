// src/logic/mod.rs
//! ゲームのロジック（デッキ、ピラミッド、盤面、ルール）をまとめるモジュールだよ！

pub mod deck;
pub mod playing_field;
pub mod pyramid;
pub mod rules;

pub use deck::Deck;
pub use playing_field::PlayingField;
pub use pyramid::Pyramid;
