// src/components/mod.rs

// ゲームのデータ部品たちを宣言するよ！
pub mod card;
pub mod game_state;
pub mod position; // ピラミッドの中の位置📍
pub mod selection; // プレイヤーが選んだカード

// よく使う型はここから直接 use できるようにしておく！
pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::{GameState, GameStatus};
pub use position::{PyramidPosition, PYRAMID_ROWS, PYRAMID_SLOTS};
pub use selection::{CardSource, SelectedCard, Selection};
