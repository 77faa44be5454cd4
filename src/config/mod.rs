// src/config/mod.rs
//! 設定まわり！レイアウト定数、アセットの場所、ゲームの設定。

pub mod assets;
pub mod game_config;
pub mod layout;

pub use game_config::GameConfig;
