// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod logic;
pub mod snapshot;
pub mod system;
pub mod systems;

pub use app::game_app::GameApp;
pub use app::session::GameSession;
pub use config::GameConfig;
pub use error::{CardError, DeckError, MoveError};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match logger::init_logger(log::LevelFilter::Info) {
        Ok(()) => log::info!("Panic hook and console logger set!"),
        // ページを再読み込みせずに二回呼ばれたときは、前のロガーをそのまま使う
        Err(e) => log::debug!("Console logger already installed: {}", e),
    }
}
