// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。
//! Canvas の取得と、設定 JSON からセッションを作るところまで。

use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::session::GameSession;
use crate::config::GameConfig;

/// id で指定された canvas 要素と、その 2D コンテキストを取ってくる。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas element '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    info!("Canvas '{}' ready ({}x{})", canvas_id, canvas.width(), canvas.height());
    Ok((canvas, context))
}

/// 設定 JSON を読んで最初のゲームを配る。空文字列ならデフォルト設定。
pub(crate) fn initialize_session(config_json: &str) -> Result<Arc<Mutex<GameSession>>, String> {
    let config = if config_json.trim().is_empty() {
        GameConfig::default()
    } else {
        GameConfig::from_json(config_json).map_err(|e| format!("Invalid game config: {}", e))?
    };
    log::set_max_level(config.level_filter());
    info!("Starting session with {:?}", config);

    let session = GameSession::new(config).map_err(|e| format!("Failed to deal: {}", e))?;
    Ok(Arc::new(Mutex::new(session)))
}
