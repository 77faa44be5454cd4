// src/app/game_app.rs

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use js_sys::Error;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::browser_event_manager::{self, ClickClosure};
use crate::app::init_handler;
use crate::app::renderer::{self, CardAssets};
use crate::app::session::{lock_session, GameSession};
use crate::app::state_getter;

/// JS から見えるゲーム本体だよ！
/// セッションはクリックのクロージャとも共有するので Arc<Mutex<>> で持つ。
#[wasm_bindgen]
pub struct GameApp {
    session: Arc<Mutex<GameSession>>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    assets: Arc<CardAssets>,
    // リスナーが生きている間はクロージャを落とさないように持っておく
    click_closure: ClickClosure,
}

fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from(Error::new(&err.to_string()))
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定でゲームを始める。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        Self::with_config(canvas_id, "")
    }

    /// 設定 JSON 付きでゲームを始める。配って、クリックを受け付けて、最初の描画までやるよ。
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        info!("GameApp: initializing on canvas '{}'", canvas_id);
        let session = init_handler::initialize_session(config_json).map_err(to_js_error)?;
        let (canvas, context) = init_handler::initialize_canvas(canvas_id)?;
        let assets = Arc::new(CardAssets::load()?);
        let click_closure: ClickClosure = Arc::new(Mutex::new(None));

        browser_event_manager::attach_click_listener(
            Arc::clone(&session),
            canvas.clone(),
            context.clone(),
            Arc::clone(&assets),
            &click_closure,
        )?;

        let app = Self { session, canvas, context, assets, click_closure };
        app.render()?;
        info!("GameApp: ready");
        Ok(app)
    }

    /// 今の盤面を捨てて配り直す。
    pub fn new_game(&self) -> Result<(), JsValue> {
        lock_session(&self.session).new_game().map_err(to_js_error)?;
        self.render()
    }

    /// Canvas 座標 (x, y) でのクリックを処理する。何かに当たったら true。
    /// ルール違反はログに出すだけで、JS 側にはエラーにしない。
    pub fn handle_click(&self, x: f64, y: f64) -> Result<bool, JsValue> {
        browser_event_manager::click_and_render(
            &self.session,
            &self.canvas,
            &self.context,
            &self.assets,
            x,
            y,
        )
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let session = lock_session(&self.session);
        renderer::render_game(&session, &self.canvas, &self.context, &self.assets)
            .map_err(|e| to_js_error(format!("Render error: {:?}", e)))
    }

    /// 盤面のスナップショットを JSON 文字列で返す。
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.session)
    }

    pub fn is_won(&self) -> bool {
        lock_session(&self.session).is_won()
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_click_listener(&self.canvas, &self.click_closure) {
            error!("GameApp: failed to detach click listener: {:?}", e);
        }
    }
}
