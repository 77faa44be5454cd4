//! Gets the current game state from the session and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::app::session::{lock_session, GameSession};
use crate::snapshot::GameSnapshot;

/// セッションの状態を JSON 文字列にする。
pub fn session_state_json(session: &GameSession) -> Result<String, serde_json::Error> {
    let snapshot = GameSnapshot::from_session(session);
    debug!(
        "Snapshot: {} cards left in the pyramid, {} in stock, {} in waste",
        session.field().remaining_pyramid_cards(),
        snapshot.stock_count,
        snapshot.waste_count
    );
    snapshot.to_json()
}

/// 共有セッションをロックして JSON を返す。JS 側に渡すのでエラーは JsValue にする。
pub fn get_state_json(session_arc: &Arc<Mutex<GameSession>>) -> Result<JsValue, JsValue> {
    let session = lock_session(session_arc);
    match session_state_json(&session) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
