// src/app/browser_event_manager.rs
//! Handles attaching and detaching the canvas click listener.

use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};

use crate::app::event_handler::{self, ClickOutcome};
use crate::app::renderer::{self, CardAssets};
use crate::app::selection_handler::TurnOutcome;
use crate::app::session::{lock_session, GameSession};

pub(crate) type ClickClosure = Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>;

/// Converts viewport coordinates into canvas pixel coordinates, taking CSS
/// scaling of the canvas into account.
pub fn to_canvas_coordinates(
    client: (f64, f64),
    bounds: (f64, f64, f64, f64),
    canvas_size: (f64, f64),
) -> (f64, f64) {
    let (client_x, client_y) = client;
    let (left, top, width, height) = bounds;
    let (canvas_width, canvas_height) = canvas_size;
    let scale_x = if width > 0.0 { canvas_width / width } else { 1.0 };
    let scale_y = if height > 0.0 { canvas_height / height } else { 1.0 };
    ((client_x - left) * scale_x, (client_y - top) * scale_y)
}

/// Runs a click at canvas coordinates and redraws. Rule violations are only logged.
pub(crate) fn click_and_render(
    session_arc: &Arc<Mutex<GameSession>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    assets: &CardAssets,
    x: f64,
    y: f64,
) -> Result<bool, JsValue> {
    let mut session = lock_session(session_arc);
    let changed = match event_handler::handle_click_at(&mut session, x, y) {
        Some(Ok(outcome)) => {
            if let ClickOutcome::Turn(TurnOutcome::Removed { won: true, .. }) = outcome {
                info!("Pyramid cleared!");
            }
            true
        }
        Some(Err(e)) => {
            warn!("Click rejected: {}", e);
            // 不成立のペアでも選択は外れるので描き直す
            true
        }
        None => false,
    };
    renderer::render_game(&session, canvas, context, assets)?;
    Ok(changed)
}

/// Attaches a click listener to the canvas. The closure is stored so it can be
/// detached later and is not dropped while the listener is live.
pub(crate) fn attach_click_listener(
    session_arc: Arc<Mutex<GameSession>>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    assets: Arc<CardAssets>,
    click_closure_arc: &ClickClosure,
) -> Result<(), JsValue> {
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
            error!("Failed to cast event to MouseEvent in click listener");
            return;
        };
        let bounds = canvas.get_bounding_client_rect();
        let (x, y) = to_canvas_coordinates(
            (mouse_event.client_x() as f64, mouse_event.client_y() as f64),
            (bounds.left(), bounds.top(), bounds.width(), bounds.height()),
            (canvas.width() as f64, canvas.height() as f64),
        );
        if let Err(e) = click_and_render(&session_arc, &canvas, &context, &assets, x, y) {
            error!("Render after click failed: {:?}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    let mut slot = click_closure_arc.lock().map_err(|_| JsValue::from_str("click closure lock poisoned"))?;
    *slot = Some(closure);
    info!("Attached click listener");
    Ok(())
}

/// Detaches the canvas click listener, if one is attached.
pub(crate) fn detach_click_listener(
    canvas: &HtmlCanvasElement,
    click_closure_arc: &ClickClosure,
) -> Result<(), JsValue> {
    let closure = click_closure_arc
        .lock()
        .map_err(|_| JsValue::from_str("click closure lock poisoned"))?
        .take();
    match closure {
        Some(closure) => {
            canvas.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            info!("Detached click listener");
        }
        None => info!("Click listener was already detached or never attached"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscaled_canvas_only_subtracts_the_offset() {
        let point = to_canvas_coordinates((110.0, 70.0), (10.0, 20.0, 720.0, 560.0), (720.0, 560.0));
        assert_eq!(point, (100.0, 50.0));
    }

    #[test]
    fn css_scaling_is_undone() {
        // 半分の大きさで表示されている canvas
        let point = to_canvas_coordinates((60.0, 40.0), (0.0, 0.0, 360.0, 280.0), (720.0, 560.0));
        assert_eq!(point, (120.0, 80.0));
    }

    #[test]
    fn zero_sized_bounds_do_not_divide_by_zero() {
        let point = to_canvas_coordinates((5.0, 5.0), (0.0, 0.0, 0.0, 0.0), (720.0, 560.0));
        assert_eq!(point, (5.0, 5.0));
    }
}
