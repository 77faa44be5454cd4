// src/app/event_handler.rs
//! クリックされた場所を調べて、選択や山札の処理に振り分けるよ！

use log::{debug, info};

use crate::app::layout_calculator::{pyramid_card_rect, stock_rect, waste_rect};
use crate::app::selection_handler::{self, TurnOutcome};
use crate::app::session::GameSession;
use crate::app::stock_handler::{self, StockOutcome};
use crate::components::position::PyramidPosition;
use crate::error::MoveError;
use crate::logic::playing_field::PlayingField;

/// クリックされたもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PyramidCard(PyramidPosition),
    Stock,
    Waste,
}

/// クリックを処理した結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Turn(TurnOutcome),
    Stock(StockOutcome),
}

/// 座標 (x, y) にあるものを探す。
///
/// ピラミッドのカードは下の段ほど手前に描かれるので、下の段から順に調べて
/// 最初に当たったカードを返す。空いたマスは当たり判定なし。
/// 山札は空でもクリックできる（捨て札を戻すため）。捨て札は空なら判定しない。
pub fn find_clicked_element(field: &PlayingField, x: f64, y: f64) -> Option<ClickTarget> {
    let mut positions: Vec<PyramidPosition> = PyramidPosition::all().collect();
    positions.reverse();
    let hit = positions
        .into_iter()
        .filter(|position| field.pyramid().is_occupied(*position))
        .find(|position| pyramid_card_rect(*position).contains(x, y));
    if let Some(position) = hit {
        return Some(ClickTarget::PyramidCard(position));
    }

    if stock_rect().contains(x, y) {
        return Some(ClickTarget::Stock);
    }
    if !field.waste_pile().is_empty() && waste_rect().contains(x, y) {
        return Some(ClickTarget::Waste);
    }
    None
}

/// クリック対象ごとの処理を呼び出す。
pub fn apply_click(session: &mut GameSession, target: ClickTarget) -> Result<ClickOutcome, MoveError> {
    debug!("Click on {:?}", target);
    match target {
        ClickTarget::PyramidCard(position) => {
            selection_handler::select_pyramid_card(session, position).map(ClickOutcome::Turn)
        }
        ClickTarget::Waste => selection_handler::select_waste_card(session).map(ClickOutcome::Turn),
        ClickTarget::Stock => stock_handler::handle_stock_click(session).map(ClickOutcome::Stock),
    }
}

/// 座標からクリックを処理する。何もない場所なら None。
pub fn handle_click_at(
    session: &mut GameSession,
    x: f64,
    y: f64,
) -> Option<Result<ClickOutcome, MoveError>> {
    match find_clicked_element(session.field(), x, y) {
        Some(target) => Some(apply_click(session, target)),
        None => {
            info!("Clicked on empty space at ({}, {})", x, y);
            None
        }
    }
}
