// src/app/layout_calculator.rs
//! カードを描く位置と、クリック判定に使う矩形を計算するよ。

use crate::components::position::PyramidPosition;
use crate::config::layout::{
    CARD_HEIGHT, CARD_SPACING_X, CARD_WIDTH, PYRAMID_CENTER_X, PYRAMID_ROW_OFFSET_Y,
    PYRAMID_TOP_Y, STOCK_POS_X, STOCK_POS_Y, WASTE_POS_X, WASTE_POS_Y,
};

/// Canvas 上の矩形（カード1枚分）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn card_at(x: f64, y: f64) -> Self {
        Self { x, y, width: CARD_WIDTH, height: CARD_HEIGHT }
    }

    /// 右端と下端は含まない。
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// ピラミッドのマスの位置。
/// 段ごとに中央揃えにして、1段下がるごとにカード半分だけ重ねる。
pub fn pyramid_card_rect(position: PyramidPosition) -> CardRect {
    let row = position.row() as f64;
    let column = position.column() as f64;
    let row_width = (row + 1.0) * CARD_WIDTH + row * CARD_SPACING_X;
    let x = PYRAMID_CENTER_X - row_width / 2.0 + column * (CARD_WIDTH + CARD_SPACING_X);
    let y = PYRAMID_TOP_Y + row * PYRAMID_ROW_OFFSET_Y;
    CardRect::card_at(x, y)
}

pub fn stock_rect() -> CardRect {
    CardRect::card_at(STOCK_POS_X, STOCK_POS_Y)
}

pub fn waste_rect() -> CardRect {
    CardRect::card_at(WASTE_POS_X, WASTE_POS_Y)
}
