// src/components/position.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardError;

/// ピラミッドの段数。0 段目が頂上、6 段目が一番下！
pub const PYRAMID_ROWS: usize = 7;

/// ピラミッド全体のマス数 (1 + 2 + ... + 7)。
pub const PYRAMID_SLOTS: usize = PYRAMID_ROWS * (PYRAMID_ROWS + 1) / 2;

/// ピラミッドの中での位置 (row, column) を表すよ！📍
///
/// row 段目には row + 1 個のマスがあるから、`column <= row` が必ず成り立つ。
/// `new` でしか作れないようにして、変な位置は最初から弾いちゃう。
/// JSON から読むときも `new` を通すので、範囲外の位置は読み込みエラーになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct PyramidPosition {
    row: usize,
    column: usize,
}

/// 検証前の (row, column)。デシリアライズ専用。
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    column: usize,
}

impl TryFrom<RawPosition> for PyramidPosition {
    type Error = CardError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        PyramidPosition::new(raw.row, raw.column)
    }
}

impl PyramidPosition {
    pub fn new(row: usize, column: usize) -> Result<Self, CardError> {
        if row < PYRAMID_ROWS && column <= row {
            Ok(Self { row, column })
        } else {
            Err(CardError::InvalidPosition { row, column })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// 一番下の段なら true。
    pub fn is_bottom_row(&self) -> bool {
        self.row == PYRAMID_ROWS - 1
    }

    /// このカードの上に重なっている（＝押さえている）2枚の位置。
    /// 一番下の段には何も重なってないので None。
    pub fn children(&self) -> Option<[PyramidPosition; 2]> {
        if self.is_bottom_row() {
            return None;
        }
        let row = self.row + 1;
        Some([
            PyramidPosition { row, column: self.column },
            PyramidPosition { row, column: self.column + 1 },
        ])
    }

    /// 頂上から順に全マスを列挙するイテレータ。
    pub fn all() -> impl Iterator<Item = PyramidPosition> {
        (0..PYRAMID_ROWS).flat_map(|row| (0..=row).map(move |column| PyramidPosition { row, column }))
    }
}

impl fmt::Display for PyramidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_valid_positions() {
        let top = PyramidPosition::new(0, 0).unwrap();
        assert_eq!(top.row(), 0);
        assert_eq!(top.column(), 0);

        let corner = PyramidPosition::new(6, 6).unwrap();
        assert!(corner.is_bottom_row());
        assert_eq!(corner.to_string(), "(6, 6)");
    }

    #[test]
    fn reject_positions_outside_the_triangle() {
        assert_eq!(
            PyramidPosition::new(2, 3),
            Err(CardError::InvalidPosition { row: 2, column: 3 })
        );
        assert!(PyramidPosition::new(7, 0).is_err());
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let pos: PyramidPosition = serde_json::from_str(r#"{"row":4,"column":2}"#).unwrap();
        assert_eq!(pos, PyramidPosition::new(4, 2).unwrap());
        assert_eq!(serde_json::to_string(&pos).unwrap(), r#"{"row":4,"column":2}"#);

        assert!(serde_json::from_str::<PyramidPosition>(r#"{"row":9,"column":12}"#).is_err());
        assert!(serde_json::from_str::<PyramidPosition>(r#"{"row":2,"column":3}"#).is_err());
    }

    #[test]
    fn children_are_the_two_cards_below() {
        let pos = PyramidPosition::new(3, 2).unwrap();
        let [left, right] = pos.children().unwrap();
        assert_eq!(left, PyramidPosition::new(4, 2).unwrap());
        assert_eq!(right, PyramidPosition::new(4, 3).unwrap());

        assert_eq!(PyramidPosition::new(6, 0).unwrap().children(), None);
    }

    #[test]
    fn all_positions_cover_twenty_eight_slots() {
        let all: Vec<_> = PyramidPosition::all().collect();
        assert_eq!(all.len(), PYRAMID_SLOTS);
        assert_eq!(PYRAMID_SLOTS, 28);
        assert_eq!(all.first(), Some(&PyramidPosition::new(0, 0).unwrap()));
        assert_eq!(all.last(), Some(&PyramidPosition::new(6, 6).unwrap()));
    }
}
