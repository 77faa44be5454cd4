//! ピラミッドのカードが押さえられている (blocked) かを判定するよ。

use crate::components::position::PyramidPosition;

/// 一番下の段なら常に自由。それ以外は、すぐ下の 2枚 (row+1 の column と column+1) が
/// 両方とも取り除かれたときだけ自由になる。
///
/// `is_occupied` は「そのマスにまだカードが残っているか」を返す関数。
pub fn is_card_blocked<F>(position: PyramidPosition, is_occupied: F) -> bool
where
    F: Fn(PyramidPosition) -> bool,
{
    match position.children() {
        None => false,
        Some(children) => children.iter().any(|&child| is_occupied(child)),
    }
}
