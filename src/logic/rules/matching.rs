//! 2枚のカード（またはキング1枚）が取り除けるかを判定するよ。

use crate::components::card::Card;

/// ペアのランクの合計がこの値なら取り除ける。
pub const MATCH_TOTAL: u8 = 13;

/// 判定結果。どのカードを取り除くかを表すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// キングは単独で取り除ける
    LoneKing,
    /// 合計 13 のペア
    Pair,
}

/// キングなら単独で取り除ける。
pub fn is_lone_king(card: &Card) -> bool {
    card.rank().is_king()
}

/// 2枚のランクの合計が 13 ならペア成立。
pub fn is_matching_pair(first: &Card, second: &Card) -> bool {
    first.value() + second.value() == MATCH_TOTAL
}

/// 1枚目がキングならキング単独、そうでなければ 2枚目との合計で判定する。
/// 成立しなければ None。
pub fn evaluate_match(first: &Card, second: Option<&Card>) -> Option<MatchKind> {
    if is_lone_king(first) {
        return Some(MatchKind::LoneKing);
    }
    match second {
        Some(second) if is_matching_pair(first, second) => Some(MatchKind::Pair),
        _ => None,
    }
}
