//! ゲームの勝利条件判定ロジックを定義するよ。

/// ピラミッドにカードが 1枚も残っていなければクリア！
pub fn check_win_condition(remaining_pyramid_cards: usize) -> bool {
    remaining_pyramid_cards == 0
}
