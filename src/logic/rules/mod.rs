//! ピラミッドのルール関連モジュールをまとめるよ！
//! どれも状態を持たない純粋な判定関数だけ。状態の変更は PlayingField の仕事。

pub mod blocking;
pub mod matching;
pub mod stock_waste;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use blocking::*;
pub use matching::*;
pub use stock_waste::*;
pub use win_condition::*;
