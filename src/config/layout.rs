// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの大きさ、ピラミッドの位置、山札・捨て札の位置など。

pub const CARD_WIDTH: f64 = 72.0; // カードの幅
pub const CARD_HEIGHT: f64 = 100.0; // カードの高さ
pub const CARD_SPACING_X: f64 = 12.0; // 同じ段のカード同士の横の間隔

// ピラミッドは段ごとに半枚分ずつずらして、下の段に半分重ねる
pub const PYRAMID_TOP_Y: f64 = 30.0; // 頂上のカードの Y 座標
pub const PYRAMID_ROW_OFFSET_Y: f64 = 50.0; // 段ごとの Y 方向のずれ
pub const PYRAMID_CENTER_X: f64 = 360.0; // ピラミッドの中心の X 座標

// --- 山札と捨て札 ---
pub const STOCK_POS_X: f64 = 40.0; // 山札の X 座標
pub const STOCK_POS_Y: f64 = 440.0; // 山札の Y 座標
pub const WASTE_POS_X: f64 = STOCK_POS_X + CARD_WIDTH + 2.0 * CARD_SPACING_X; // 捨て札 (山札の隣)
pub const WASTE_POS_Y: f64 = STOCK_POS_Y;

// --- 色とフォント ---
pub const TABLE_COLOR: &str = "#1e6b3a";
pub const CARD_FACE_COLOR: &str = "#fdfdf8";
pub const CARD_BACK_COLOR: &str = "#2a4d8f";
pub const CARD_BORDER_COLOR: &str = "#222222";
pub const EMPTY_SLOT_COLOR: &str = "rgba(255, 255, 255, 0.35)";
pub const SELECTED_COLOR: &str = "#ffd400";
pub const RED_SUIT_COLOR: &str = "#c62828";
pub const BLACK_SUIT_COLOR: &str = "#111111";
pub const LABEL_FONT: &str = "bold 18px sans-serif";
pub const SYMBOL_FONT: &str = "32px serif";
pub const BANNER_FONT: &str = "bold 36px sans-serif";
