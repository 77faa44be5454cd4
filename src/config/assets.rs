// src/config/assets.rs
//! 画像アセットの置き場所とファイル名の決まりごと。
//! スートごとのエンブレムは `emblems/<スート名>.png` だよ。

use crate::components::card::Suit;

pub const ASSET_DIR: &str = "emblems";
pub const CARD_BACK_FILE: &str = "cardback.png";
pub const EMPTY_SLOT_FILE: &str = "circle.png";

pub fn suit_emblem_path(suit: Suit) -> String {
    format!("{}/{}.png", ASSET_DIR, suit.name())
}

pub fn card_back_path() -> String {
    format!("{}/{}", ASSET_DIR, CARD_BACK_FILE)
}

pub fn empty_slot_path() -> String {
    format!("{}/{}", ASSET_DIR, EMPTY_SLOT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_follow_the_naming_convention() {
        assert_eq!(suit_emblem_path(Suit::Club), "emblems/clubs.png");
        assert_eq!(suit_emblem_path(Suit::Diamond), "emblems/diamonds.png");
        assert_eq!(suit_emblem_path(Suit::Heart), "emblems/hearts.png");
        assert_eq!(suit_emblem_path(Suit::Spade), "emblems/spades.png");
        assert_eq!(card_back_path(), "emblems/cardback.png");
        assert_eq!(empty_slot_path(), "emblems/circle.png");
    }
}
