// src/systems/blocked_status_system.rs

use crate::components::game_state::GameState;
use crate::logic::playing_field::PlayingField;
use crate::system::System;

/// カードが取り除かれたあとに、残りのカード全部の blocked を付け直すシステム。
#[derive(Debug, Default)]
pub struct BlockedStatusSystem;

impl BlockedStatusSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for BlockedStatusSystem {
    fn run(&mut self, field: &mut PlayingField, _state: &mut GameState) {
        field.check_for_blocked_cards();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::position::PyramidPosition;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn run_marks_upper_rows_blocked_after_a_deal() {
        let mut field = PlayingField::new();
        field.fill_pyramid_with(&mut StdRng::seed_from_u64(11)).unwrap();
        // 配った直後はまだ誰も blocked になっていない
        assert!(field.pyramid().cards().all(|card| !card.is_blocked()));

        BlockedStatusSystem::new().run(&mut field, &mut GameState::new());

        let blocked = field.pyramid().cards().filter(|card| card.is_blocked()).count();
        assert_eq!(blocked, 21, "一番下の 7枚以外は全部 blocked");
        let top = PyramidPosition::new(0, 0).unwrap();
        assert!(field.pyramid_card(top).unwrap().is_blocked());
    }
}
