// src/systems/deal_system.rs

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::DeckError;
use crate::logic::playing_field::PlayingField;

/// ゲーム開始時にピラミッドへカードを配るシステム！🎉
///
/// シードを持たせると毎回同じ配りになるよ（テストやリプレイ用）。
#[derive(Debug, Default, Clone, Copy)]
pub struct DealPyramidSystem {
    seed: Option<u64>,
}

impl DealPyramidSystem {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// シャッフルして 28枚配り、blocked を付ける。
    pub fn execute(&self, field: &mut PlayingField) -> Result<(), DeckError> {
        match self.seed {
            Some(seed) => {
                info!("Dealing a new pyramid with seed {}", seed);
                field.fill_pyramid_with(&mut StdRng::seed_from_u64(seed))?;
            }
            None => {
                info!("Dealing a new pyramid");
                field.fill_pyramid()?;
            }
        }
        field.check_for_blocked_cards();
        Ok(())
    }
}
