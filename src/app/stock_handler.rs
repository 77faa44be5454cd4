// src/app/stock_handler.rs
//! Handles clicks on the draw pile: dealing one card to the waste pile, or
//! turning the waste pile back over once the draw pile is empty.

use log::info;

use crate::app::session::GameSession;
use crate::components::card::Card;
use crate::error::MoveError;
use crate::logic::rules::stock_waste;

/// What a click on the draw pile did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOutcome {
    /// One card moved from the draw pile to the top of the waste pile.
    Dealt(Card),
    /// The whole waste pile went back onto the draw pile.
    Recycled(usize),
}

/// Deals a card when the draw pile has one, otherwise recycles the waste pile.
/// Any pending selection is dropped, since the waste top it may point at moves.
pub fn handle_stock_click(session: &mut GameSession) -> Result<StockOutcome, MoveError> {
    if session.is_won() {
        return Err(MoveError::GameOver);
    }

    let stock_is_empty = session.field().draw_pile().is_empty();
    let waste_is_empty = session.field().waste_pile().is_empty();

    let outcome = if stock_waste::can_deal_from_stock(stock_is_empty) {
        let card = deal_one_card_from_stock(session)?;
        StockOutcome::Dealt(card)
    } else if stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        StockOutcome::Recycled(reset_waste_to_stock(session)?)
    } else {
        info!("Both draw pile and waste pile are empty");
        return Err(MoveError::NothingToRecycle);
    };

    session.selection_mut().clear();
    Ok(outcome)
}

/// 山札から1枚めくるだけ。
pub fn deal_one_card_from_stock(session: &mut GameSession) -> Result<Card, MoveError> {
    let card = session
        .field_mut()
        .get_additional_card()
        .ok_or(MoveError::NothingToDeal)?;
    info!("Dealt {} to the waste pile", card);
    Ok(card)
}

/// 捨て札を山札に戻す。山札が空じゃなければ何もしない。
pub fn reset_waste_to_stock(session: &mut GameSession) -> Result<usize, MoveError> {
    match session.field_mut().decks_reset() {
        0 => Err(MoveError::NothingToRecycle),
        moved => {
            info!("Recycled {} cards from the waste pile", moved);
            Ok(moved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::selection_handler::select_waste_card;
    use crate::config::GameConfig;

    fn seeded(seed: u64) -> GameSession {
        GameSession::new(GameConfig { seed: Some(seed), ..GameConfig::default() }).unwrap()
    }

    #[test_log::test]
    fn clicking_the_stock_deals_one_card() {
        let mut session = seeded(11);
        let top = *session.field().draw_pile().top().unwrap();

        let outcome = handle_stock_click(&mut session).unwrap();

        assert_eq!(outcome, StockOutcome::Dealt(top));
        assert_eq!(session.field().draw_pile().len(), 23);
        assert_eq!(session.field().waste_pile().top(), Some(&top));
    }

    #[test_log::test]
    fn empty_stock_recycles_the_waste_in_original_order() {
        let mut session = seeded(12);
        let original: Vec<Card> = session.field().draw_pile().iter().copied().collect();
        for _ in 0..24 {
            handle_stock_click(&mut session).unwrap();
        }
        assert!(session.field().draw_pile().is_empty());

        let outcome = handle_stock_click(&mut session).unwrap();

        assert_eq!(outcome, StockOutcome::Recycled(24));
        assert!(session.field().waste_pile().is_empty());
        let recycled: Vec<Card> = session.field().draw_pile().iter().copied().collect();
        assert_eq!(recycled, original, "並び順はシャッフルされずに元どおり");
    }

    #[test_log::test]
    fn both_piles_empty_is_an_error() {
        let mut session = seeded(13);
        while session.field_mut().get_additional_card().is_some() {}
        while session.field_mut().use_top_card().is_ok() {}

        assert_eq!(handle_stock_click(&mut session), Err(MoveError::NothingToRecycle));
    }

    #[test_log::test]
    fn stock_click_drops_the_selection() {
        let mut session = seeded(14);
        // キングがめくれると選択と同時に消えることがあるので、キング以外が出るまでめくる
        loop {
            handle_stock_click(&mut session).unwrap();
            let top = session.field().waste_pile().top().unwrap();
            if !top.rank().is_king() {
                break;
            }
        }
        select_waste_card(&mut session).unwrap();
        assert_eq!(session.selection().len(), 1);

        handle_stock_click(&mut session).unwrap();

        assert!(session.selection().is_empty());
    }
}
