// src/app/selection_handler.rs
//! Turn state machine: picking cards from the pyramid or the waste pile and
//! resolving a match once two cards (or a king) are selected.

use log::{info, warn};

use crate::app::session::GameSession;
use crate::components::card::Card;
use crate::components::position::PyramidPosition;
use crate::components::selection::{CardSource, SelectedCard};
use crate::error::MoveError;
use crate::logic::rules::MatchKind;

/// What a successful selection did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The card is now the first card of a pair.
    Selected(SelectedCard),
    /// The already selected card was clicked again and dropped.
    Deselected,
    /// A match went through and these cards left the board.
    Removed {
        kind: MatchKind,
        cards: Vec<Card>,
        won: bool,
    },
}

/// Selects the pyramid card at `position`. Blocked cards and empty slots are
/// rejected without touching the current selection.
pub fn select_pyramid_card(
    session: &mut GameSession,
    position: PyramidPosition,
) -> Result<TurnOutcome, MoveError> {
    ensure_playing(session)?;
    let card = *session
        .field()
        .pyramid_card(position)
        .ok_or(MoveError::EmptySlot(position))?;
    if session.field().blocked_card(position) {
        info!("Card {} at {} is blocked", card, position);
        return Err(MoveError::Blocked(position));
    }
    select(session, SelectedCard::new(card, CardSource::Pyramid(position)))
}

/// Selects the top card of the waste pile. The card stays on the pile until a
/// match consumes it.
pub fn select_waste_card(session: &mut GameSession) -> Result<TurnOutcome, MoveError> {
    ensure_playing(session)?;
    let card = *session.field().waste_pile().top().ok_or(MoveError::EmptyWaste)?;
    select(session, SelectedCard::new(card, CardSource::Waste))
}

fn ensure_playing(session: &GameSession) -> Result<(), MoveError> {
    if session.is_won() {
        Err(MoveError::GameOver)
    } else {
        Ok(())
    }
}

fn select(session: &mut GameSession, picked: SelectedCard) -> Result<TurnOutcome, MoveError> {
    match session.selection().first().copied() {
        None => {
            if picked.card.rank().is_king() && session.config().kings_on_first_click {
                return resolve(session, picked, None);
            }
            session.selection_mut().push(picked);
            info!("Selected {}", picked.card);
            Ok(TurnOutcome::Selected(picked))
        }
        Some(first) if first.same_source(&picked) => {
            if first.card.rank().is_king() {
                resolve(session, first, None)
            } else {
                session.selection_mut().clear();
                info!("Deselected {}", first.card);
                Ok(TurnOutcome::Deselected)
            }
        }
        Some(first) => resolve(session, first, Some(picked)),
    }
}

/// Tries to remove the selected cards. The selection is cleared either way.
fn resolve(
    session: &mut GameSession,
    first: SelectedCard,
    second: Option<SelectedCard>,
) -> Result<TurnOutcome, MoveError> {
    let result = session
        .field_mut()
        .card_annihilation(&first.card, second.as_ref().map(|picked| &picked.card));
    session.selection_mut().clear();

    let kind = result.map_err(|err| {
        warn!("Match rejected: {}", err);
        err
    })?;

    session.run_systems();
    let cards = match (kind, second) {
        (MatchKind::Pair, Some(second)) => vec![first.card, second.card],
        _ => vec![first.card],
    };
    let won = session.is_won();
    info!("Removed {:?} ({:?}), won: {}", cards, kind, won);
    Ok(TurnOutcome::Removed { kind, cards, won })
}
