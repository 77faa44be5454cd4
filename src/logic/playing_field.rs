// src/logic/playing_field.rs

use log::{debug, info, warn};
use rand::{thread_rng, Rng};

use crate::components::card::Card;
use crate::components::position::{PyramidPosition, PYRAMID_SLOTS};
use crate::error::{DeckError, MoveError};
use crate::logic::deck::Deck;
use crate::logic::pyramid::Pyramid;
use crate::logic::rules::{self, MatchKind};

/// カードがいまどこにあるか（取り除く直前の確認用）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Pyramid(PyramidPosition),
    WasteTop,
}

/// 盤面そのもの！🃏
///
/// - `original_deck`: 山札 (draw pile)
/// - `second_deck`: 捨て札 (waste pile)
/// - `pyramid`: 28マスのピラミッド
/// - `removed`: ペアで取り除かれたカード（二度と戻らない）
///
/// どの瞬間も、この4つを足すと必ず 52枚になるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayingField {
    original_deck: Deck,
    second_deck: Deck,
    pyramid: Pyramid,
    removed: Vec<Card>,
}

impl PlayingField {
    /// 52枚そろった山札と、空の捨て札・空のピラミッドで始める。
    pub fn new() -> Self {
        Self {
            original_deck: Deck::standard(),
            second_deck: Deck::new(),
            pyramid: Pyramid::new(),
            removed: Vec::new(),
        }
    }

    /// 山札をシャッフルしてピラミッドに配る。
    pub fn fill_pyramid(&mut self) -> Result<(), DeckError> {
        let mut rng = thread_rng();
        self.fill_pyramid_with(&mut rng)
    }

    /// 乱数生成器を指定して配る版。
    /// 上の段から順に、row 段目に row + 1 枚ずつ山札の上から置いていくよ。
    /// もう配ってある盤面や、山札が 28枚に足りないときは何も変えずにエラー。
    pub fn fill_pyramid_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if !self.pyramid.is_cleared() {
            warn!("Refusing to deal onto a pyramid that still holds cards");
            return Err(DeckError::AlreadyDealt(self.pyramid.remaining()));
        }
        if self.original_deck.len() < PYRAMID_SLOTS {
            return Err(DeckError::NotEnoughCards {
                needed: PYRAMID_SLOTS,
                available: self.original_deck.len(),
            });
        }

        self.original_deck.shuffle_with(rng);
        for position in PyramidPosition::all() {
            let card = self.original_deck.pop()?;
            self.pyramid.place(position, card);
        }
        info!(
            "Dealt {} cards into the pyramid, {} left in the draw pile",
            PYRAMID_SLOTS,
            self.original_deck.len()
        );
        Ok(())
    }

    /// ピラミッドに残っている全カードの blocked を付け直す。
    pub fn check_for_blocked_cards(&mut self) {
        self.pyramid.refresh_blocked();
    }

    /// そのマスのカードが押さえられているか。空のマスは false。
    pub fn blocked_card(&self, position: PyramidPosition) -> bool {
        self.pyramid.is_occupied(position) && self.pyramid.is_blocked(position)
    }

    /// カードを取り除く！
    ///
    /// 1枚目がキングならキングだけ、そうでなければ 2枚の合計が 13 のときだけ両方取り除く。
    /// 成立しなければ状態は何も変えずにエラーを返すよ。
    /// ピラミッドのカードはマスを空に、位置を持たないカードは捨て札の一番上として取り出す。
    pub fn card_annihilation(
        &mut self,
        first: &Card,
        second: Option<&Card>,
    ) -> Result<MatchKind, MoveError> {
        let kind = match rules::evaluate_match(first, second) {
            Some(kind) => kind,
            None => {
                warn!("Mismatched cards");
                return Err(match second {
                    Some(second) => MoveError::Mismatched { first: *first, second: *second },
                    None => MoveError::MissingPartner { first: *first },
                });
            }
        };

        // 先に全部の場所を確かめてから取り除く。途中で失敗しても盤面は変わらない。
        let targets: Vec<&Card> = match (kind, second) {
            (MatchKind::Pair, Some(second)) => vec![first, second],
            _ => vec![first],
        };
        let locations = targets
            .iter()
            .map(|card| self.locate(card))
            .collect::<Result<Vec<Location>, MoveError>>()?;

        for location in locations {
            let card = match location {
                Location::Pyramid(position) => self.pyramid.take(position),
                Location::WasteTop => self.use_top_card().ok(),
            };
            if let Some(card) = card {
                debug!("Removed {} from play", card);
                self.removed.push(card);
            }
        }
        Ok(kind)
    }

    /// 取り除こうとしているカードが本当に場にあるかを確認する。
    fn locate(&self, card: &Card) -> Result<Location, MoveError> {
        match card.position() {
            Some(position) => match self.pyramid.get(position) {
                Some(present) if present.same_card(card) => {
                    if self.pyramid.is_blocked(position) {
                        Err(MoveError::Blocked(position))
                    } else {
                        Ok(Location::Pyramid(position))
                    }
                }
                _ => Err(MoveError::NotInPlay(*card)),
            },
            None => match self.second_deck.top() {
                Some(top) if top.same_card(card) => Ok(Location::WasteTop),
                _ => Err(MoveError::NotInPlay(*card)),
            },
        }
    }

    /// 捨て札の一番上を取り出す。
    pub fn use_top_card(&mut self) -> Result<Card, DeckError> {
        self.second_deck.pop()
    }

    /// 山札が空のときだけ、捨て札を逆順にして山札に戻す。シャッフルはしないよ。
    /// 戻した枚数を返す（山札が空じゃなければ 0）。
    pub fn decks_reset(&mut self) -> usize {
        if !self.original_deck.is_empty() {
            return 0;
        }
        let mut moved = 0;
        while let Ok(card) = self.second_deck.pop() {
            self.original_deck.append(card);
            moved += 1;
        }
        self.second_deck.clear();
        debug!("Recycled {} cards: {}", moved, self.original_deck);
        moved
    }

    /// 山札から 1枚めくって捨て札へ。めくれたカードを返す。
    pub fn get_additional_card(&mut self) -> Option<Card> {
        let card = self.original_deck.pop().ok()?;
        self.second_deck.append(card);
        debug!("Waste pile: {}", self.second_deck);
        Some(card)
    }

    /// ピラミッドが全部消えたら勝ち！
    pub fn win(&self) -> bool {
        rules::check_win_condition(self.pyramid.remaining())
    }

    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    pub fn pyramid_card(&self, position: PyramidPosition) -> Option<&Card> {
        self.pyramid.get(position)
    }

    pub fn pyramid_rows(&self) -> &[Vec<Option<Card>>] {
        self.pyramid.rows()
    }

    pub fn remaining_pyramid_cards(&self) -> usize {
        self.pyramid.remaining()
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.original_deck
    }

    pub fn waste_pile(&self) -> &Deck {
        &self.second_deck
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    #[cfg(test)]
    pub(crate) fn clear_slot_for_test(&mut self, position: PyramidPosition) -> Option<Card> {
        self.pyramid.take(position)
    }

    /// 盤面にあるカードの総数（取り除いたカードも含む）。常に 52 のはず。
    pub fn total_cards(&self) -> usize {
        self.original_deck.len() + self.second_deck.len() + self.pyramid.remaining() + self.removed.len()
    }
}

impl Default for PlayingField {
    fn default() -> Self {
        Self::new()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pos(row: usize, column: usize) -> PyramidPosition {
        PyramidPosition::new(row, column).unwrap()
    }

    fn dealt_field(seed: u64) -> PlayingField {
        let mut field = PlayingField::new();
        field.fill_pyramid_with(&mut StdRng::seed_from_u64(seed)).unwrap();
        field.check_for_blocked_cards();
        field
    }

    /// 盤面を手で組み立てるためのヘルパー。
    fn field_with_pyramid(cards: &[(usize, usize, Card)]) -> PlayingField {
        let mut field = PlayingField {
            original_deck: Deck::new(),
            second_deck: Deck::new(),
            pyramid: Pyramid::new(),
            removed: Vec::new(),
        };
        for &(row, column, card) in cards {
            field.pyramid.place(pos(row, column), card);
        }
        field.check_for_blocked_cards();
        field
    }

    #[test]
    fn fill_pyramid_deals_twenty_eight_cards() {
        let field = dealt_field(1);
        assert_eq!(field.remaining_pyramid_cards(), 28);
        assert_eq!(field.draw_pile().len(), 24);
        assert!(field.waste_pile().is_empty());
        assert_eq!(field.total_cards(), 52);
    }

    #[test]
    fn dealing_twice_is_rejected_and_keeps_every_card() {
        let mut field = dealt_field(3);
        let before = field.clone();

        let result = field.fill_pyramid_with(&mut StdRng::seed_from_u64(4));

        assert_eq!(result, Err(DeckError::AlreadyDealt(28)));
        assert_eq!(field, before);
        assert_eq!(field.total_cards(), 52);
    }

    #[test]
    fn dealing_from_a_short_draw_pile_is_rejected() {
        let mut field = PlayingField::new();
        for _ in 0..30 {
            field.get_additional_card();
        }

        let result = field.fill_pyramid();

        assert_eq!(result, Err(DeckError::NotEnoughCards { needed: 28, available: 22 }));
        assert!(field.pyramid().is_cleared());
        assert_eq!(field.total_cards(), 52);
    }

    #[test]
    fn fill_pyramid_with_thread_rng_deals_too() {
        let mut field = PlayingField::new();
        field.fill_pyramid().unwrap();
        assert_eq!(field.remaining_pyramid_cards(), 28);
        assert_eq!(field.draw_pile().len(), 24);
    }

    #[test]
    fn dealt_cards_remember_their_positions() {
        let field = dealt_field(2);
        for position in PyramidPosition::all() {
            let card = field.pyramid_card(position).unwrap();
            assert_eq!(card.position(), Some(position));
        }
    }

    #[test]
    fn every_card_appears_exactly_once_after_the_deal() {
        let field = dealt_field(3);
        let mut seen = HashSet::new();
        for card in field.pyramid().cards().chain(field.draw_pile().iter()) {
            assert!(seen.insert((card.rank(), card.suit())), "{card} が 2枚ある！");
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn only_bottom_row_is_unblocked_after_the_deal() {
        let field = dealt_field(4);
        for position in PyramidPosition::all() {
            let card = field.pyramid_card(position).unwrap();
            assert_eq!(card.is_blocked(), !position.is_bottom_row(), "{position}");
            assert_eq!(field.blocked_card(position), !position.is_bottom_row());
        }
    }

    #[test]
    fn seeded_deals_are_reproducible() {
        assert_eq!(dealt_field(99), dealt_field(99));
    }

    #[test]
    fn king_is_removed_alone() {
        let king = Card::new(Rank::King, Suit::Heart);
        let mut field = field_with_pyramid(&[(6, 3, king)]);
        let king = *field.pyramid_card(pos(6, 3)).unwrap();

        assert_eq!(field.card_annihilation(&king, None), Ok(MatchKind::LoneKing));
        assert_eq!(field.pyramid_card(pos(6, 3)), None);
        assert_eq!(field.removed_count(), 1);
    }

    #[test]
    fn pair_summing_to_thirteen_is_removed() {
        let mut field = field_with_pyramid(&[
            (6, 0, Card::new(Rank::Four, Suit::Club)),
            (6, 5, Card::new(Rank::Nine, Suit::Spade)),
        ]);
        let four = *field.pyramid_card(pos(6, 0)).unwrap();
        let nine = *field.pyramid_card(pos(6, 5)).unwrap();

        assert_eq!(field.card_annihilation(&four, Some(&nine)), Ok(MatchKind::Pair));
        assert!(field.win());
        assert_eq!(field.removed_count(), 2);
    }

    #[test]
    fn mismatch_leaves_field_untouched() {
        let mut field = field_with_pyramid(&[
            (6, 0, Card::new(Rank::Four, Suit::Club)),
            (6, 1, Card::new(Rank::Eight, Suit::Spade)),
        ]);
        let before = field.clone();
        let four = *field.pyramid_card(pos(6, 0)).unwrap();
        let eight = *field.pyramid_card(pos(6, 1)).unwrap();

        assert_eq!(
            field.card_annihilation(&four, Some(&eight)),
            Err(MoveError::Mismatched { first: four, second: eight })
        );
        assert_eq!(field, before);
    }

    #[test]
    fn non_king_without_partner_is_rejected() {
        let mut field = field_with_pyramid(&[(6, 0, Card::new(Rank::Six, Suit::Club))]);
        let six = *field.pyramid_card(pos(6, 0)).unwrap();
        assert_eq!(
            field.card_annihilation(&six, None),
            Err(MoveError::MissingPartner { first: six })
        );
        assert_eq!(field.remaining_pyramid_cards(), 1);
    }

    #[test]
    fn blocked_pyramid_card_cannot_be_removed() {
        let mut field = field_with_pyramid(&[
            (5, 0, Card::new(Rank::King, Suit::Club)),
            (6, 0, Card::new(Rank::Two, Suit::Club)),
        ]);
        let king = *field.pyramid_card(pos(5, 0)).unwrap();
        assert_eq!(field.card_annihilation(&king, None), Err(MoveError::Blocked(pos(5, 0))));
        assert_eq!(field.remaining_pyramid_cards(), 2);
    }

    #[test]
    fn card_already_removed_is_not_in_play() {
        let mut field = field_with_pyramid(&[(6, 2, Card::new(Rank::King, Suit::Diamond))]);
        let king = *field.pyramid_card(pos(6, 2)).unwrap();
        field.card_annihilation(&king, None).unwrap();

        assert_eq!(field.card_annihilation(&king, None), Err(MoveError::NotInPlay(king)));
    }

    #[test]
    fn waste_top_pairs_with_pyramid_card() {
        let mut field = field_with_pyramid(&[(6, 6, Card::new(Rank::Queen, Suit::Heart))]);
        field.original_deck.append(Card::new(Rank::Ace, Suit::Spade));
        let ace = field.get_additional_card().unwrap();
        let queen = *field.pyramid_card(pos(6, 6)).unwrap();

        assert_eq!(field.card_annihilation(&queen, Some(&ace)), Ok(MatchKind::Pair));
        assert!(field.waste_pile().is_empty());
        assert!(field.win());
    }

    #[test]
    fn waste_card_below_the_top_is_not_in_play() {
        let mut field = field_with_pyramid(&[(6, 6, Card::new(Rank::Queen, Suit::Heart))]);
        field.second_deck.append(Card::new(Rank::Ace, Suit::Spade));
        field.second_deck.append(Card::new(Rank::Five, Suit::Spade));
        let buried_ace = Card::new(Rank::Ace, Suit::Spade);
        let queen = *field.pyramid_card(pos(6, 6)).unwrap();

        assert_eq!(
            field.card_annihilation(&queen, Some(&buried_ace)),
            Err(MoveError::NotInPlay(buried_ace))
        );
        assert_eq!(field.remaining_pyramid_cards(), 1, "失敗したら片方も消えない");
    }

    #[test]
    fn removing_a_card_only_affects_its_parents() {
        let mut field = dealt_field(5);
        // (6,0) を消しても (5,0) は (6,1) にまだ押さえられている
        field.pyramid.take(pos(6, 0));
        field.check_for_blocked_cards();
        assert!(field.pyramid_card(pos(5, 0)).unwrap().is_blocked());
        assert!(field.pyramid_card(pos(5, 1)).unwrap().is_blocked());

        field.pyramid.take(pos(6, 1));
        field.check_for_blocked_cards();
        assert!(!field.pyramid_card(pos(5, 0)).unwrap().is_blocked());
        assert!(field.pyramid_card(pos(5, 1)).unwrap().is_blocked(), "(6,2) が残ってる");
        assert!(field.pyramid_card(pos(4, 0)).unwrap().is_blocked());
    }

    #[test]
    fn get_additional_card_moves_top_to_waste() {
        let mut field = dealt_field(6);
        let expected = *field.draw_pile().top().unwrap();

        let revealed = field.get_additional_card().unwrap();
        assert_eq!(revealed, expected);
        assert_eq!(field.waste_pile().top(), Some(&expected));
        assert_eq!(field.draw_pile().len(), 23);
        assert_eq!(field.total_cards(), 52);
    }

    #[test]
    fn get_additional_card_on_empty_draw_pile_does_nothing() {
        let mut field = field_with_pyramid(&[]);
        assert_eq!(field.get_additional_card(), None);
        assert!(field.waste_pile().is_empty());
    }

    #[test]
    fn use_top_card_pops_waste() {
        let mut field = dealt_field(7);
        assert_eq!(field.use_top_card(), Err(DeckError::Empty));
        let revealed = field.get_additional_card().unwrap();
        assert_eq!(field.use_top_card(), Ok(revealed));
        assert!(field.waste_pile().is_empty());
    }

    #[test]
    fn decks_reset_reverses_waste_into_draw_pile() {
        let mut field = dealt_field(8);
        let original_order: Vec<Card> = field.draw_pile().iter().copied().collect();
        while field.get_additional_card().is_some() {}
        assert!(field.draw_pile().is_empty());
        assert_eq!(field.waste_pile().len(), 24);

        assert_eq!(field.decks_reset(), 24);
        assert!(field.waste_pile().is_empty());
        let recycled: Vec<Card> = field.draw_pile().iter().copied().collect();
        // 全部めくって戻すと、元の山札と同じ並びに戻る（= 捨て札の逆順）
        assert_eq!(recycled, original_order);
        assert_eq!(field.total_cards(), 52);
    }

    #[test]
    fn decks_reset_does_nothing_while_draw_pile_has_cards() {
        let mut field = dealt_field(9);
        field.get_additional_card();
        let before = field.clone();
        assert_eq!(field.decks_reset(), 0);
        assert_eq!(field, before);
    }

    #[test]
    fn win_only_when_every_slot_is_empty() {
        let mut field = field_with_pyramid(&[(0, 0, Card::new(Rank::King, Suit::Club))]);
        assert!(!field.win());
        let king = *field.pyramid_card(pos(0, 0)).unwrap();
        field.card_annihilation(&king, None).unwrap();
        assert!(field.win());

        assert!(!dealt_field(10).win());
    }
}
