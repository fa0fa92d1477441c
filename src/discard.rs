use tracing::debug;

use crate::error::HeistError;
use crate::phase::Phase;
use crate::types::{CardId, PlayerId};
use crate::Heist;

impl Heist {
    /// Moves one of `player`'s additional cards onto the discard pile. A code
    /// position holding the same digit becomes revealed.
    pub fn discard_card(&self, player: PlayerId, card: CardId) -> Result<Heist, HeistError> {
        self.require_phase("discarding", Phase::CardDiscard)?;

        let mut game = self.clone();
        let hand = &mut game.player_mut(player)?.additional_cards;
        let idx = hand
            .iter()
            .position(|c| c.id == card)
            .ok_or(HeistError::CardNotFound { player, card })?;
        let discarded = hand.remove(idx);

        let revealed = game.bank_code.reveal_digit(discarded.digit);
        game.discarded.push(discarded);

        debug!(player, %card, digit = discarded.digit, ?revealed, "card discarded");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HeistError;
    use crate::phase::Phase;
    use crate::types::{AdditionalCard, CardId};
    use crate::Heist;

    fn discard_phase() -> Heist {
        Heist::with_seed(&["A", "B", "C", "D", "E"], 31).unwrap().next_phase().next_phase()
    }

    // plants a card with the given digit in player 1's first slot
    fn plant(game: &mut Heist, digit: u8) -> CardId {
        let id = CardId(900 + digit as u32);
        game.players[0].additional_cards[0] = AdditionalCard { id, digit };
        id
    }

    #[test]
    fn only_during_discard_phase() {
        let game = Heist::with_seed(&["A", "B", "C", "D", "E"], 31).unwrap().next_phase();
        let card = game.player(1).unwrap().additional_cards[0].id;
        assert!(matches!(
            game.discard_card(1, card),
            Err(HeistError::WrongPhase { required: Phase::CardDiscard, actual: Phase::CardExchange, .. })
        ));
    }

    #[test]
    fn matching_digit_reveals_its_position() {
        let mut game = discard_phase();
        let (position, digit) = game.bank_code().digits().nth(1).unwrap();
        let card = plant(&mut game, digit);

        let after = game.discard_card(1, card).unwrap();
        assert_eq!(after.bank_code().revealed().collect::<Vec<_>>(), vec![position]);
        assert_eq!(after.player(1).unwrap().additional_cards.len(), 1);
        assert_eq!(after.discarded().last().map(|c| c.id), Some(card));

        // the snapshot we discarded from is untouched
        assert_eq!(game.bank_code().revealed_count(), 0);
        assert_eq!(game.player(1).unwrap().additional_cards.len(), 2);
    }

    #[test]
    fn decoy_digit_reveals_nothing() {
        let mut game = discard_phase();
        let decoy = (0..10u8).find(|d| game.bank_code().digits().all(|(_, digit)| digit != *d)).unwrap();
        let card = plant(&mut game, decoy);

        let after = game.discard_card(1, card).unwrap();
        assert_eq!(after.bank_code().revealed_count(), 0);
        assert_eq!(after.discarded().len(), 1);
    }

    #[test]
    fn same_card_twice_fails() {
        let game = discard_phase();
        let card = game.player(2).unwrap().additional_cards[1].id;
        let game = game.discard_card(2, card).unwrap();
        assert_eq!(game.discard_card(2, card).unwrap_err(), HeistError::CardNotFound { player: 2, card });
    }

    #[test]
    fn unknown_player() {
        let game = discard_phase();
        assert_eq!(game.discard_card(42, CardId(1)).unwrap_err(), HeistError::PlayerNotFound(42));
    }

    #[test]
    fn revealed_set_only_grows() {
        let mut game = discard_phase();
        let mut last = 0;
        for id in 1..=5 {
            for _ in 0..2 {
                let card = game.player(id).unwrap().additional_cards[0].id;
                game = game.discard_card(id, card).unwrap();
                assert!(game.bank_code().revealed_count() >= last);
                last = game.bank_code().revealed_count();
            }
        }
        // every code digit was in the pool, so discarding everything cracks the code
        assert!(game.bank_code().is_fully_revealed());
        assert_eq!(game.discarded().len(), 10);
    }
}
