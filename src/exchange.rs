use tracing::debug;

use crate::error::HeistError;
use crate::phase::Phase;
use crate::types::{CardId, ExchangeOffer, ExchangeResponse, OfferStatus, PlayerId};
use crate::Heist;

impl Heist {
    /// Appends a pending offer of `card` from `from` to `to`. Ownership of the
    /// card is only checked when the offer is accepted.
    pub fn propose_exchange(&self, from: PlayerId, to: PlayerId, card: CardId) -> Result<Heist, HeistError> {
        self.require_phase("proposing an exchange", Phase::CardExchange)?;

        let mut game = self.clone();
        game.exchanges.push(ExchangeOffer { from, to, card, status: OfferStatus::Pending });

        debug!(offer = game.exchanges.len() - 1, from, to, %card, "exchange proposed");
        Ok(game)
    }

    /// Resolves the offer at index `offer` on behalf of its recipient. Accepting
    /// swaps the offered card with `Accept`'s card in place, so both hands keep
    /// their size and order.
    pub fn respond_to_exchange(
        &self,
        player: PlayerId,
        offer: usize,
        response: ExchangeResponse,
    ) -> Result<Heist, HeistError> {
        let pending = match self.exchanges.get(offer) {
            Some(pending) if pending.to == player => pending.clone(),
            _ => return Err(HeistError::InvalidOffer { offer, player }),
        };
        if pending.status != OfferStatus::Pending {
            return Err(HeistError::OfferAlreadyResolved(offer));
        }

        let mut game = self.clone();

        let status = match response {
            ExchangeResponse::Reject => OfferStatus::Rejected,
            ExchangeResponse::Accept(answer) => {
                let sender = game.player(pending.from).ok_or(HeistError::PlayerNotFound(pending.from))?;
                let sent_idx = sender
                    .find_card(pending.card)
                    .ok_or(HeistError::CardNotFound { player: pending.from, card: pending.card })?;
                let sent = sender.additional_cards[sent_idx];

                let responder = game.player(player).ok_or(HeistError::PlayerNotFound(player))?;
                let answer_idx = responder
                    .find_card(answer)
                    .ok_or(HeistError::CardNotFound { player, card: answer })?;
                let answered = responder.additional_cards[answer_idx];

                game.player_mut(pending.from)?.additional_cards[sent_idx] = answered;
                game.player_mut(player)?.additional_cards[answer_idx] = sent;
                OfferStatus::Accepted
            }
        };

        game.exchanges[offer].status = status;
        debug!(offer, from = pending.from, to = player, ?status, "exchange resolved");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HeistError;
    use crate::phase::Phase;
    use crate::types::{CardId, ExchangeResponse, OfferStatus};
    use crate::Heist;

    fn exchange_phase() -> Heist {
        Heist::with_seed(&["A", "B", "C", "D", "E"], 12).unwrap().next_phase()
    }

    fn card(game: &Heist, player: usize, idx: usize) -> CardId {
        game.player(player).unwrap().additional_cards[idx].id
    }

    #[test]
    fn propose_only_during_exchange() {
        let setup = Heist::with_seed(&["A", "B", "C", "D", "E"], 12).unwrap();
        let offered = card(&setup, 1, 0);
        assert_eq!(
            setup.propose_exchange(1, 2, offered).unwrap_err(),
            HeistError::WrongPhase {
                action: "proposing an exchange",
                required: Phase::CardExchange,
                actual: Phase::Setup,
            }
        );
    }

    #[test]
    fn accepted_swap_keeps_slots() {
        let game = exchange_phase();
        let (a0, a1) = (card(&game, 1, 0), card(&game, 1, 1));
        let (b0, b1) = (card(&game, 3, 0), card(&game, 3, 1));

        let game = game.propose_exchange(1, 3, a1).unwrap();
        assert_eq!(game.exchanges()[0].status, OfferStatus::Pending);

        let swapped = game.respond_to_exchange(3, 0, ExchangeResponse::Accept(b0)).unwrap();
        let hand_a: Vec<CardId> = swapped.player(1).unwrap().additional_cards.iter().map(|c| c.id).collect();
        let hand_b: Vec<CardId> = swapped.player(3).unwrap().additional_cards.iter().map(|c| c.id).collect();
        assert_eq!(hand_a, vec![a0, b0]);
        assert_eq!(hand_b, vec![a1, b1]);
        assert_eq!(swapped.exchanges()[0].status, OfferStatus::Accepted);

        // the proposal snapshot still has the old hands
        assert_eq!(card(&game, 1, 1), a1);
    }

    #[test]
    fn reject_leaves_hands() {
        let game = exchange_phase();
        let before = game.players().to_vec();
        let game = game
            .propose_exchange(2, 4, card(&game, 2, 0))
            .unwrap()
            .respond_to_exchange(4, 0, ExchangeResponse::Reject)
            .unwrap();
        assert_eq!(game.players(), before.as_slice());
        assert_eq!(game.exchanges()[0].status, OfferStatus::Rejected);
    }

    #[test]
    fn misaddressed_or_unknown_offer() {
        let game = exchange_phase();
        let game = game.propose_exchange(1, 2, card(&game, 1, 0)).unwrap();

        assert_eq!(
            game.respond_to_exchange(3, 0, ExchangeResponse::Reject).unwrap_err(),
            HeistError::InvalidOffer { offer: 0, player: 3 }
        );
        assert_eq!(
            game.respond_to_exchange(2, 5, ExchangeResponse::Reject).unwrap_err(),
            HeistError::InvalidOffer { offer: 5, player: 2 }
        );
    }

    #[test]
    fn resolved_offer_cannot_be_reopened() {
        let game = exchange_phase();
        let game = game
            .propose_exchange(1, 2, card(&game, 1, 0))
            .unwrap()
            .respond_to_exchange(2, 0, ExchangeResponse::Reject)
            .unwrap();
        let answer = card(&game, 2, 0);
        assert_eq!(
            game.respond_to_exchange(2, 0, ExchangeResponse::Accept(answer)).unwrap_err(),
            HeistError::OfferAlreadyResolved(0)
        );
    }

    #[test]
    fn missing_cards_on_accept() {
        let game = exchange_phase();
        let not_owned = card(&game, 5, 0);

        // sender offered a card they do not hold
        let bad_offer = game.propose_exchange(1, 2, not_owned).unwrap();
        let answer = card(&game, 2, 0);
        assert_eq!(
            bad_offer.respond_to_exchange(2, 0, ExchangeResponse::Accept(answer)).unwrap_err(),
            HeistError::CardNotFound { player: 1, card: not_owned }
        );

        // responder answers with someone else's card
        let offer = game.propose_exchange(1, 2, card(&game, 1, 0)).unwrap();
        assert_eq!(
            offer.respond_to_exchange(2, 0, ExchangeResponse::Accept(not_owned)).unwrap_err(),
            HeistError::CardNotFound { player: 2, card: not_owned }
        );
        assert_eq!(offer.exchanges()[0].status, OfferStatus::Pending);
    }

    #[test]
    fn offers_keep_their_index() {
        let game = exchange_phase();
        let game = game
            .propose_exchange(1, 2, card(&game, 1, 0))
            .unwrap()
            .propose_exchange(3, 4, card(&game, 3, 0))
            .unwrap()
            .respond_to_exchange(4, 1, ExchangeResponse::Reject)
            .unwrap();

        assert_eq!(game.exchanges()[0].status, OfferStatus::Pending);
        assert_eq!(game.exchanges()[1].status, OfferStatus::Rejected);
    }
}
