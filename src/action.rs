use std::fmt::{Debug, Formatter};
use serde::{Deserialize, Serialize};
use crate::error::HeistError;
use crate::roman::to_roman;
use crate::types::{CardId, ExchangeResponse, PlayerId, Position};
use crate::Heist;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    NextPhase,
    ProposeExchange(PlayerId, PlayerId, CardId), // from, to, offered card
    RespondExchange(PlayerId, usize, ExchangeResponse), // responder, offer index
    Discard(PlayerId, CardId),
    NightAttempt(u8, Position), // digit, position
    Vote(PlayerId, PlayerId), // voter, target
    ResolveVoting,
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {

        match self {
            Action::NextPhase => {
                f.write_str("Advance to the next phase")
            }
            Action::ProposeExchange(from, to, card) => {
                f.write_fmt(format_args!("Player {from} offers card {card} to player {to}"))
            }
            Action::RespondExchange(player, offer, ExchangeResponse::Accept(card)) => {
                f.write_fmt(format_args!("Player {player} accepts offer {offer} with card {card}"))
            }
            Action::RespondExchange(player, offer, ExchangeResponse::Reject) => {
                f.write_fmt(format_args!("Player {player} rejects offer {offer}"))
            }
            Action::Discard(player, card) => {
                f.write_fmt(format_args!("Player {player} discards card {card}"))
            }
            Action::NightAttempt(digit, position) => {
                f.write_fmt(format_args!("Robbers try {digit} at position {}", to_roman(*position)))
            }
            Action::Vote(voter, target) => {
                f.write_fmt(format_args!("Player {voter} votes against player {target}"))
            }
            Action::ResolveVoting => {
                f.write_str("Votes are counted")
            }
        }
    }
}

impl Heist {
    /// Applies one action. `NextPhase` goes through [`Heist::advance`] so a
    /// winner is never missed.
    pub fn apply_action(&self, action: Action) -> Result<Heist, HeistError> {
        match action {
            Action::NextPhase => Ok(self.advance()),
            Action::ProposeExchange(from, to, card) => self.propose_exchange(from, to, card),
            Action::RespondExchange(player, offer, response) => self.respond_to_exchange(player, offer, response),
            Action::Discard(player, card) => self.discard_card(player, card),
            Action::NightAttempt(digit, position) => self.make_night_attempt(digit, position),
            Action::Vote(voter, target) => self.vote(voter, target),
            Action::ResolveVoting => self.resolve_voting(),
        }
    }
}
