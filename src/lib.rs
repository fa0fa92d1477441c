pub mod action;
pub mod error;
pub mod phase;
pub mod roman;
pub mod shuffle;
pub mod sim;
pub mod types;

mod discard;
mod exchange;
mod night;
mod sequencer;
mod setup;
mod voting;
mod win;

pub use action::Action;
pub use error::HeistError;
pub use phase::{format_time, phase_info, Phase, PhaseInfo};
pub use roman::to_roman;
pub use types::{
    AdditionalCard, BankCode, CardId, CodeAttempt, ExchangeOffer, ExchangeResponse, GamePlayer,
    MainCard, MainFace, OfferStatus, PlayerId, PlayerRole, Position, RoleSplit, Winner,
};

use std::fmt::{Debug, Formatter};
use serde::{Deserialize, Serialize};

/// Whole-game snapshot. Every operation leaves `self` untouched and returns the
/// next snapshot.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heist {
    phase: Phase,
    round: u32,
    players: Vec<GamePlayer>,
    bank_code: BankCode,
    discarded: Vec<AdditionalCard>,
    exchanges: Vec<ExchangeOffer>,
    night_attempts: Vec<CodeAttempt>,
    // (voter, target) in order of each voter's first vote
    votes: Vec<(PlayerId, PlayerId)>,
    eliminated: Vec<PlayerId>,
    winner: Option<Winner>,
    phase_timer: u32,
}

impl Debug for Heist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "R {} | {:?} | revealed {}/{} | winner {:?}",
            self.round, self.phase, self.bank_code.revealed_count(), self.bank_code.len(), self.winner)?;
        for player in &self.players {
            let digits: Vec<u8> = player.additional_cards.iter().map(|c| c.digit).collect();
            writeln!(f, "\tP {}: {} {:?} {:?} | {:?}{}",
                player.id, player.name, player.role, player.main_card.face, digits,
                if player.is_alive { "" } else { " (out)" })?;
        }
        Ok(())
    }
}

impl Heist {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn players(&self) -> &[GamePlayer] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&GamePlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &GamePlayer> + '_ {
        self.players.iter().filter(|p| p.is_alive)
    }

    pub fn alive_robbers(&self) -> impl Iterator<Item = &GamePlayer> + '_ {
        self.alive_players().filter(|p| p.is_robber())
    }

    pub fn bank_code(&self) -> &BankCode {
        &self.bank_code
    }

    pub fn discarded(&self) -> &[AdditionalCard] {
        &self.discarded
    }

    pub fn exchanges(&self) -> &[ExchangeOffer] {
        &self.exchanges
    }

    pub fn night_attempts(&self) -> &[CodeAttempt] {
        &self.night_attempts
    }

    pub fn votes(&self) -> &[(PlayerId, PlayerId)] {
        &self.votes
    }

    pub fn eliminated(&self) -> &[PlayerId] {
        &self.eliminated
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Seconds left in the phase. Nothing drives it; it is display data only.
    pub fn phase_timer(&self) -> u32 {
        self.phase_timer
    }

    fn require_phase(&self, action: &'static str, required: Phase) -> Result<(), HeistError> {
        if self.phase == required {
            Ok(())
        } else {
            Err(HeistError::wrong_phase(action, required, self.phase))
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut GamePlayer, HeistError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(HeistError::PlayerNotFound(id))
    }
}
