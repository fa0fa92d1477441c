use tracing::debug;

use crate::error::HeistError;
use crate::phase::Phase;
use crate::types::{CodeAttempt, PlayerId, Position};
use crate::Heist;

impl Heist {
    /// Records a guess of `digit` at `position` and reveals the position when the
    /// guess is right. The caller decides who may guess; see
    /// [`Heist::make_night_attempt_as`] for a checked variant.
    pub fn make_night_attempt(&self, digit: u8, position: Position) -> Result<Heist, HeistError> {
        self.require_phase("a night attempt", Phase::Night)?;

        let mut game = self.clone();
        game.night_attempts.push(CodeAttempt { digit, position });
        let correct = game.bank_code.reveal_if_matches(position, digit);

        debug!(round = game.round, digit, position, correct, "night attempt");
        Ok(game)
    }

    /// Like [`Heist::make_night_attempt`] but only a living robber may guess.
    pub fn make_night_attempt_as(&self, player: PlayerId, digit: u8, position: Position) -> Result<Heist, HeistError> {
        self.require_phase("a night attempt", Phase::Night)?;

        match self.player(player) {
            Some(p) if p.is_alive && p.is_robber() => self.make_night_attempt(digit, position),
            Some(_) => Err(HeistError::NotARobber(player)),
            None => Err(HeistError::PlayerNotFound(player)),
        }
    }
}
