use thiserror::Error;

use crate::phase::Phase;
use crate::types::{CardId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeistError {
    #[error("unsupported player count {0} (expected 5, 7, 9, 11 or 13)")]
    UnsupportedPlayerCount(usize),

    #[error("duplicate player name {0:?}")]
    DuplicatePlayerName(String),

    #[error("{action} is only allowed during {required:?} (current phase is {actual:?})")]
    WrongPhase {
        action: &'static str,
        required: Phase,
        actual: Phase,
    },

    #[error("exchange offer {offer} does not exist or is not addressed to player {player}")]
    InvalidOffer { offer: usize, player: PlayerId },

    #[error("exchange offer {0} has already been resolved")]
    OfferAlreadyResolved(usize),

    #[error("card {card} is not in the hand of player {player}")]
    CardNotFound { player: PlayerId, card: CardId },

    #[error("player {0} does not exist")]
    PlayerNotFound(PlayerId),

    #[error("additional card pool ran out while dealing to player {0}")]
    InsufficientCards(PlayerId),

    #[error("player {0} is not a living robber")]
    NotARobber(PlayerId),
}

impl HeistError {
    pub(crate) fn wrong_phase(action: &'static str, required: Phase, actual: Phase) -> Self {
        HeistError::WrongPhase { action, required, actual }
    }
}
