use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::HeistError;

/// 1-based seat number, stable for the whole game.
pub type PlayerId = usize;

/// 1-based slot of the bank code.
pub type Position = usize;

pub const ADDITIONAL_CARDS_PER_PLAYER: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Robber,
    Client,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Robbers,
    Clients,
}

/// Robber/client split for one supported table size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoleSplit {
    pub players: usize,
    pub robbers: usize,
    pub clients: usize,
}

static ROLE_SPLITS: [RoleSplit; 5] = [
    RoleSplit { players: 5, robbers: 2, clients: 3 },
    RoleSplit { players: 7, robbers: 3, clients: 4 },
    RoleSplit { players: 9, robbers: 4, clients: 5 },
    RoleSplit { players: 11, robbers: 5, clients: 6 },
    RoleSplit { players: 13, robbers: 6, clients: 7 },
];

impl RoleSplit {
    pub fn for_player_count(players: usize) -> Result<RoleSplit, HeistError> {
        ROLE_SPLITS
            .iter()
            .find(|split| split.players == players)
            .copied()
            .ok_or(HeistError::UnsupportedPlayerCount(players))
    }

    pub fn supported() -> impl Iterator<Item = RoleSplit> {
        ROLE_SPLITS.iter().copied()
    }

    /// The bank code has one position per client.
    pub fn code_length(&self) -> usize {
        self.clients
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainFace {
    Robber,
    Client { digit: u8, position: Position },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainCard {
    pub id: CardId,
    pub face: MainFace,
}

impl MainCard {
    pub fn is_robber(&self) -> bool {
        self.face == MainFace::Robber
    }
}

/// Digit-only card. The digit may or may not belong to the bank code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCard {
    pub id: CardId,
    pub digit: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
    pub role: PlayerRole,
    pub main_card: MainCard,
    pub additional_cards: Vec<AdditionalCard>,
    pub is_alive: bool,
    // carried for the lobby, never read by the engine
    pub is_ready: bool,
}

impl GamePlayer {
    pub fn is_robber(&self) -> bool {
        self.role == PlayerRole::Robber
    }

    pub fn find_card(&self, card: CardId) -> Option<usize> {
        self.additional_cards.iter().position(|c| c.id == card)
    }
}

/// Secret digits by position plus the positions everyone can already see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankCode {
    digits: BTreeMap<Position, u8>,
    revealed: BTreeSet<Position>,
}

impl BankCode {
    pub fn new(digits: BTreeMap<Position, u8>) -> Self {
        Self { digits, revealed: BTreeSet::new() }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digit_at(&self, position: Position) -> Option<u8> {
        self.digits.get(&position).copied()
    }

    pub fn digits(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.digits.iter().map(|(&position, &digit)| (position, digit))
    }

    pub fn revealed(&self) -> impl Iterator<Item = Position> + '_ {
        self.revealed.iter().copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, position: Position) -> bool {
        self.revealed.contains(&position)
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() == self.digits.len()
    }

    /// Marks every position holding `digit` as revealed and returns the ones that
    /// were newly revealed. Digits are distinct so at most one position matches.
    pub(crate) fn reveal_digit(&mut self, digit: u8) -> Vec<Position> {
        let matching: Vec<Position> = self
            .digits
            .iter()
            .filter(|(_, &d)| d == digit)
            .map(|(&position, _)| position)
            .collect();

        matching.into_iter().filter(|&position| self.revealed.insert(position)).collect()
    }

    /// Reveals `position` if it holds `digit`. Returns whether the guess was right.
    pub(crate) fn reveal_if_matches(&mut self, position: Position, digit: u8) -> bool {
        if self.digit_at(position) == Some(digit) {
            self.revealed.insert(position);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn reveal_all(&mut self) {
        self.revealed = self.digits.keys().copied().collect();
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeOffer {
    pub from: PlayerId,
    pub to: PlayerId,
    pub card: CardId,
    pub status: OfferStatus,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeResponse {
    Accept(CardId),
    Reject,
}

/// A night guess, kept whether or not it was right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeAttempt {
    pub digit: u8,
    pub position: Position,
}
