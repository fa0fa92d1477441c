use std::collections::{BTreeMap, HashSet};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::info;

use crate::error::HeistError;
use crate::phase::Phase;
use crate::shuffle::shuffle;
use crate::types::{
    AdditionalCard, BankCode, CardId, GamePlayer, MainCard, MainFace, PlayerRole, Position,
    RoleSplit, ADDITIONAL_CARDS_PER_PLAYER,
};
use crate::Heist;

struct CardIds(u32);

impl CardIds {
    fn next(&mut self) -> CardId {
        self.0 += 1;
        CardId(self.0)
    }
}

impl Heist {
    /// Deals a new game for the given seating order.
    pub fn new<S: AsRef<str>, R: Rng + ?Sized>(names: &[S], rng: &mut R) -> Result<Heist, HeistError> {
        let split = RoleSplit::for_player_count(names.len())?;

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.as_ref()) {
                return Err(HeistError::DuplicatePlayerName(name.as_ref().to_string()));
            }
        }

        let mut roles: Vec<PlayerRole> = std::iter::repeat(PlayerRole::Robber)
            .take(split.robbers)
            .chain(std::iter::repeat(PlayerRole::Client).take(split.clients))
            .collect();
        shuffle(&mut roles, rng);

        let digits = generate_code_digits(split.code_length(), rng);
        let mut ids = CardIds(0);

        // clients take code positions in seating order, so every main card
        // agrees with the bank code
        let mut client_positions = digits.iter().map(|(&position, &digit)| (position, digit));
        let mut players = Vec::with_capacity(names.len());
        for (idx, (name, role)) in names.iter().zip(roles).enumerate() {
            let face = match role {
                PlayerRole::Robber => MainFace::Robber,
                PlayerRole::Client => match client_positions.next() {
                    Some((position, digit)) => MainFace::Client { digit, position },
                    None => unreachable!("one code position per client"),
                },
            };

            players.push(GamePlayer {
                id: idx + 1,
                name: name.as_ref().to_string(),
                role,
                main_card: MainCard { id: ids.next(), face },
                additional_cards: Vec::with_capacity(ADDITIONAL_CARDS_PER_PLAYER),
                is_alive: true,
                is_ready: false,
            });
        }

        let mut pool = additional_card_pool(&digits, players.len(), &mut ids, rng);
        for player in players.iter_mut() {
            for _ in 0..ADDITIONAL_CARDS_PER_PLAYER {
                let card = pool.pop().ok_or(HeistError::InsufficientCards(player.id))?;
                player.additional_cards.push(card);
            }
        }

        info!(
            players = players.len(),
            robbers = split.robbers,
            code_length = split.code_length(),
            "dealt new game"
        );

        Ok(Heist {
            phase: Phase::Setup,
            round: 1,
            players,
            bank_code: BankCode::new(digits),
            discarded: Vec::new(),
            exchanges: Vec::new(),
            night_attempts: Vec::new(),
            votes: Vec::new(),
            eliminated: Vec::new(),
            winner: None,
            phase_timer: 0,
        })
    }

    /// Same as [`Heist::new`] with a reproducible PCG stream.
    pub fn with_seed<S: AsRef<str>>(names: &[S], seed: u64) -> Result<Heist, HeistError> {
        let mut rng = Pcg64::seed_from_u64(seed);
        Heist::new(names, &mut rng)
    }
}

/// Draws one digit per position, rejecting digits already used.
fn generate_code_digits<R: Rng + ?Sized>(length: usize, rng: &mut R) -> BTreeMap<Position, u8> {
    let mut digits = BTreeMap::new();
    let mut used = [false; 10];

    for position in 1..=length.min(10) {
        let digit = loop {
            let candidate: u8 = rng.gen_range(0..10);
            if !used[candidate as usize] {
                break candidate;
            }
        };
        used[digit as usize] = true;
        digits.insert(position, digit);
    }

    digits
}

/// One card per code digit, topped up with random decoys to two per player.
fn additional_card_pool<R: Rng + ?Sized>(
    digits: &BTreeMap<Position, u8>,
    num_players: usize,
    ids: &mut CardIds,
    rng: &mut R,
) -> Vec<AdditionalCard> {
    let total = num_players * ADDITIONAL_CARDS_PER_PLAYER;
    let mut pool: Vec<AdditionalCard> = digits
        .values()
        .map(|&digit| AdditionalCard { id: ids.next(), digit })
        .collect();

    while pool.len() < total {
        pool.push(AdditionalCard { id: ids.next(), digit: rng.gen_range(0..10) });
    }

    shuffle(&mut pool, rng);
    pool
}
