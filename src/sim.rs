// random playouts, for the simulator binary and the benchmark

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use crate::action::Action;
use crate::error::HeistError;
use crate::phase::Phase;
use crate::types::{CardId, ExchangeResponse, PlayerId, Winner};
use crate::Heist;

// once only robbers are left, games end on night guesses alone
const MAX_ROUNDS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub players: usize,
    pub winner: Option<Winner>,
    pub rounds: u32,
    pub revealed: usize,
    pub code_length: usize,
    pub eliminated: usize,
    pub actions: usize,
}

impl Outcome {
    pub fn of(game: &Heist, actions: usize) -> Outcome {
        Outcome {
            players: game.players().len(),
            winner: game.winner(),
            rounds: game.round(),
            revealed: game.bank_code().revealed_count(),
            code_length: game.bank_code().len(),
            eliminated: game.eliminated().len(),
            actions,
        }
    }
}

/// Plays `game` to the end with random choices, returning the final state and
/// every action taken.
pub fn play_random_game<R: Rng + ?Sized>(game: &Heist, rng: &mut R) -> Result<(Heist, Vec<Action>), HeistError> {
    let mut game = game.clone();
    let mut log = Vec::new();

    while game.winner().is_none() && game.round() <= MAX_ROUNDS {
        for action in phase_actions(&game, rng) {
            game = apply(&game, action, &mut log)?;
        }
        game = apply(&game, Action::NextPhase, &mut log)?;
    }

    Ok((game, log))
}

fn apply(game: &Heist, action: Action, log: &mut Vec<Action>) -> Result<Heist, HeistError> {
    let next = game.apply_action(action.clone())?;
    log.push(action);
    Ok(next)
}

/// Random but legal moves for the current phase, not including the advance.
pub fn phase_actions<R: Rng + ?Sized>(game: &Heist, rng: &mut R) -> Vec<Action> {
    let alive: Vec<PlayerId> = game.alive_players().map(|p| p.id).collect();
    let mut actions = Vec::with_capacity(alive.len() * 2);

    match game.phase() {
        Phase::CardExchange => {
            // each player trades at most once, so the cards picked here are
            // still in hand when the offer is applied
            let mut busy: Vec<PlayerId> = Vec::new();
            let mut offer = game.exchanges().len();
            for &from in &alive {
                if busy.contains(&from) || !rng.gen_bool(0.5) {
                    continue;
                }
                let free: Vec<PlayerId> = alive.iter().copied().filter(|id| *id != from && !busy.contains(id)).collect();
                let (Some(&to), Some(card)) = (free.choose(rng), random_card(game, from, rng)) else {
                    continue;
                };
                let response = match random_card(game, to, rng) {
                    Some(answer) if rng.gen_bool(0.5) => ExchangeResponse::Accept(answer),
                    _ => ExchangeResponse::Reject,
                };
                actions.push(Action::ProposeExchange(from, to, card));
                actions.push(Action::RespondExchange(to, offer, response));
                busy.extend([from, to]);
                offer += 1;
            }
        }
        Phase::CardDiscard => {
            for &player in &alive {
                if game.player(player).is_some_and(|p| p.additional_cards.len() > 1) {
                    if let Some(card) = random_card(game, player, rng) {
                        actions.push(Action::Discard(player, card));
                    }
                }
            }
        }
        Phase::Night => {
            let hidden: Vec<usize> = game
                .bank_code()
                .digits()
                .map(|(position, _)| position)
                .filter(|&position| !game.bank_code().is_revealed(position))
                .collect();
            if let Some(&position) = hidden.choose(rng) {
                actions.push(Action::NightAttempt(rng.gen_range(0..10), position));
            }
        }
        Phase::Voting => {
            for &voter in &alive {
                let robber = game.player(voter).is_some_and(|p| p.is_robber());
                // robbers never vote for each other
                let targets: Vec<PlayerId> = game
                    .alive_players()
                    .filter(|p| p.id != voter && !(robber && p.is_robber()))
                    .map(|p| p.id)
                    .collect();
                if let Some(&target) = targets.choose(rng) {
                    actions.push(Action::Vote(voter, target));
                }
            }
            actions.push(Action::ResolveVoting);
        }
        Phase::Setup | Phase::NightResult | Phase::Day | Phase::DayResult | Phase::GameOver => {}
    }

    actions
}

fn random_card<R: Rng + ?Sized>(game: &Heist, player: PlayerId, rng: &mut R) -> Option<CardId> {
    game.player(player)?.additional_cards.choose(rng).map(|c| c.id)
}
