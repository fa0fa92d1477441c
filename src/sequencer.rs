use tracing::debug;

use crate::phase::Phase;
use crate::Heist;

impl Heist {
    /// Moves to the next phase of the cycle. Never checks for a winner; call
    /// [`Heist::check_win_condition`] afterwards, or use [`Heist::advance`].
    pub fn next_phase(&self) -> Heist {
        let mut game = self.clone();

        match self.phase {
            Phase::GameOver => {}
            Phase::DayResult => {
                // fresh round
                game.phase = Phase::Night;
                game.round += 1;
                game.night_attempts.clear();
                game.votes.clear();
            }
            phase => {
                let mut next = phase.cyclic_successor();
                // cards are only traded in the first round
                if next == Phase::CardExchange && game.round > 1 {
                    next = Phase::CardDiscard;
                }
                game.phase = next;
            }
        }

        debug!(round = game.round, from = ?self.phase, to = ?game.phase, "phase advanced");
        game
    }

    /// Next phase followed by the win check, the order every caller must use.
    pub fn advance(&self) -> Heist {
        self.next_phase().check_win_condition()
    }
}

#[cfg(test)]
mod tests {
    use crate::phase::Phase;
    use crate::Heist;

    fn game() -> Heist {
        Heist::with_seed(&["A", "B", "C", "D", "E"], 4).unwrap()
    }

    fn walk(mut game: Heist, steps: usize) -> Vec<Phase> {
        let mut seen = vec![game.phase()];
        for _ in 0..steps {
            game = game.next_phase();
            seen.push(game.phase());
        }
        seen
    }

    #[test]
    fn first_round_visits_exchange() {
        assert_eq!(walk(game(), 7), vec![
            Phase::Setup,
            Phase::CardExchange,
            Phase::CardDiscard,
            Phase::Night,
            Phase::NightResult,
            Phase::Day,
            Phase::Voting,
            Phase::DayResult,
        ]);
    }

    #[test]
    fn day_result_starts_new_round() {
        let mut game = game();
        for _ in 0..7 {
            game = game.next_phase();
        }
        assert_eq!(game.phase(), Phase::DayResult);
        game.votes.push((1, 2));
        game.night_attempts.push(crate::CodeAttempt { digit: 3, position: 1 });

        let next = game.next_phase();
        assert_eq!(next.phase(), Phase::Night);
        assert_eq!(next.round(), 2);
        assert!(next.votes().is_empty());
        assert!(next.night_attempts().is_empty());

        // the earlier snapshot is untouched
        assert_eq!(game.round(), 1);
        assert_eq!(game.votes().len(), 1);
    }

    #[test]
    fn later_rounds_skip_exchange() {
        let mut game = game();
        game.round = 2;
        assert_eq!(walk(game, 2), vec![Phase::Setup, Phase::CardDiscard, Phase::Night]);
    }

    #[test]
    fn game_over_is_absorbing() {
        let mut game = game();
        game.phase = Phase::GameOver;
        assert_eq!(game.next_phase(), game);
    }
}
