use tracing::info;

use crate::phase::Phase;
use crate::types::Winner;
use crate::Heist;

impl Heist {
    /// Ends the game when one side has won. Robber elimination is checked first,
    /// so clients win if both conditions hold at once.
    pub fn check_win_condition(&self) -> Heist {
        let winner = if self.alive_robbers().next().is_none() {
            Winner::Clients
        } else if self.bank_code.is_fully_revealed() {
            Winner::Robbers
        } else {
            return self.clone();
        };

        let mut game = self.clone();
        game.winner = Some(winner);
        game.phase = Phase::GameOver;

        if self.winner.is_none() {
            info!(round = game.round, ?winner, revealed = game.bank_code.revealed_count(), "game over");
        }
        game
    }
}
