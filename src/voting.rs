use tracing::{debug, info};

use crate::error::HeistError;
use crate::phase::Phase;
use crate::types::PlayerId;
use crate::Heist;

impl Heist {
    /// Records `voter`'s vote, replacing any earlier one. Ids are not checked
    /// against the table.
    pub fn vote(&self, voter: PlayerId, target: PlayerId) -> Result<Heist, HeistError> {
        self.require_phase("voting", Phase::Voting)?;

        let mut game = self.clone();
        match game.votes.iter_mut().find(|(v, _)| *v == voter) {
            Some(entry) => entry.1 = target,
            None => game.votes.push((voter, target)),
        }

        debug!(voter, target, "vote cast");
        Ok(game)
    }

    /// Votes per target, in the order targets first appear in the vote log.
    pub fn tally(&self) -> Vec<(PlayerId, usize)> {
        let mut counts: Vec<(PlayerId, usize)> = Vec::new();
        for &(_, target) in &self.votes {
            match counts.iter_mut().find(|(t, _)| *t == target) {
                Some(entry) => entry.1 += 1,
                None => counts.push((target, 1)),
            }
        }
        counts
    }

    /// True once every living player has a vote on record.
    pub fn all_living_voted(&self) -> bool {
        self.alive_players().all(|p| self.votes.iter().any(|(voter, _)| *voter == p.id))
    }

    /// Eliminates the player with the most votes. On a tie the target seen first
    /// in the tally wins. No votes, no elimination.
    pub fn resolve_voting(&self) -> Result<Heist, HeistError> {
        self.require_phase("resolving the vote", Phase::Voting)?;

        let mut leader: Option<(PlayerId, usize)> = None;
        for (target, count) in self.tally() {
            if leader.map_or(true, |(_, best)| count > best) {
                leader = Some((target, count));
            }
        }

        let Some((target, count)) = leader else {
            debug!("no votes cast");
            return Ok(self.clone());
        };

        let mut game = self.clone();
        match game.players.iter_mut().find(|p| p.id == target) {
            Some(player) if player.is_alive => {
                player.is_alive = false;
                game.eliminated.push(target);
                info!(player = target, votes = count, role = ?player.role, "player voted out");
            }
            _ => debug!(target, votes = count, "vote leader is not a living player"),
        }

        Ok(game)
    }
}
