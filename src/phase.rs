use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    CardExchange,
    CardDiscard,
    Night,
    NightResult,
    Day,
    Voting,
    DayResult,
    // terminal, only entered through the win check
    GameOver,
}

/// Normal advancement order. GameOver is deliberately absent.
pub static PHASE_CYCLE: [Phase; 8] = [
    Phase::Setup,
    Phase::CardExchange,
    Phase::CardDiscard,
    Phase::Night,
    Phase::NightResult,
    Phase::Day,
    Phase::Voting,
    Phase::DayResult,
];

impl Phase {
    pub fn is_terminal(&self) -> bool {
        *self == Phase::GameOver
    }

    /// The phase that follows in [`PHASE_CYCLE`], ignoring round rules.
    /// DayResult and GameOver have no cyclic successor and wrap to Setup.
    pub(crate) fn cyclic_successor(&self) -> Phase {
        match PHASE_CYCLE.iter().position(|p| p == self) {
            Some(idx) if idx + 1 < PHASE_CYCLE.len() => PHASE_CYCLE[idx + 1],
            _ => Phase::Setup,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhaseInfo {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn phase_info(phase: Phase) -> PhaseInfo {
    let (title, description) = match phase {
        Phase::Setup => ("Setup", "Roles and cards are dealt"),
        Phase::CardExchange => ("Card exchange", "Players may trade additional cards"),
        Phase::CardDiscard => ("Card discard", "Every player discards one additional card"),
        Phase::Night => ("Night", "The robbers try a digit of the code"),
        Phase::NightResult => ("Night result", "The outcome of the night attempt is shown"),
        Phase::Day => ("Day", "Discussion and the hunt for robbers"),
        Phase::Voting => ("Voting", "Vote for the player you suspect"),
        Phase::DayResult => ("Vote result", "The outcome of the vote is shown"),
        Phase::GameOver => ("Game over", "Final results"),
    };

    PhaseInfo { title, description }
}

/// Renders a countdown in seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
