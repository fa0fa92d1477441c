use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bank_heist::sim::{phase_actions, play_random_game, Outcome};
use bank_heist::{phase_info, to_roman, Action, Heist, MainFace, Phase, RoleSplit, Winner};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bank-heist", about = "Bank Heist game engine driver")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one narrated game with random moves
    Play {
        #[arg(long, default_value_t = 5)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play many random games and write one CSV row per game
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 5)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// CSV destination, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

// one flat CSV record per game
#[derive(Serialize)]
struct Row {
    game: usize,
    players: usize,
    winner: Option<Winner>,
    rounds: u32,
    revealed: usize,
    code_length: usize,
    eliminated: usize,
    actions: usize,
}

impl Row {
    fn new(game: usize, outcome: Outcome) -> Row {
        Row {
            game,
            players: outcome.players,
            winner: outcome.winner,
            rounds: outcome.rounds,
            revealed: outcome.revealed,
            code_length: outcome.code_length,
            eliminated: outcome.eliminated,
            actions: outcome.actions,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn rng_for(seed: Option<u64>) -> Pcg64 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding game rng");
    Pcg64::seed_from_u64(seed)
}

fn seat_names(players: usize) -> Result<Vec<String>> {
    RoleSplit::for_player_count(players)?;
    Ok((1..=players).map(|i| format!("Player{i}")).collect())
}

fn play(players: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = rng_for(seed);
    let mut game = Heist::new(&seat_names(players)?, &mut rng)?;

    println!("Bank code (hidden from players): {}", code_line(&game, true));
    for player in game.players() {
        let main = match player.main_card.face {
            MainFace::Robber => "robber".to_string(),
            MainFace::Client { digit, position } => format!("client, {digit} at {}", to_roman(position)),
        };
        let extra: Vec<u8> = player.additional_cards.iter().map(|c| c.digit).collect();
        println!("  {}: {main} | additional {:?}", player.name, extra);
    }

    let mut last_phase = None;
    while game.winner().is_none() {
        if last_phase != Some((game.round(), game.phase())) {
            let info = phase_info(game.phase());
            println!("\n[round {}] {}: {}", game.round(), info.title, info.description);
            last_phase = Some((game.round(), game.phase()));
        }

        for action in phase_actions(&game, &mut rng) {
            println!("  {:?}", action);
            game = game.apply_action(action)?;
        }
        if game.phase() == Phase::Night || game.phase() == Phase::Voting {
            println!("  code: {}", code_line(&game, false));
        }
        game = game.apply_action(Action::NextPhase)?;
    }

    if let Some(winner) = game.winner() {
        println!("\n{:?} win in round {} ({}/{} positions revealed)",
            winner, game.round(), game.bank_code().revealed_count(), game.bank_code().len());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game).context("serializing final state")?);
    }
    Ok(())
}

fn code_line(game: &Heist, show_all: bool) -> String {
    game.bank_code()
        .digits()
        .map(|(position, digit)| {
            if show_all || game.bank_code().is_revealed(position) {
                format!("{}={digit}", to_roman(position))
            } else {
                format!("{}=?", to_roman(position))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn simulate(games: usize, players: usize, seed: Option<u64>, output: Option<PathBuf>) -> Result<()> {
    let names = seat_names(players)?;
    let mut rng = rng_for(seed);

    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);

    let mut robber_wins = 0;
    for game_idx in 0..games {
        let game = Heist::new(&names, &mut rng)?;
        let (end, log) = play_random_game(&game, &mut rng)?;
        let outcome = Outcome::of(&end, log.len());
        if outcome.winner == Some(Winner::Robbers) {
            robber_wins += 1;
        }
        writer.serialize(Row::new(game_idx, outcome))?;
    }
    writer.flush()?;

    info!(games, players, robber_wins, "simulation finished");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Command::Play { players, seed, json } => play(players, seed, json),
        Command::Simulate { games, players, seed, output } => simulate(games, players, seed, output),
    }
}
