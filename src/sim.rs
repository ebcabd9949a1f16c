#![cfg(feature = "std")]

//! Headless games between the computer and a scripted human.
//!
//! A human who keeps the same layout game after game should be found faster
//! and faster as the placement histogram sharpens the computer's aim.

use std::vec::Vec;

use anyhow::anyhow;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::common::Winner;
use crate::config::GameConfig;
use crate::grid::Coord;
use crate::session::{Phase, Session, Step};
use crate::ship::{Orientation, Ship};

/// How the scripted human places ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Habit {
    /// A random layout in the first game, repeated in every later game.
    Fixed,
    /// A fresh random layout every game.
    Random,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub winner: Winner,
    pub human_shots: usize,
    pub computer_shots: usize,
    pub computer_hits: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SimReport {
    pub habit: Habit,
    pub seed: u64,
    pub games: Vec<GameSummary>,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub mean_computer_shots: f64,
    /// Largest placement-histogram count after the last game.
    pub histogram_peak: u32,
}

/// The two selections that place `ship` through the normal input path.
fn placement_clicks(ship: &Ship) -> (Coord, Coord) {
    let anchor = ship.anchor();
    let span = ship.length() - 1;
    let end = match ship.orientation() {
        Orientation::Horizontal => Coord::new(anchor.col + span, anchor.row),
        Orientation::Vertical => Coord::new(anchor.col, anchor.row + span),
    };
    (anchor, end)
}

fn place_fleet(
    session: &mut Session<SmallRng>,
    habit: Habit,
    layout: &mut Vec<Ship>,
) -> anyhow::Result<()> {
    if habit == Habit::Fixed && !layout.is_empty() {
        for ship in layout.iter() {
            let (anchor, end) = placement_clicks(ship);
            session.select_cell(anchor, &mut ())?;
            session.select_cell(end, &mut ())?;
        }
    } else {
        session.auto_place_human(&mut ())?;
        if habit == Habit::Fixed {
            *layout = session.human().board().ships().to_vec();
        }
    }
    if session.phase() != Phase::Battle {
        return Err(anyhow!("scripted layout was not accepted"));
    }
    Ok(())
}

fn play_battle(
    session: &mut Session<SmallRng>,
    human_rng: &mut SmallRng,
    game: u32,
) -> anyhow::Result<GameSummary> {
    let size = session.config().board_size();
    let mut targets: Vec<Coord> = (0..size)
        .flat_map(|row| (0..size).map(move |col| Coord::new(col, row)))
        .collect();
    targets.shuffle(human_rng);

    let mut human_shots = 0;
    let mut computer_shots = 0;
    let mut computer_hits = 0;
    for target in targets {
        human_shots += 1;
        if let Step::Volley {
            computer, result, ..
        } = session.select_cell(target, &mut ())?
        {
            if let Some(shot) = computer {
                computer_shots += 1;
                if shot.outcome.is_hit() {
                    computer_hits += 1;
                }
            }
            if let Some(winner) = result.winner() {
                return Ok(GameSummary {
                    game,
                    winner,
                    human_shots,
                    computer_shots,
                    computer_hits,
                });
            }
        }
    }
    Err(anyhow!("game {} did not finish after every cell was fired at", game))
}

/// Play `games` standard games in one session.
pub fn simulate(games: u32, habit: Habit, seed: u64) -> anyhow::Result<SimReport> {
    let session_rng = SmallRng::seed_from_u64(seed);
    let mut human_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = Session::new(GameConfig::standard(), session_rng, &mut ())?;

    let mut layout = Vec::new();
    let mut summaries = Vec::with_capacity(games as usize);
    for game in 1..=games {
        if game > 1 {
            session.new_game(&mut ())?;
        }
        place_fleet(&mut session, habit, &mut layout)?;
        let summary = play_battle(&mut session, &mut human_rng, game)?;
        log::info!(
            "game {}: {:?} wins, computer fired {} times",
            game,
            summary.winner,
            summary.computer_shots
        );
        summaries.push(summary);
    }

    let computer_wins = summaries
        .iter()
        .filter(|s| s.winner == Winner::Computer)
        .count();
    let mean_computer_shots = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.computer_shots as f64).sum::<f64>() / summaries.len() as f64
    };
    Ok(SimReport {
        habit,
        seed,
        human_wins: summaries.len() - computer_wins,
        computer_wins,
        mean_computer_shots,
        histogram_peak: session.ship_histogram().peak().0,
        games: summaries,
    })
}
