//! A play session: the current game plus the histograms that outlive it.

use alloc::format;
use rand::Rng;

use crate::common::{AttackOutcome, GameError, GameResult, Winner};
use crate::config::GameConfig;
use crate::grid::Coord;
use crate::heuristic::{Histogram, WeightGrid};
use crate::placement::{PlacementQueue, PlacementStep};
use crate::surface::{BoardView, CellView, Surface};
use crate::turn::{check_game_over, Side};

/// Which kind of input the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The human is placing ships.
    Placement,
    /// Players are taking turns.
    Battle,
    /// The game has ended; waiting for [`Session::new_game`].
    Over(Winner),
}

/// One attack and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shot {
    pub target: Coord,
    pub outcome: AttackOutcome,
}

/// What a single selection event caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Placement(PlacementStep),
    /// The human fired, then the computer replied unless the game had ended or
    /// it had nothing left to target.
    Volley {
        human: Shot,
        computer: Option<Shot>,
        result: GameResult,
    },
}

fn attack_view(outcome: AttackOutcome) -> CellView {
    if outcome.is_hit() {
        CellView::Hit
    } else {
        CellView::Miss
    }
}

pub struct Session<R> {
    config: GameConfig,
    rng: R,
    ship_histogram: Histogram,
    attack_histogram: Histogram,
    human: Side,
    computer: Side,
    weights: WeightGrid,
    placement: PlacementQueue,
    phase: Phase,
    games_started: u32,
}

impl<R: Rng> Session<R> {
    /// Create the session's histograms and start the first game.
    pub fn new<S: Surface + ?Sized>(
        config: GameConfig,
        rng: R,
        surface: &mut S,
    ) -> Result<Self, GameError> {
        let size = config.board_size();
        let fleet_size = config.fleet().len();
        let mut session = Self {
            rng,
            ship_histogram: Histogram::new(size),
            attack_histogram: Histogram::new(size),
            human: Side::new(size, fleet_size),
            computer: Side::new(size, fleet_size),
            weights: WeightGrid::uniform(size),
            placement: PlacementQueue::new(&[]),
            phase: Phase::Placement,
            games_started: 0,
            config,
        };
        session.new_game(surface)?;
        Ok(session)
    }

    /// Reset everything except the histograms and begin human placement.
    pub fn new_game<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        let size = self.config.board_size();
        let fleet_size = self.config.fleet().len();

        let weights = WeightGrid::seeded(&self.ship_histogram)?;
        let mut computer = Side::new(size, fleet_size);
        for &ship_type in self.config.fleet() {
            computer.board_mut().place_random(&mut self.rng, ship_type)?;
        }

        self.weights = weights;
        self.computer = computer;
        self.human = Side::new(size, fleet_size);
        self.placement = PlacementQueue::new(self.config.fleet());
        self.phase = Phase::Placement;
        self.games_started += 1;
        log::info!("game {} started", self.games_started);

        surface.reset(BoardView::Fleet);
        surface.reset(BoardView::Targets);
        self.prompt_placement(surface);
        Ok(())
    }

    /// Deliver one cell selection. The meaning depends on the phase.
    pub fn select_cell<S: Surface + ?Sized>(
        &mut self,
        coord: Coord,
        surface: &mut S,
    ) -> Result<Step, GameError> {
        match self.phase {
            Phase::Placement => {
                let step = self.placement.select(coord, self.human.board_mut())?;
                self.after_placement(step, surface)?;
                Ok(Step::Placement(step))
            }
            Phase::Battle => self.volley(coord, surface),
            Phase::Over(_) => Err(GameError::GameIsOver),
        }
    }

    /// Randomly place every ship the human has not placed yet.
    pub fn auto_place_human<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotPlacing);
        }
        while !self.placement.is_done() {
            let step = self
                .placement
                .place_current_random(&mut self.rng, self.human.board_mut())?;
            self.after_placement(step, surface)?;
        }
        Ok(())
    }

    fn prompt_placement<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let Some(next) = self.placement.current() {
            surface.status(&format!(
                "Place the {} (length {}) by selecting its start and end cells.",
                next.name(),
                next.length()
            ));
        }
    }

    fn after_placement<S: Surface + ?Sized>(
        &mut self,
        step: PlacementStep,
        surface: &mut S,
    ) -> Result<(), GameError> {
        match step {
            PlacementStep::Anchored { ship_type, anchor } => {
                log::debug!("{} anchored at {}", ship_type.name(), anchor);
            }
            PlacementStep::Placed { ship, .. } => {
                self.ship_histogram.record_placement(&ship)?;
                for coord in ship.occupied_cells() {
                    surface.draw(BoardView::Fleet, coord, CellView::Ship);
                }
                if self.placement.is_done() {
                    self.phase = Phase::Battle;
                    log::info!("all ships placed; battle begins");
                    surface.status("Select a cell on the target grid to fire.");
                } else {
                    self.prompt_placement(surface);
                }
            }
            PlacementStep::Rejected { ship_type, reason } => {
                surface.status(&format!(
                    "The {} cannot go there: {}. Select its start cell again.",
                    ship_type.name(),
                    reason
                ));
            }
        }
        Ok(())
    }

    fn volley<S: Surface + ?Sized>(&mut self, coord: Coord, surface: &mut S) -> Result<Step, GameError> {
        let outcome = self.computer.receive_attack(coord)?;
        self.attack_histogram.record_attack(coord)?;
        surface.draw(BoardView::Targets, coord, attack_view(outcome));
        if let Some(id) = outcome.sunk_ship() {
            let name = self.computer.board().ship(id)?.name();
            surface.status(&format!("You sank the {}!", name));
        }
        let human = Shot {
            target: coord,
            outcome,
        };

        let mut result = self.result();
        let mut computer = None;
        if result == GameResult::InProgress {
            computer = self.computer_turn(surface)?;
            result = self.result();
        }
        if let Some(winner) = result.winner() {
            self.finish(winner, surface);
        }
        Ok(Step::Volley {
            human,
            computer,
            result,
        })
    }

    /// The computer's reply shot.
    ///
    /// The exhausted-weights arm is unreachable in a well-formed game: the
    /// computer fires at most once per distinct cell, and its shots cover every
    /// human ship cell by the last one, so the game ends before the grid is
    /// spent.
    fn computer_turn<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Option<Shot>, GameError> {
        let target = match self.weights.select_target(&mut self.rng) {
            Ok(target) => target,
            Err(GameError::DegenerateHeuristicState) => {
                surface.status("Warning: the computer has no cells left to target.");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let outcome = self.human.receive_attack(target)?;
        surface.draw(BoardView::Fleet, target, attack_view(outcome));
        if let Some(id) = outcome.sunk_ship() {
            let name = self.human.board().ship(id)?.name();
            surface.status(&format!("The computer sank your {}!", name));
        }
        Ok(Some(Shot { target, outcome }))
    }

    fn finish<S: Surface + ?Sized>(&mut self, winner: Winner, surface: &mut S) {
        self.phase = Phase::Over(winner);
        log::info!("game {} over: {:?} wins", self.games_started, winner);
        match winner {
            Winner::Human => surface.status("Game over. You win!"),
            Winner::Computer => surface.status("Game over. You lose."),
        }
        surface.game_over(winner);
    }

    /// Current result from both remaining-ship counters.
    pub fn result(&self) -> GameResult {
        check_game_over(self.human.remaining(), self.computer.remaining())
    }
}

impl<R> Session<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn human(&self) -> &Side {
        &self.human
    }

    pub fn computer(&self) -> &Side {
        &self.computer
    }

    pub fn weights(&self) -> &WeightGrid {
        &self.weights
    }

    pub fn placement(&self) -> &PlacementQueue {
        &self.placement
    }

    /// Where the human has placed ships, across every game of this session.
    pub fn ship_histogram(&self) -> &Histogram {
        &self.ship_histogram
    }

    /// Where the human has fired, across every game of this session.
    pub fn attack_histogram(&self) -> &Histogram {
        &self.attack_histogram
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }
}
