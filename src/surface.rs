//! The boundary between the game core and whatever draws it.
//!
//! The core never asks a surface for state. It only announces changes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::Winner;
use crate::grid::Coord;

/// Which of the human's two grids a change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum BoardView {
    /// The human's own ships, attacked by the computer.
    Fleet,
    /// The human's shots at the computer's board.
    Targets,
}

/// How a cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    Ship,
    Hit,
    Miss,
}

/// Receiver of render intents and status messages. All methods default to no-ops.
pub trait Surface {
    /// Draw `view` at `coord` on `board`.
    fn draw(&mut self, _board: BoardView, _coord: Coord, _view: CellView) {}

    /// Clear a grid back to blank water.
    fn reset(&mut self, _board: BoardView) {}

    /// Short human-readable announcement.
    fn status(&mut self, _message: &str) {}

    /// Final notification of a game.
    fn game_over(&mut self, _winner: Winner) {}
}

/// A surface that ignores everything.
impl Surface for () {}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Draw {
        board: BoardView,
        coord: Coord,
        view: CellView,
    },
    Reset(BoardView),
    Status(String),
    GameOver(Winner),
}

impl Surface for Vec<SurfaceEvent> {
    fn draw(&mut self, board: BoardView, coord: Coord, view: CellView) {
        self.push(SurfaceEvent::Draw { board, coord, view });
    }

    fn reset(&mut self, board: BoardView) {
        self.push(SurfaceEvent::Reset(board));
    }

    fn status(&mut self, message: &str) {
        self.push(SurfaceEvent::Status(String::from(message)));
    }

    fn game_over(&mut self, winner: Winner) {
        self.push(SurfaceEvent::GameOver(winner));
    }
}
