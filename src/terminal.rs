#![cfg(feature = "std")]

//! Terminal front end: draws the human's two grids and turns typed commands
//! into selection events.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use rand::Rng;

use crate::common::{GameError, Winner};
use crate::grid::{Coord, Grid};
use crate::session::{Phase, Session};
use crate::surface::{BoardView, CellView, Surface};

const HELP: &str = "Commands: a cell such as B7, `random` to place the remaining ships, \
`new` for a new game, `quit` to exit.";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Coord),
    Random,
    New,
    Help,
    Quit,
}

fn coord_to_string(coord: Coord) -> String {
    format!("{}{}", (b'A' + coord.col as u8) as char, coord.row + 1)
}

/// Parse a cell such as `C4`: column letter, then 1-based row number.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or_else(|| "Empty input".to_string())?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let row: i64 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    let col = (col_ch as u8 - b'A') as i64;
    let off_board = || {
        let last = (b'A' + size.saturating_sub(1) as u8) as char;
        format!("{} is off the board - use A1 to {}{}", input, last, size)
    };
    let row = row.checked_sub(1).ok_or_else(off_board)?;
    Coord::try_new(col, row, size).map_err(|_| off_board())
}

pub fn parse_command(line: &str, size: usize) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "random" | "r" => Ok(Command::Random),
        "new" | "n" => Ok(Command::New),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => parse_coord(other, size).map(Command::Select),
    }
}

/// Mirrors what the core has told it to draw and prints it to `out`.
pub struct TerminalSurface<W: Write> {
    out: W,
    fleet: Grid<Option<CellView>>,
    targets: Grid<Option<CellView>>,
    messages: Vec<String>,
    winner: Option<Winner>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, size: usize) -> Self {
        Self {
            out,
            fleet: Grid::new(size, None),
            targets: Grid::new(size, None),
            messages: Vec::new(),
            winner: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Queue a line for the next render.
    pub fn note(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn print_grid(out: &mut W, title: &str, grid: &Grid<Option<CellView>>) -> io::Result<()> {
        writeln!(out, "{}:", title)?;
        write!(out, "   ")?;
        for c in 0..grid.size() {
            write!(out, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(out)?;
        for r in 0..grid.size() {
            write!(out, "{:2} ", r + 1)?;
            for c in 0..grid.size() {
                let ch = match grid.get(Coord::new(c, r)) {
                    Ok(Some(CellView::Ship)) => 'S',
                    Ok(Some(CellView::Hit)) => 'X',
                    Ok(Some(CellView::Miss)) => 'o',
                    _ => '.',
                };
                write!(out, " {}", ch)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Print both grids followed by any queued messages.
    pub fn render(&mut self) -> io::Result<()> {
        Self::print_grid(&mut self.out, "Target grid", &self.targets)?;
        writeln!(self.out)?;
        Self::print_grid(&mut self.out, "Your fleet", &self.fleet)?;
        for message in self.messages.drain(..) {
            writeln!(self.out, "> {}", message)?;
        }
        if self.winner.is_some() {
            writeln!(self.out, "> Type `new` to play again or `quit` to exit.")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw(&mut self, board: BoardView, coord: Coord, view: CellView) {
        let grid = match board {
            BoardView::Fleet => &mut self.fleet,
            BoardView::Targets => &mut self.targets,
        };
        let _ = grid.set(coord, Some(view));
    }

    fn reset(&mut self, board: BoardView) {
        match board {
            BoardView::Fleet => self.fleet.fill(None),
            BoardView::Targets => self.targets.fill(None),
        }
        self.winner = None;
    }

    fn status(&mut self, message: &str) {
        self.note(message);
    }

    fn game_over(&mut self, winner: Winner) {
        self.winner = Some(winner);
    }
}

/// Read commands from `input` until it ends or the player quits.
pub fn run<R, I, W>(
    session: &mut Session<R>,
    input: I,
    surface: &mut TerminalSurface<W>,
) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let size = session.config().board_size();
    surface.note(HELP);
    surface.render()?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line, size) {
            Err(msg) => surface.note(msg),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => surface.note(HELP),
            Ok(Command::New) => session.new_game(surface)?,
            Ok(Command::Random) => {
                if let Err(e) = session.auto_place_human(surface) {
                    surface.note(e.to_string());
                }
            }
            Ok(Command::Select(coord)) => match session.select_cell(coord, surface) {
                Ok(_) => {
                    if session.phase() == Phase::Battle {
                        log::debug!("fired at {}", coord_to_string(coord));
                    }
                }
                Err(GameError::RepeatedAttack(_)) => {
                    surface.note(format!("You already fired at {}.", coord_to_string(coord)));
                }
                Err(e) => surface.note(e.to_string()),
            },
        }
        surface.render()?;
    }
    Ok(())
}
