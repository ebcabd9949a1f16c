#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod grid;
pub mod heuristic;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod sim;
pub mod surface;
#[cfg(feature = "std")]
pub mod terminal;
mod turn;

pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
pub use heuristic::{Histogram, WeightGrid, BASE_WEIGHT};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{PlacementQueue, PlacementState, PlacementStep};
pub use session::*;
pub use ship::*;
pub use surface::{BoardView, CellView, Surface, SurfaceEvent};
pub use turn::*;
