// lib.rs - Conway's Game of Life simulation core
//
// Grid model, generation step, and the interaction state machine. Rendering and
// input capture live in the `grid_display` crate.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod layout;
pub mod patterns;
pub mod state;

pub use config::Config;
pub use controller::{Controller, Event, Flow, Screen};
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use layout::CellDimensions;
pub use state::{CellColor, SimulationState, SizePreset, TickRate};
