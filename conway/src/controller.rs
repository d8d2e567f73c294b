// controller.rs - Interaction state machine between user input and the grid
//
// The controller is the only mutator of the Grid and the SimulationState. The
// display loop feeds it events once per iteration via `frame` and renders
// whatever screen it reports afterwards.

use log::{debug, info, warn};

use crate::config::Config;
use crate::engine;
use crate::error::GridError;
use crate::grid::Grid;
use crate::layout::CellDimensions;
use crate::patterns;
use crate::state::{CellColor, SimulationState, SizePreset, TickRate};

/// Which screen the application is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Start,
    Info,
    Simulating,
    MenuRoot,
    MenuFps,
    MenuSize,
    MenuColor,
}

impl Screen {
    pub fn is_menu(self) -> bool {
        matches!(self, Screen::MenuRoot | Screen::MenuFps | Screen::MenuSize | Screen::MenuColor)
    }
}

/// Input already interpreted by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Leave the start or info screen
    Confirm,
    Quit,
    ToggleRun,
    Reset,
    StepOnce,
    OpenMenu,
    /// Back to the parent screen
    CloseMenu,
    SelectFps,
    SelectSize,
    SelectColor,
    PickFps(TickRate),
    PickSize(SizePreset),
    PickColor(CellColor),
    /// Primary click in pixels relative to the grid's top-left corner
    PointerToggle { x: f32, y: f32 },
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller {
    screen: Screen,
    grid: Grid,
    state: SimulationState,
    display: (u32, u32),
    cells: CellDimensions,
    terminated: bool,
}

impl Controller {
    /// Builds the startup grid from the configured preset and optional seed pattern
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let (rows, cols) = config.simulation.grid_size.dimensions();
        let mut grid = Grid::new(rows, cols)?;

        if let Some(name) = &config.simulation.initial_pattern {
            match patterns::find(name) {
                Some(pattern) => {
                    let placed = pattern.place_centered(&mut grid);
                    info!("Seeded grid with '{}' ({} cells)", pattern.name, placed);
                }
                None => warn!("Unknown pattern '{}', starting empty", name),
            }
        }

        let display = (config.display.width, config.display.height);
        Ok(Self {
            screen: Screen::Start,
            cells: CellDimensions::from_display(display.0, display.1, rows, cols),
            grid,
            state: SimulationState::new(config.simulation.tick_rate, config.simulation.cell_color),
            display,
            terminated: false,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn cell_dimensions(&self) -> CellDimensions {
        self.cells
    }

    /// (width, height) of the display surface
    pub fn display(&self) -> (u32, u32) {
        self.display
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// One loop iteration: apply events in order, then step once if a tick is due.
    /// Events after a quit are discarded and no step is taken.
    pub fn frame<I>(&mut self, events: I, tick_due: bool) -> Flow
    where
        I: IntoIterator<Item = Event>,
    {
        if self.terminated {
            return Flow::Quit;
        }
        for event in events {
            if self.handle(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        if tick_due {
            self.tick();
        }
        Flow::Continue
    }

    /// Applies a single event to the state machine
    pub fn handle(&mut self, event: Event) -> Flow {
        if self.terminated {
            return Flow::Quit;
        }

        use Screen::*;
        match (self.screen, event) {
            (_, Event::Quit) => {
                info!("Quit requested on {:?} at generation {}", self.screen, self.state.generation);
                self.terminated = true;
                return Flow::Quit;
            }

            (Start, Event::Confirm) => self.enter(Info),
            (Info, Event::Confirm) => self.enter(Simulating),

            (Simulating, Event::ToggleRun) => {
                self.state.running = !self.state.running;
                info!("{} at generation {}", if self.state.running { "Running" } else { "Paused" }, self.state.generation);
            }
            (Simulating, Event::Reset) => {
                let (rows, cols) = self.grid.dimensions();
                self.replace_grid(rows, cols);
            }
            (Simulating, Event::StepOnce) => self.advance(),
            (Simulating, Event::OpenMenu) => self.enter(MenuRoot),
            (Simulating, Event::PointerToggle { x, y }) => self.pointer_toggle(x, y),

            (MenuRoot, Event::SelectFps) => self.enter(MenuFps),
            (MenuRoot, Event::SelectSize) => self.enter(MenuSize),
            (MenuRoot, Event::SelectColor) => self.enter(MenuColor),
            (MenuRoot, Event::CloseMenu) => self.enter(Simulating),

            (MenuFps, Event::PickFps(rate)) => {
                self.state.tick_rate = rate;
                info!("Tick rate set to {}", rate.per_second());
                self.enter(MenuRoot);
            }
            (MenuSize, Event::PickSize(preset)) => {
                let (rows, cols) = preset.dimensions();
                info!("Grid size set to {}", preset.name());
                self.replace_grid(rows, cols);
                self.enter(MenuRoot);
            }
            (MenuColor, Event::PickColor(color)) => {
                self.state.cell_color = color;
                info!("Cell color set to {}", color.name());
                self.enter(MenuRoot);
            }
            (MenuFps | MenuSize | MenuColor, Event::CloseMenu) => self.enter(MenuRoot),

            (screen, event) => debug!("Ignoring {:?} on {:?}", event, screen),
        }
        Flow::Continue
    }

    /// Per-tick auto-advance; menus suspend stepping without clearing `running`
    pub fn tick(&mut self) {
        if !self.terminated && self.state.running && self.screen == Screen::Simulating {
            self.advance();
        }
    }

    /// Replaces the grid with an empty one of any positive size.
    /// On `InvalidDimension` the current grid is kept.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        let grid = self.grid.resize(rows, cols)?;
        self.install(grid);
        Ok(())
    }

    fn replace_grid(&mut self, rows: usize, cols: usize) {
        if let Err(e) = self.resize(rows, cols) {
            warn!("Keeping current grid: {}", e);
        }
    }

    fn install(&mut self, grid: Grid) {
        let (rows, cols) = grid.dimensions();
        self.grid = grid;
        self.cells = CellDimensions::from_display(self.display.0, self.display.1, rows, cols);
        self.state.generation = 0;
        info!(
            "Fresh {}x{} grid, cells {}x{} px",
            rows, cols, self.cells.cell_width, self.cells.cell_height
        );
    }

    fn advance(&mut self) {
        self.grid = engine::step(&self.grid);
        self.state.generation += 1;
        debug!("Generation {}: {} live", self.state.generation, self.grid.live_count());
    }

    fn pointer_toggle(&mut self, x: f32, y: f32) {
        if self.state.running {
            debug!("Dropping pointer toggle at ({}, {}) while running", x, y);
            return;
        }
        let Some((row, col)) = self.cells.cell_at(x, y) else {
            debug!("Pointer ({}, {}) is outside the grid", x, y);
            return;
        };
        match self.grid.toggle(row, col) {
            Ok(alive) => debug!("Cell ({}, {}) -> {}", row, col, alive),
            Err(e) => warn!("Ignoring toggle: {}", e),
        }
    }

    fn enter(&mut self, next: Screen) {
        debug!("{:?} -> {:?}", self.screen, next);
        self.screen = next;
    }
}
