// state.rs - Simulation settings and their closed option sets

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generations per second while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TickRate {
    Fps15,
    Fps30,
    Fps60,
}

impl TickRate {
    pub const ALL: [TickRate; 3] = [TickRate::Fps15, TickRate::Fps30, TickRate::Fps60];

    pub fn per_second(self) -> u32 {
        match self {
            TickRate::Fps15 => 15,
            TickRate::Fps30 => 30,
            TickRate::Fps60 => 60,
        }
    }

    /// Time between two ticks
    pub fn interval(self) -> Duration {
        Duration::from_secs(1) / self.per_second()
    }
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::Fps30
    }
}

impl TryFrom<u32> for TickRate {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(TickRate::Fps15),
            30 => Ok(TickRate::Fps30),
            60 => Ok(TickRate::Fps60),
            other => Err(format!("unsupported tick rate {}, expected 15, 30 or 60", other)),
        }
    }
}

impl From<TickRate> for u32 {
    fn from(rate: TickRate) -> Self {
        rate.per_second()
    }
}

/// Palette for live cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellColor {
    Black,
    Green,
    Blue,
    Red,
}

impl CellColor {
    pub const ALL: [CellColor; 4] = [CellColor::Black, CellColor::Green, CellColor::Blue, CellColor::Red];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            CellColor::Black => (0, 0, 0),
            CellColor::Green => (0, 255, 0),
            CellColor::Blue  => (50, 50, 255),
            CellColor::Red   => (220, 20, 60),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellColor::Black => "BLACK",
            CellColor::Green => "GREEN",
            CellColor::Blue  => "BLUE",
            CellColor::Red   => "RED",
        }
    }
}

impl Default for CellColor {
    fn default() -> Self {
        CellColor::Black
    }
}

/// Grid size presets offered by the size menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Normal,
    Big,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Small, SizePreset::Normal, SizePreset::Big];

    /// (rows, cols)
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            SizePreset::Small  => (30, 40),
            SizePreset::Normal => (60, 80),
            SizePreset::Big    => (125, 150),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizePreset::Small  => "small",
            SizePreset::Normal => "normal",
            SizePreset::Big    => "big",
        }
    }
}

impl Default for SizePreset {
    fn default() -> Self {
        SizePreset::Small
    }
}

/// Run flag plus presentation settings. None of these affect step results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationState {
    pub running: bool,
    pub tick_rate: TickRate,
    pub cell_color: CellColor,
    /// Steps taken since the last reset or resize
    pub generation: u64,
}

impl SimulationState {
    pub fn new(tick_rate: TickRate, cell_color: CellColor) -> Self {
        Self { running: false, tick_rate, cell_color, generation: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_settings() {
        let state = SimulationState::default();
        assert!(!state.running);
        assert_eq!(state.tick_rate, TickRate::Fps30);
        assert_eq!(state.cell_color, CellColor::Black);
        assert_eq!(state.generation, 0);
        assert_eq!(SizePreset::default().dimensions(), (30, 40));
    }

    #[test]
    fn tick_rate_conversions() {
        assert_eq!(TickRate::try_from(60), Ok(TickRate::Fps60));
        assert!(TickRate::try_from(45).is_err());
        assert_eq!(u32::from(TickRate::Fps15), 15);
        assert_eq!(TickRate::Fps60.interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn palette_values() {
        assert_eq!(CellColor::Black.rgb(), (0, 0, 0));
        assert_eq!(CellColor::Green.rgb(), (0, 255, 0));
        assert_eq!(CellColor::Blue.rgb(), (50, 50, 255));
        assert_eq!(CellColor::Red.rgb(), (220, 20, 60));
    }

    #[test]
    fn preset_dimensions() {
        assert_eq!(SizePreset::Small.dimensions(), (30, 40));
        assert_eq!(SizePreset::Normal.dimensions(), (60, 80));
        assert_eq!(SizePreset::Big.dimensions(), (125, 150));
    }
}
