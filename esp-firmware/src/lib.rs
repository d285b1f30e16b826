// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    CharacterScreen, ClimateMonitor, ClimateSensor, CycleOutcome, IntensityOutput, Reading,
    TrendDirective, TrendGlyph,
};
