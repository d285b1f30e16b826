//! Control-Loop-Kern: ein Polling-Zyklus
//!
//! Hardware-unabhängig über die Traits in [`crate::traits`], damit der
//! komplette Zyklus auf dem Host mit Mock-Adaptern getestet werden kann.
//! Die Reihenfolge pro Zyklus: Messung → Trend-Update → Anzeige →
//! Intensitäts-Mapping → LED. Bei Sensor-Fehler wird der Zyklus
//! kurzgeschlossen und nur die Fehleranzeige getoggelt.

use core::fmt::Write;

use heapless::String;

use crate::logic::map_intensity;
use crate::traits::{
    CharacterScreen, ClimateSensor, IntensityOutput, LedError, ScreenError, TrendGlyph,
};
use crate::trend::TrendState;
use crate::types::{CycleOutcome, TrendDirective};

/// Beschriftung in Zeile 0
const LABEL_TEXT: &str = "Temperature";
/// Fehleranzeige, Zeile 0 und 1
const FAILURE_LINE_0: &str = "Failed to";
const FAILURE_LINE_1: &str = "read sensor";
/// Breite des Wertefelds in Zeichen; Spalte 15 gehört dem Trend-Glyph
const VALUE_FIELD_WIDTH: usize = 15;

/// Fehler aus einem Zyklus (Display oder LED)
///
/// Sensor-Fehler sind KEIN Fehler des Zyklus: sie werden über die
/// Fehleranzeige behandelt und als [`CycleOutcome::SensorFailed`] gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    Screen(ScreenError),
    Led(LedError),
}

impl From<ScreenError> for CycleError {
    fn from(e: ScreenError) -> Self {
        CycleError::Screen(e)
    }
}

impl From<LedError> for CycleError {
    fn from(e: LedError) -> Self {
        CycleError::Led(e)
    }
}

/// Zyklus-Runner: besitzt den Trend-Zustand und den Fehleranzeige-Toggle
///
/// Genau ein Exemplar pro Control-Loop; der Zustand startet bei jedem
/// Boot wieder bei null.
pub struct ClimateMonitor {
    trend: TrendState,
    show_failure_message: bool,
}

impl ClimateMonitor {
    pub const fn new() -> Self {
        Self {
            trend: TrendState::new(),
            show_failure_message: true,
        }
    }

    /// Führt einen Polling-Zyklus aus
    ///
    /// Display- und LED-Schreibfehler brechen den Zyklus ab und werden
    /// nach oben gereicht; der nächste Zyklus läuft normal weiter.
    pub fn run_cycle<S, D, L>(
        &mut self,
        sensor: &mut S,
        screen: &mut D,
        led: &mut L,
    ) -> Result<CycleOutcome, CycleError>
    where
        S: ClimateSensor,
        D: CharacterScreen,
        L: IntensityOutput,
    {
        let reading = match sensor.poll() {
            Ok(reading) => reading,
            Err(_) => {
                // Fehler-Blink: abwechselnd Meldung und leerer Schirm.
                // Trend-Zustand und LED bleiben unangetastet.
                screen.clear()?;
                if self.show_failure_message {
                    screen.write_text(0, 0, FAILURE_LINE_0)?;
                    screen.write_text(1, 0, FAILURE_LINE_1)?;
                }
                self.show_failure_message = !self.show_failure_message;
                screen.flush()?;
                return Ok(CycleOutcome::SensorFailed);
            }
        };

        let temp_c = reading.temperature_celsius as i16;
        let directive = self.trend.update(temp_c);

        screen.write_text(0, 0, LABEL_TEXT)?;

        let mut line: String<32> = String::new();
        let _ = write!(
            line,
            "{}°C {}°F",
            temp_c, reading.temperature_fahrenheit as i16
        );
        // Mit Leerzeichen bis zur Glyph-Spalte auffüllen: überschreibt
        // Reste der Fehleranzeige und längerer Werte
        while line.chars().count() < VALUE_FIELD_WIDTH {
            let _ = line.push(' ');
        }
        screen.write_text(1, 0, line.as_str())?;

        match directive {
            TrendDirective::Up => screen.draw_trend(TrendGlyph::Up)?,
            TrendDirective::Down => screen.draw_trend(TrendGlyph::Down)?,
            TrendDirective::SteadyBlinkOn => screen.draw_trend(TrendGlyph::Equal)?,
            TrendDirective::SteadyBlinkOff => screen.draw_trend(TrendGlyph::Blank)?,
            TrendDirective::NoChange => {}
        }

        screen.flush()?;

        let intensity = map_intensity(i32::from(temp_c));
        led.set_level(intensity)?;

        Ok(CycleOutcome::Sampled {
            reading,
            directive,
            intensity,
        })
    }

    /// Lesezugriff auf den Trend-Zustand (für Diagnose)
    pub fn trend(&self) -> &TrendState {
        &self.trend
    }
}

impl Default for ClimateMonitor {
    fn default() -> Self {
        Self::new()
    }
}
