//! Trend-Indikator State Machine
//!
//! Vergleicht aufeinanderfolgende ganzzahlige Celsius-Werte und erzeugt
//! daraus die Anzeige-Direktive für das Trend-Feld. Der Zyklus-Zähler ist
//! die Uhr: die Blink-Kadenz des "Gleich"-Glyphs hängt an der Anzahl der
//! Polling-Zyklen, nicht an der Wanduhr.

use crate::types::TrendDirective;

/// Ab diesem Zählerstand (exklusiv) wird das "Gleich"-Glyph gezeichnet
pub const BLINK_ON_START: u16 = 100;
/// Bis zu diesem Zählerstand (exklusiv) wird das "Gleich"-Glyph gezeichnet
pub const BLINK_ON_END: u16 = 150;
/// Ab diesem Zählerstand (exklusiv) wird das Glyph ausgeblendet
pub const BLINK_OFF_START: u16 = 200;
/// Oberhalb dieses Zählerstands springt der Zähler auf 0 zurück
/// und die Blink-Kadenz beginnt von vorn
pub const CYCLE_WRAP: u16 = 500;

/// Zustand des Trend-Indikators
///
/// Lebt im Besitz des Control-Loops (keine globalen Variablen) und wird
/// genau einmal pro erfolgreichem Zyklus mutiert. Sensor-Fehler erreichen
/// diesen Zustand nie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendState {
    last_temp: i16,
    steady_cycles: u16,
}

impl TrendState {
    /// Startzustand: letzte Temperatur 0, Zähler 0
    pub const fn new() -> Self {
        Self {
            last_temp: 0,
            steady_cycles: 0,
        }
    }

    /// Verarbeitet einen neuen ganzzahligen Celsius-Wert
    ///
    /// Bei Temperaturänderung wird die Richtung gemeldet und der Zähler
    /// zurückgesetzt. Bei konstanter Temperatur gilt die Dreiteilung mit
    /// asymmetrischen, strikten Grenzen: (100, 150) zeichnet das Glyph,
    /// oberhalb 200 wird ausgeblendet, in den Fenstern [0, 100] und
    /// [150, 200] bleibt die Anzeige unangetastet.
    pub fn update(&mut self, current: i16) -> TrendDirective {
        if current < self.last_temp {
            self.last_temp = current;
            self.steady_cycles = 0;
            return TrendDirective::Down;
        }
        if current > self.last_temp {
            self.last_temp = current;
            self.steady_cycles = 0;
            return TrendDirective::Up;
        }

        // Wrap vor der Fallunterscheidung: startet die Blink-Kadenz neu
        // und hält den Zähler beschränkt
        if self.steady_cycles > CYCLE_WRAP {
            self.steady_cycles = 0;
        }

        let directive = if self.steady_cycles > BLINK_ON_START && self.steady_cycles < BLINK_ON_END
        {
            TrendDirective::SteadyBlinkOn
        } else if self.steady_cycles > BLINK_OFF_START {
            TrendDirective::SteadyBlinkOff
        } else {
            TrendDirective::NoChange
        };

        self.steady_cycles += 1;
        directive
    }

    /// Zuletzt gespeicherte ganzzahlige Celsius-Temperatur
    pub fn last_temp(&self) -> i16 {
        self.last_temp
    }

    /// Aktueller Zählerstand der Konstant-Zyklen
    pub fn steady_cycles(&self) -> u16 {
        self.steady_cycles
    }
}

impl Default for TrendState {
    fn default() -> Self {
        Self::new()
    }
}
