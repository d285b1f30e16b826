//! Core Types für den Klima-Monitor
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::logic::{celsius_to_fahrenheit, fahrenheit_to_celsius, heat_index_fahrenheit};

/// Eine einzelne Sensor-Messung mit abgeleiteten Werten
///
/// Wird einmal pro erfolgreichem Poll erzeugt und ist unveränderlich.
/// Über Zyklen hinweg überlebt nur die ganzzahlige Celsius-Temperatur
/// im Trend-Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature_celsius: f32,
    pub temperature_fahrenheit: f32,
    pub humidity_percent: f32,
    pub heat_index_celsius: f32,
    pub heat_index_fahrenheit: f32,
}

impl Reading {
    /// Erstellt ein Reading aus den Rohwerten des Sensors
    ///
    /// Fahrenheit und Hitzeindex werden hier abgeleitet, damit der
    /// Sensor-Adapter nur Celsius und Luftfeuchte liefern muss.
    pub fn from_measurement(temperature_celsius: f32, humidity_percent: f32) -> Self {
        let temperature_fahrenheit = celsius_to_fahrenheit(temperature_celsius);
        let heat_index_f = heat_index_fahrenheit(temperature_fahrenheit, humidity_percent);
        Self {
            temperature_celsius,
            temperature_fahrenheit,
            humidity_percent,
            heat_index_celsius: fahrenheit_to_celsius(heat_index_f),
            heat_index_fahrenheit: heat_index_f,
        }
    }
}

/// Anzeige-Direktive des Trend-Indikators
///
/// Ergebnis des Vergleichs der neuen ganzzahligen Celsius-Temperatur
/// mit dem zuletzt gespeicherten Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirective {
    /// Temperatur ist gestiegen
    Up,
    /// Temperatur ist gefallen
    Down,
    /// Temperatur konstant: "Gleich"-Glyph anzeigen
    SteadyBlinkOn,
    /// Temperatur konstant: Glyph ausblenden
    SteadyBlinkOff,
    /// Anzeige unverändert lassen
    NoChange,
}

/// Ergebnis eines Polling-Zyklus
///
/// Wird vom Task für das Logging ausgewertet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Messung erfolgreich: Anzeige und LED wurden aktualisiert
    Sampled {
        reading: Reading,
        directive: TrendDirective,
        intensity: i32,
    },
    /// Sensor-Lesefehler: Fehleranzeige getoggelt, Trend und LED übersprungen
    SensorFailed,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Reading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Reading {{ temp: {} °C / {} °F, humidity: {} %, heat index: {} °C / {} °F }}",
            self.temperature_celsius,
            self.temperature_fahrenheit,
            self.humidity_percent,
            self.heat_index_celsius,
            self.heat_index_fahrenheit
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TrendDirective {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            TrendDirective::Up => "Up",
            TrendDirective::Down => "Down",
            TrendDirective::SteadyBlinkOn => "SteadyBlinkOn",
            TrendDirective::SteadyBlinkOff => "SteadyBlinkOff",
            TrendDirective::NoChange => "NoChange",
        };
        defmt::write!(fmt, "{}", name)
    }
}
