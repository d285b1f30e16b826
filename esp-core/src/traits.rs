//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::Reading;

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    ReadFailed,
}

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    DrawFailed,
}

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Glyph im reservierten Trend-Feld des Displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendGlyph {
    Up,
    Down,
    Equal,
    Blank,
}

/// Trait für den Temperatur-/Feuchte-Sensor
///
/// # Implementierungen
/// - **Production:** DhtSensor (DHT22 am Single-Wire GPIO)
/// - **Testing:** MockSensor (vorgegebene Messwerte)
pub trait ClimateSensor {
    /// Liest eine Messung vom Sensor
    ///
    /// # Fehlerbehandlung
    /// Gibt `SensorError::ReadFailed` zurück wenn die Kommunikation
    /// fehlschlägt. Keine Retries; der Control-Loop entscheidet.
    fn poll(&mut self) -> Result<Reading, SensorError>;
}

/// Trait für die zweizeilige Zeichen-Anzeige
///
/// Koordinaten sind Zeichenzellen (row, col), keine Pixel. Das Trend-Feld
/// liegt fest in der äußersten rechten Spalte über beide Zeilen und wird
/// nur über `draw_trend` angesprochen.
///
/// # Implementierungen
/// - **Production:** OledScreen (SSD1306 über I2C)
/// - **Testing:** MockScreen (zeichnet in den Speicher)
pub trait CharacterScreen {
    /// Schreibt Text ab der angegebenen Zelle
    ///
    /// Der Zellen-Hintergrund wird mitgezeichnet; Überschreiben alter
    /// Inhalte braucht kein vorheriges Löschen.
    fn write_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), ScreenError>;

    /// Zeichnet ein Glyph in das reservierte Trend-Feld
    fn draw_trend(&mut self, glyph: TrendGlyph) -> Result<(), ScreenError>;

    /// Löscht die gesamte Anzeige
    fn clear(&mut self) -> Result<(), ScreenError>;

    /// Überträgt den Framebuffer auf das Panel
    fn flush(&mut self) -> Result<(), ScreenError>;
}

/// Trait für den Helligkeits-Ausgang
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (WS2812 via RMT Peripheral)
/// - **Testing:** MockLed (in-memory Mock)
pub trait IntensityOutput {
    /// Schreibt ein Intensitäts-Level
    ///
    /// `level` kommt unbeschnitten vom Intensity-Mapper und kann außerhalb
    /// von 0..=255 liegen; die Hardware-Implementierung sättigt an ihrer
    /// Grenze.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_level(&mut self, level: i32) -> Result<(), LedError>;
}
