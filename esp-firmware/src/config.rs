// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// GPIO-Pin für die DHT22 Datenleitung (Single-Wire, Open-Drain)
pub const DHT_GPIO_PIN: u8 = 4;

/// Abtast-Intervall in Millisekunden
///
/// Einzige Zeitbasis des Control-Loops: ein Polling-Zyklus pro Intervall.
/// Die Blink-Kadenz des Trend-Indikators zählt Zyklen, keine Wanduhr;
/// bei 250 ms liegt die Periode von ~500 Zyklen bei gut zwei Minuten.
pub const SAMPLE_INTERVAL_MS: u64 = 250;

// ============================================================================
// Display Konfiguration
// ============================================================================

/// I2C SDA-Pin für das SSD1306 OLED
pub const DISPLAY_SDA_PIN: u8 = 6;

/// I2C SCL-Pin für das SSD1306 OLED
pub const DISPLAY_SCL_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz (Fast Mode)
pub const DISPLAY_I2C_KHZ: u32 = 400;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;
