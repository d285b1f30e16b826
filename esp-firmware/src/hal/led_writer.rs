// Intensitäts-Ausgang über die SmartLED
//
// Die Onboard WS2812 dient als Helligkeits-Anzeige: das Intensitäts-Level
// des Mappers wird als Graustufe auf alle drei Farbkanäle gelegt.

use esp_core::{IntensityOutput, LedError};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// LED Writer auf dem RMT Peripheral
///
/// Nutzt das ESP32 RMT Peripheral um die WS2812 anzusteuern.
///
/// Hinweis: Der Buffer muss den Writer überleben, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl IntensityOutput for RmtLedWriter<'_> {
    fn set_level(&mut self, level: i32) -> Result<(), LedError> {
        // Der Mapper extrapoliert außerhalb von [-40, 80] °C; hier ist die
        // Hardware-Grenze, also sättigen statt den u8 überlaufen zu lassen
        let value = level.clamp(0, 255) as u8;
        let color = RGB8 {
            r: value,
            g: value,
            b: value,
        };

        self.led
            .write([color].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
