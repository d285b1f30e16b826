// Climate Task - Steuert den Polling-Zyklus des Klima-Monitors
use defmt::{Debug2Format, debug, error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::delay::Delay;
use esp_hal::gpio::Flex;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal_smartled::smart_led_buffer;
use ssd1306::I2CDisplayInterface;

use esp_core::{CharacterScreen, ClimateMonitor, ClimateSensor, CycleOutcome, IntensityOutput};

use crate::config::{DISPLAY_I2C_KHZ, RMT_CLOCK_MHZ, SAMPLE_INTERVAL_MS};
use crate::hal::{DhtSensor, OledScreen, RmtLedWriter};

/// Control-Loop - Testbare Logik ohne konkrete Hardware
///
/// Ein Polling-Zyklus pro Intervall: Messung → Trend-Update → Anzeige →
/// Intensitäts-Mapping → LED. Die eigentliche Zyklus-Logik lebt in
/// [`ClimateMonitor`]; hier passiert nur Takt und Logging.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (DhtSensor, OledScreen, RmtLedWriter) im Production-Code
/// - Mock Implementierungen in den Host-Tests (esp-tests)
pub async fn climate_loop<S, D, L>(mut sensor: S, mut screen: D, mut led: L) -> !
where
    S: ClimateSensor,
    D: CharacterScreen,
    L: IntensityOutput,
{
    let mut monitor = ClimateMonitor::new();

    loop {
        match monitor.run_cycle(&mut sensor, &mut screen, &mut led) {
            Ok(CycleOutcome::Sampled {
                reading,
                directive,
                intensity,
            }) => {
                info!(
                    "Humidity: {} %  Temperature: {} °C / {} °F  Heat index: {} °C / {} °F",
                    reading.humidity_percent,
                    reading.temperature_celsius,
                    reading.temperature_fahrenheit,
                    reading.heat_index_celsius,
                    reading.heat_index_fahrenheit
                );
                debug!("Trend: {}  LED level: {}", directive, intensity);
            }
            Ok(CycleOutcome::SensorFailed) => {
                warn!("Failed to read from DHT sensor");
            }
            Err(_e) => {
                error!("Failed to update display or LED");
            }
        }

        // Feste Zykluspause: einzige Zeitbasis des Control-Loops
        Timer::after(Duration::from_millis(SAMPLE_INTERVAL_MS)).await;
    }
}

/// Climate Task - Embassy Task für den Control-Loop
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `climate_loop()` Funktion auf.
///
/// # Parameter
/// - `dht_pin`: GPIO4 Peripheral für die DHT22 Datenleitung
/// - `i2c0`: I2C0 Peripheral für das OLED
/// - `sda`/`scl`: GPIO6/GPIO7 für den I2C-Bus
/// - `rmt_peripheral`: RMT Peripheral für das LED-Timing
/// - `led_pin`: GPIO8 Peripheral für die WS2812 Datenleitung
#[embassy_executor::task]
pub async fn climate_task(
    dht_pin: esp_hal::peripherals::GPIO4<'static>,
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    led_pin: esp_hal::peripherals::GPIO8<'static>,
) {
    // DHT22: Open-Drain Pin + blocking Delay (Single-Wire Timing)
    let sensor = DhtSensor::new(Flex::new(dht_pin), Delay::new());

    // I2C für das OLED (400 kHz Fast Mode)
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ));
    let i2c = match I2c::new(i2c0, i2c_config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl),
        Err(e) => {
            error!("I2C init failed: {}", Debug2Format(&e));
            return;
        }
    };

    let screen = match OledScreen::new(I2CDisplayInterface::new(i2c)) {
        Ok(screen) => screen,
        Err(_e) => {
            error!("Display init failed");
            return;
        }
    };

    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);
    let led = RmtLedWriter::new(led_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    info!("Climate monitor running");
    climate_loop(sensor, screen, led).await
}
