// DHT22 Sensor-Adapter
//
// Bindet den embedded-dht-rs Treiber an den ClimateSensor-Trait
// aus esp-core.

use embedded_dht_rs::dht22::Dht22;
use esp_core::{ClimateSensor, Reading, SensorError};
use esp_hal::delay::Delay;
use esp_hal::gpio::{DriveMode, Flex, OutputConfig, Pull};

/// DHT22 am Single-Wire GPIO
///
/// Der Pin fährt Open-Drain: der Sensor zieht die Leitung selbst,
/// deshalb sind Output und Input gleichzeitig aktiv.
pub struct DhtSensor<'a> {
    dht: Dht22<Flex<'a>, Delay>,
}

impl<'a> DhtSensor<'a> {
    /// Erstellt den Sensor-Adapter auf dem gegebenen Pin
    pub fn new(pin: Flex<'a>, delay: Delay) -> Self {
        let mut dht_pin = pin;
        let config = OutputConfig::default()
            .with_drive_mode(DriveMode::OpenDrain)
            .with_pull(Pull::None);
        dht_pin.apply_output_config(&config);
        dht_pin.set_output_enable(true);
        dht_pin.set_input_enable(true);
        dht_pin.set_high();

        Self {
            dht: Dht22::new(dht_pin, delay),
        }
    }
}

impl ClimateSensor for DhtSensor<'_> {
    fn poll(&mut self) -> Result<Reading, SensorError> {
        // Timeout- und Checksummen-Fehler fallen auf ReadFailed zusammen;
        // der Control-Loop behandelt alle Lesefehler gleich
        let measurement = self.dht.read().map_err(|_| SensorError::ReadFailed)?;
        Ok(Reading::from_measurement(
            measurement.temperature,
            measurement.humidity,
        ))
    }
}
