// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul bindet die reale Hardware an die Traits aus esp-core,
// damit der Control-Loop ohne Hardware getestet werden kann.

pub mod dht_sensor;
pub mod led_writer;
pub mod oled_screen;

pub use dht_sensor::DhtSensor;
pub use led_writer::RmtLedWriter;
pub use oled_screen::OledScreen;
