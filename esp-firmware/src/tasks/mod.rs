// Task-Modul: Enthält den Embassy Task des Control-Loops
//
// Es gibt genau einen Task; Sensor, Display und LED gehören ihm
// exklusiv, Channels werden nicht gebraucht.

pub mod climate;

// Re-export für einfachen Import
pub use climate::climate_task;
