//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Untere Grenze des Temperatur-Eingangsbereichs in °C
pub const TEMP_DOMAIN_MIN: i32 = -40;
/// Obere Grenze des Temperatur-Eingangsbereichs in °C
pub const TEMP_DOMAIN_MAX: i32 = 80;
/// Kleinstes Intensitäts-Level
pub const INTENSITY_MIN: i32 = 0;
/// Größtes Intensitäts-Level
pub const INTENSITY_MAX: i32 = 255;

/// Bildet eine Celsius-Temperatur linear auf ein Intensitäts-Level ab
///
/// Ganzzahlige lineare Interpolation von [-40, 80] nach [0, 255] mit
/// abschneidender Division. Werte außerhalb des Eingangsbereichs werden
/// NICHT begrenzt: die Abbildung extrapoliert, gesättigt wird erst an
/// der Hardware-Grenze.
///
/// # Beispiele
///
/// ```
/// # use esp_core::map_intensity;
/// assert_eq!(map_intensity(-40), 0);
/// assert_eq!(map_intensity(20), 127);
/// assert_eq!(map_intensity(80), 255);
/// ```
pub fn map_intensity(temp_c: i32) -> i32 {
    (temp_c - TEMP_DOMAIN_MIN) * (INTENSITY_MAX - INTENSITY_MIN)
        / (TEMP_DOMAIN_MAX - TEMP_DOMAIN_MIN)
        + INTENSITY_MIN
}

/// Celsius nach Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Fahrenheit nach Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) / 1.8
}

/// Hitzeindex nach der Rothfusz-Regression (NOAA), in Fahrenheit
///
/// Zuerst die einfache gemittelte Näherung; liegt deren Ergebnis über
/// 79 °F, greift die volle Regression samt der beiden Korrekturen für
/// sehr trockene bzw. sehr feuchte Luft.
pub fn heat_index_fahrenheit(temp_f: f32, humidity: f32) -> f32 {
    let mut hi = 0.5 * (temp_f + 61.0 + (temp_f - 68.0) * 1.2 + humidity * 0.094);

    if hi > 79.0 {
        hi = -42.379 + 2.04901523 * temp_f + 10.14333127 * humidity
            - 0.22475541 * temp_f * humidity
            - 0.00683783 * temp_f * temp_f
            - 0.05481717 * humidity * humidity
            + 0.00122874 * temp_f * temp_f * humidity
            + 0.00085282 * temp_f * humidity * humidity
            - 0.00000199 * temp_f * temp_f * humidity * humidity;

        if humidity < 13.0 && (80.0..=112.0).contains(&temp_f) {
            hi -= ((13.0 - humidity) * 0.25)
                * libm::sqrtf((17.0 - libm::fabsf(temp_f - 95.0)) * 0.05882);
        } else if humidity > 85.0 && (80.0..=87.0).contains(&temp_f) {
            hi += ((humidity - 85.0) * 0.1) * ((87.0 - temp_f) * 0.2);
        }
    }

    hi
}
