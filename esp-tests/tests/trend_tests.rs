//! Integration Tests für Trend-Indikator und Intensity Mapper
//!
//! Diese Tests laufen auf dem Host (x86_64) und brauchen keine Hardware

use esp_core::trend::{BLINK_OFF_START, BLINK_ON_END, BLINK_ON_START, CYCLE_WRAP};
use esp_core::{TrendDirective, TrendState, map_intensity};

// ============================================================================
// Tests: TrendState
// ============================================================================

#[test]
fn test_first_sample_above_zero_reports_up() {
    // Startzustand ist {0, 0}: die erste Messung eines warmen Raums
    // meldet einmal Up
    let mut state = TrendState::new();
    assert_eq!(state.update(20), TrendDirective::Up);
    assert_eq!(state.last_temp(), 20);
}

#[test]
fn test_strictly_increasing_emits_only_up() {
    let mut state = TrendState::new();
    for temp in [1, 3, 4, 9, 15, 23, 40] {
        assert_eq!(state.update(temp), TrendDirective::Up);
        assert_eq!(state.steady_cycles(), 0);
    }
}

#[test]
fn test_strictly_decreasing_emits_only_down() {
    let mut state = TrendState::new();
    for temp in [-2, -5, -9, -14, -30] {
        assert_eq!(state.update(temp), TrendDirective::Down);
        assert_eq!(state.steady_cycles(), 0);
    }
}

#[test]
fn test_steady_directive_boundaries() {
    let mut state = TrendState::new();
    state.update(20); // Zustand auf 20 setzen, Zähler 0

    let mut at = |count: u16| {
        // Zähler bis zum gewünschten Stand vorspulen
        while state.steady_cycles() < count {
            state.update(20);
        }
        assert_eq!(state.steady_cycles(), count);
        state.update(20)
    };

    assert_eq!(at(100), TrendDirective::NoChange);
    assert_eq!(at(101), TrendDirective::SteadyBlinkOn);
    assert_eq!(at(149), TrendDirective::SteadyBlinkOn);
    assert_eq!(at(150), TrendDirective::NoChange);
    assert_eq!(at(200), TrendDirective::NoChange);
    assert_eq!(at(201), TrendDirective::SteadyBlinkOff);
}

#[test]
fn test_wrap_restarts_blink_pattern() {
    let mut state = TrendState::new();
    state.update(20);

    // Erste Periode aufzeichnen: Zählerstände 0..=500
    let first: Vec<TrendDirective> = (0..=CYCLE_WRAP).map(|_| state.update(20)).collect();
    assert_eq!(state.steady_cycles(), 501);

    // Wrap-Zyklus: Zähler springt auf 0, danach läuft er ab 1
    assert_eq!(state.update(20), TrendDirective::NoChange);
    assert_eq!(state.steady_cycles(), 1);

    let second: Vec<TrendDirective> = (1..=CYCLE_WRAP).map(|_| state.update(20)).collect();
    assert_eq!(first[1..], second[..]);
}

#[test]
fn test_blink_window_lengths() {
    let mut state = TrendState::new();
    state.update(20);

    let directives: Vec<TrendDirective> = (0..=CYCLE_WRAP).map(|_| state.update(20)).collect();

    let on = directives
        .iter()
        .filter(|d| **d == TrendDirective::SteadyBlinkOn)
        .count();
    let off = directives
        .iter()
        .filter(|d| **d == TrendDirective::SteadyBlinkOff)
        .count();

    // (100, 150) exklusiv: 49 Zyklen an; (200, 500]: 300 Zyklen aus
    assert_eq!(on, usize::from(BLINK_ON_END - BLINK_ON_START) - 1);
    assert_eq!(off, usize::from(CYCLE_WRAP - BLINK_OFF_START));
}

#[test]
fn test_scenario_reset_on_change() {
    let mut state = TrendState::new();
    state.update(20);

    let got: Vec<TrendDirective> = [20, 20, 21, 21, 20]
        .iter()
        .map(|t| state.update(*t))
        .collect();

    assert_eq!(
        got,
        [
            TrendDirective::NoChange,
            TrendDirective::NoChange,
            TrendDirective::Up,
            TrendDirective::NoChange,
            TrendDirective::Down,
        ]
    );
    assert_eq!(state.steady_cycles(), 0);
    assert_eq!(state.last_temp(), 20);
}

// ============================================================================
// Tests: map_intensity()
// ============================================================================

#[test]
fn test_map_intensity_endpoints() {
    assert_eq!(map_intensity(-40), 0);
    assert_eq!(map_intensity(80), 255);
}

#[test]
fn test_map_intensity_midpoint() {
    assert_eq!(map_intensity(20), 127);
}

#[test]
fn test_map_intensity_idempotent() {
    for temp in [-40, -7, 0, 20, 33, 80] {
        assert_eq!(map_intensity(temp), map_intensity(temp));
    }
}

#[test]
fn test_map_intensity_unclamped_extrapolation() {
    assert!(map_intensity(-60) < 0);
    assert!(map_intensity(120) > 255);
}
