//! Press tracking for the force-sensitive-resistor panel.
//!
//! Each sensor compares its latest reading against a per-sensor threshold:
//! reaching the threshold presses the sensor, dropping below the threshold
//! minus a small hysteresis releases it. The hysteresis keeps a reading that
//! hovers at the threshold from chattering between states.

use crate::config::{ADC_MAX, DEFAULT_THRESHOLD, NUM_SENSORS, THRESHOLD_HYSTERESIS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SensorEvent {
    Pressed(usize),
    Released(usize),
}

#[derive(Copy, Clone)]
struct SensorState {
    threshold: u16,
    pressed: bool,
}

pub struct FsrPanel {
    values: [u16; NUM_SENSORS],
    states: [SensorState; NUM_SENSORS],
}

impl FsrPanel {
    pub fn new() -> Self {
        Self {
            values: [0; NUM_SENSORS],
            states: [SensorState {
                threshold: DEFAULT_THRESHOLD,
                pressed: false,
            }; NUM_SENSORS],
        }
    }

    /// Record a fresh reading for one sensor. Returns the press or release
    /// transition it caused, if any.
    pub fn update(&mut self, index: usize, value: u16) -> Option<SensorEvent> {
        if index >= NUM_SENSORS {
            return None;
        }

        self.values[index] = value;
        let state = &mut self.states[index];

        if !state.pressed && value >= state.threshold {
            state.pressed = true;
            return Some(SensorEvent::Pressed(index));
        }

        if state.pressed && value < state.threshold.saturating_sub(THRESHOLD_HYSTERESIS) {
            state.pressed = false;
            return Some(SensorEvent::Released(index));
        }

        None
    }

    pub fn values(&self) -> &[u16; NUM_SENSORS] {
        &self.values
    }

    pub fn thresholds(&self) -> [u16; NUM_SENSORS] {
        let mut out = [0; NUM_SENSORS];
        for (slot, state) in out.iter_mut().zip(self.states.iter()) {
            *slot = state.threshold;
        }
        out
    }

    /// Set one sensor's threshold, clamped to the 10-bit range. Out-of-range
    /// indices are ignored; the command parser never produces one.
    pub fn set_threshold(&mut self, index: usize, value: u16) {
        if index < NUM_SENSORS {
            self.states[index].threshold = value.min(ADC_MAX);
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.states.iter().any(|state| state.pressed)
    }
}

impl Default for FsrPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_thresholds_and_nothing_pressed() {
        let panel = FsrPanel::new();
        assert_eq!(panel.thresholds(), [DEFAULT_THRESHOLD; NUM_SENSORS]);
        assert!(!panel.any_pressed());
        assert_eq!(*panel.values(), [0; NUM_SENSORS]);
    }

    #[test]
    fn press_fires_once_at_threshold() {
        let mut panel = FsrPanel::new();
        panel.set_threshold(0, 500);

        assert_eq!(panel.update(0, 499), None);
        assert_eq!(panel.update(0, 500), Some(SensorEvent::Pressed(0)));
        // Still above threshold: no repeat event
        assert_eq!(panel.update(0, 700), None);
        assert!(panel.any_pressed());
    }

    #[test]
    fn release_needs_hysteresis_margin() {
        let mut panel = FsrPanel::new();
        panel.set_threshold(1, 500);
        panel.update(1, 600);

        // Inside the hysteresis band: still pressed
        assert_eq!(panel.update(1, 495), None);
        assert_eq!(panel.update(1, 490), None);
        // Below threshold - hysteresis: released
        assert_eq!(panel.update(1, 489), Some(SensorEvent::Released(1)));
        assert!(!panel.any_pressed());
    }

    #[test]
    fn sensors_track_independently() {
        let mut panel = FsrPanel::new();
        panel.set_threshold(0, 100);
        panel.set_threshold(3, 100);

        assert_eq!(panel.update(0, 200), Some(SensorEvent::Pressed(0)));
        assert_eq!(panel.update(3, 200), Some(SensorEvent::Pressed(3)));
        assert_eq!(panel.update(0, 50), Some(SensorEvent::Released(0)));
        assert!(panel.any_pressed());
    }

    #[test]
    fn thresholds_clamp_to_full_scale() {
        let mut panel = FsrPanel::new();
        panel.set_threshold(2, 60000);
        assert_eq!(panel.thresholds()[2], ADC_MAX);
    }

    #[test]
    fn out_of_range_updates_are_ignored() {
        let mut panel = FsrPanel::new();
        assert_eq!(panel.update(NUM_SENSORS, 1023), None);
        panel.set_threshold(NUM_SENSORS, 5);
        assert_eq!(panel.thresholds(), [DEFAULT_THRESHOLD; NUM_SENSORS]);
    }

    #[test]
    fn values_reflect_latest_readings() {
        let mut panel = FsrPanel::new();
        panel.update(0, 11);
        panel.update(1, 22);
        panel.update(2, 33);
        panel.update(3, 44);
        assert_eq!(*panel.values(), [11, 22, 33, 44]);
    }
}
