//! Build-time configuration for the panel firmware.

use crate::hal::adc::AdcChannel;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Serial port baud rate, matching the backend's expectation
pub const UART_BAUD: u32 = 115_200;

/// Number of sensors on the panel
pub const NUM_SENSORS: usize = 4;

/// Full scale of a 10-bit conversion
pub const ADC_MAX: u16 = 1023;

/// ADC channel wired to each sensor, in panel order
pub const SENSOR_CHANNELS: [AdcChannel; NUM_SENSORS] = [
    AdcChannel::Adc0,
    AdcChannel::Adc1,
    AdcChannel::Adc2,
    AdcChannel::Adc3,
];

/// Press threshold a sensor starts with until the backend tunes it
pub const DEFAULT_THRESHOLD: u16 = 1000;

/// Counts a reading must fall below the threshold before a release fires
pub const THRESHOLD_HYSTERESIS: u16 = 10;
