//! Firmware for a 4-sensor force-sensitive-resistor panel.
//!
//! Scans the sensors through the ADC (optionally with an accelerated
//! conversion clock, see the `fast-adc` feature), tracks press state against
//! per-sensor thresholds and answers a line-based ASCII protocol on the
//! serial port. Hardware-facing modules only build for AVR targets; the
//! bit-level and protocol logic builds everywhere so it can be unit tested
//! on the host.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod drivers;
pub mod hal;
pub mod protocol;

#[cfg(target_arch = "avr")]
pub mod testing;
