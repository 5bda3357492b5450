//! ADC driver and conversion-clock control.
//!
//! The panel wants the highest sample rate the converter can give, so the
//! conversion clock can be switched from the power-on /128 prescale to /16:
//! at a 16 MHz system clock that is a 1 MHz ADC clock and ~77k samples/s
//! instead of ~9.6k. The ADC clock then runs above the 200 kHz the datasheet
//! recommends for full resolution, which is an accepted tradeoff here.

use crate::hal::sfr::Sfr;
#[cfg(feature = "fast-adc")]
use crate::hal::sfr::{clear_bit, set_bit};

// ADCSRA bit positions
pub const ADPS0: u8 = 0;
pub const ADPS1: u8 = 1;
pub const ADPS2: u8 = 2;
pub const ADIE: u8 = 3;
pub const ADIF: u8 = 4;
pub const ADATE: u8 = 5;
pub const ADSC: u8 = 6;
pub const ADEN: u8 = 7;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

/// Switch the conversion clock to the /16 prescale (ADPS = 0b100).
///
/// Each prescaler-select bit is set or cleared individually, so bits outside
/// ADPS2..ADPS0 keep whatever value they had. Must run before the first
/// conversion is started, and repeated calls land in the same state.
///
/// Without the `fast-adc` feature the body is compiled out and the register
/// is neither read nor written, leaving the /128 power-on prescale in place.
#[cfg_attr(not(feature = "fast-adc"), allow(unused_variables))]
pub fn apply_fast_clock<R: Sfr>(adcsra: &mut R) {
    #[cfg(feature = "fast-adc")]
    {
        set_bit(adcsra, ADPS2);
        clear_bit(adcsra, ADPS1);
        clear_bit(adcsra, ADPS0);
    }
}

#[cfg(target_arch = "avr")]
mod avr {
    use super::*;
    use avr_device::atmega328p::ADC;

    /// The live ADCSRA register seen through the byte-register interface.
    struct Adcsra;

    impl Sfr for Adcsra {
        fn read(&self) -> u8 {
            let p = unsafe { &*ADC::ptr() };
            p.adcsra.read().bits()
        }

        fn write(&mut self, value: u8) {
            let p = unsafe { &*ADC::ptr() };
            p.adcsra.write(|w| unsafe { w.bits(value) });
        }
    }

    pub struct Adc {
        _private: (),
    }

    impl Adc {
        pub fn new() -> Self {
            let p = unsafe { &*ADC::ptr() };
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            p.adcsra.write(|w| unsafe { w.bits((1 << ADEN) | 0b111) });
            // Reference voltage = AVCC
            p.admux.write(|w| unsafe { w.bits(0x40) });
            // Digital input buffers off on the sensor pins
            p.didr0.write(|w| unsafe { w.bits(0x0F) });
            Self { _private: () }
        }

        /// Apply the `fast-adc` conversion clock. Call before the first
        /// conversion; a no-op build without the feature.
        pub fn set_fast_clock(&mut self) {
            apply_fast_clock(&mut Adcsra);
        }

        /// Current ADPS2..ADPS0 value, for the on-target checks.
        pub fn prescaler_bits(&self) -> u8 {
            let p = unsafe { &*ADC::ptr() };
            p.adcsra.read().bits() & 0b111
        }

        pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
            let p = unsafe { &*ADC::ptr() };

            // Select channel
            p.admux
                .modify(|r, w| unsafe { w.bits((r.bits() & 0xF0) | (channel as u8 & 0x0F)) });

            // Start conversion
            p.adcsra
                .modify(|r, w| unsafe { w.bits(r.bits() | (1 << ADSC)) });

            // Wait for completion
            while p.adcsra.read().bits() & (1 << ADSC) != 0 {}

            p.adc.read().bits()
        }
    }

    impl Default for Adc {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(target_arch = "avr")]
pub use avr::Adc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::sfr::MemSfr;

    #[cfg(feature = "fast-adc")]
    mod enabled {
        use super::*;

        #[test]
        fn prescaler_bits_encode_div16() {
            let mut reg = MemSfr::new(0b0000_0000);
            apply_fast_clock(&mut reg);
            assert_eq!(reg.value(), 0b0000_0100);
        }

        #[test]
        fn other_bits_survive() {
            let mut reg = MemSfr::new(0b1110_0111);
            apply_fast_clock(&mut reg);
            assert_eq!(reg.value(), 0b1110_0100);
        }

        #[test]
        fn holds_for_arbitrary_initial_values() {
            for initial in [0x00u8, 0xFF, 0xA5, 0x5A, 0x87, 0xE7, 0x03, 0xF8] {
                let mut reg = MemSfr::new(initial);
                apply_fast_clock(&mut reg);
                let result = reg.value();
                assert_eq!(result & 0b111, 0b100, "initial {initial:#010b}");
                assert_eq!(result & !0b111, initial & !0b111, "initial {initial:#010b}");
            }
        }

        #[test]
        fn applying_twice_equals_once() {
            let mut once = MemSfr::new(0b1011_0011);
            apply_fast_clock(&mut once);

            let mut twice = MemSfr::new(0b1011_0011);
            apply_fast_clock(&mut twice);
            apply_fast_clock(&mut twice);

            assert_eq!(once.value(), twice.value());
        }
    }

    #[cfg(not(feature = "fast-adc"))]
    mod disabled {
        use super::*;

        /// Register mock that counts every access.
        #[derive(Default)]
        struct CountingSfr {
            value: u8,
            reads: core::cell::Cell<u32>,
            writes: u32,
        }

        impl Sfr for CountingSfr {
            fn read(&self) -> u8 {
                self.reads.set(self.reads.get() + 1);
                self.value
            }

            fn write(&mut self, value: u8) {
                self.value = value;
                self.writes += 1;
            }
        }

        #[test]
        fn register_is_untouched() {
            let mut reg = CountingSfr {
                value: 0b1010_1010,
                ..CountingSfr::default()
            };
            apply_fast_clock(&mut reg);
            assert_eq!(reg.value, 0b1010_1010);
            assert_eq!(reg.writes, 0);
            assert_eq!(reg.reads.get(), 0);
        }

        #[test]
        fn holds_for_arbitrary_initial_values() {
            for initial in [0x00u8, 0xFF, 0xA5, 0x5A, 0x87, 0xE7] {
                let mut reg = MemSfr::new(initial);
                apply_fast_clock(&mut reg);
                assert_eq!(reg.value(), initial);
            }
        }
    }
}
