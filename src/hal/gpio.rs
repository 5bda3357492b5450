use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    pub const fn new() -> Self {
        Self {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                unsafe {
                    (*$PORT::ptr())
                        .$ddr
                        .modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }

            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDR bit and the pull-up
                unsafe {
                    (*$PORT::ptr())
                        .$ddr
                        .modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr())
                        .$port
                        .modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Pin::new()
            }
        }

        impl<const P: u8> Pin<$PORT, P, Output> {
            #[inline]
            pub fn set_high(&mut self) {
                unsafe {
                    (*$PORT::ptr())
                        .$port
                        .modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
            }

            #[inline]
            pub fn set_low(&mut self) {
                unsafe {
                    (*$PORT::ptr())
                        .$port
                        .modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
            }

            #[inline]
            pub fn set(&mut self, high: bool) {
                if high {
                    self.set_high();
                } else {
                    self.set_low();
                }
            }
        }

        impl<const P: u8> Pin<$PORT, P, Input> {
            #[inline]
            pub fn is_high(&self) -> bool {
                unsafe { ((*$PORT::ptr()).$pin.read().bits() & (1 << P)) != 0 }
            }

            #[inline]
            pub fn is_low(&self) -> bool {
                !self.is_high()
            }
        }
    };
}

impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTC, ddrc, portc, pinc);
impl_port!(PORTD, ddrd, portd, pind);

// Board-specific pin definitions
pub mod board {
    use super::*;

    /// On-board LED, lit while any sensor is pressed
    pub type StatusLed = Pin<PORTB, 5, Output>;
}
