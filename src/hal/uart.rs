use avr_device::atmega328p::USART0;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;
use core::convert::Infallible;
use embedded_hal::serial;

use crate::config;

// Buffer size must be power of 2 for efficient masking
const BUFFER_SIZE: usize = 32;
const BUFFER_MASK: usize = BUFFER_SIZE - 1;

// Double-speed mode keeps the baud error small at 115200: UBRR = f/(8*baud) - 1
const UBRR_VALUE: u16 = (config::CPU_FREQ_HZ / (8 * config::UART_BAUD) - 1) as u16;

struct Buffer {
    data: [u8; BUFFER_SIZE],
    write_idx: usize,
    read_idx: usize,
}

impl Buffer {
    const fn new() -> Self {
        Self {
            data: [0; BUFFER_SIZE],
            write_idx: 0,
            read_idx: 0,
        }
    }

    fn write(&mut self, byte: u8) -> bool {
        let next_write = (self.write_idx + 1) & BUFFER_MASK;
        if next_write != self.read_idx {
            self.data[self.write_idx] = byte;
            self.write_idx = next_write;
            true
        } else {
            false
        }
    }

    fn read(&mut self) -> Option<u8> {
        if self.read_idx != self.write_idx {
            let byte = self.data[self.read_idx];
            self.read_idx = (self.read_idx + 1) & BUFFER_MASK;
            Some(byte)
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.read_idx == self.write_idx
    }
}

// Global buffers for the interrupt handlers
static TX_BUFFER: Mutex<RefCell<Buffer>> = Mutex::new(RefCell::new(Buffer::new()));
static RX_BUFFER: Mutex<RefCell<Buffer>> = Mutex::new(RefCell::new(Buffer::new()));

pub struct Uart0 {
    _private: (),
}

impl Uart0 {
    pub fn new() -> Self {
        unsafe {
            let p = &*USART0::ptr();

            p.ubrr0.write(|w| w.bits(UBRR_VALUE));
            p.ucsr0a.write(|w| w.u2x0().set_bit());
            // 8 data bits, no parity, 1 stop bit
            p.ucsr0c.write(|w| w.bits(0x06));
            // Enable TX, RX and the RX interrupt
            p.ucsr0b
                .write(|w| w.rxen0().set_bit().txen0().set_bit().rxcie0().set_bit());
        }

        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        nb::block!(serial::Write::write(self, byte)).ok();
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        serial::Read::read(self).ok()
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }
}

impl Default for Uart0 {
    fn default() -> Self {
        Self::new()
    }
}

impl serial::Write<u8> for Uart0 {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        let pushed = interrupt::free(|cs| TX_BUFFER.borrow(cs).borrow_mut().write(byte));
        if pushed {
            // Kick the transmitter; the UDRE handler drains the buffer
            unsafe {
                (*USART0::ptr()).ucsr0b.modify(|_, w| w.udrie0().set_bit());
            }
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        let empty = interrupt::free(|cs| TX_BUFFER.borrow(cs).borrow_mut().is_empty());
        if empty {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl serial::Read<u8> for Uart0 {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        interrupt::free(|cs| RX_BUFFER.borrow(cs).borrow_mut().read()).ok_or(nb::Error::WouldBlock)
    }
}

// Interrupt handlers
#[avr_device::interrupt(atmega328p)]
fn USART_RX() {
    let byte = unsafe { (*USART0::ptr()).udr0.read().bits() };
    interrupt::free(|cs| {
        // A full buffer drops the byte; the line parser resynchronizes on
        // the next terminator.
        RX_BUFFER.borrow(cs).borrow_mut().write(byte);
    });
}

#[avr_device::interrupt(atmega328p)]
fn USART_UDRE() {
    interrupt::free(|cs| {
        if let Some(byte) = TX_BUFFER.borrow(cs).borrow_mut().read() {
            unsafe {
                (*USART0::ptr()).udr0.write(|w| w.bits(byte));
            }
        } else {
            // Buffer empty - disable the TX interrupt
            unsafe {
                (*USART0::ptr()).ucsr0b.modify(|_, w| w.udrie0().clear_bit());
            }
        }
    });
}
