use avr_device::atmega328p::TC0;

/// Busy-wait for `ms` milliseconds on timer 0.
///
/// 16MHz/64 gives a 250kHz tick, so 250 counts per millisecond. Takes over
/// the timer for the duration; nothing else in this firmware uses it.
pub fn delay_ms(ms: u16) {
    unsafe {
        let p = &*TC0::ptr();

        // Normal mode, clk/64
        p.tccr0a.write(|w| w.bits(0));
        p.tccr0b.write(|w| w.bits(0x03));
        p.tcnt0.write(|w| w.bits(0));

        for _ in 0..ms {
            while p.tcnt0.read().bits() < 250 {}
            p.tcnt0.write(|w| w.bits(0));
        }

        // Stop the clock again
        p.tccr0b.write(|w| w.bits(0));
    }
}
