//! Streams sensor readings as `v` lines, ten per second. Handy for eyeballing
//! sensor noise and the effect of the fast conversion clock.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod demo {
    use panic_halt as _;

    use fsr_firmware::config::{NUM_SENSORS, SENSOR_CHANNELS};
    use fsr_firmware::drivers::SerialConsole;
    use fsr_firmware::hal::{delay_ms, Adc};
    use fsr_firmware::protocol::report;

    #[avr_device::entry]
    fn main() -> ! {
        let mut console = SerialConsole::new();
        let mut adc = Adc::new();
        adc.set_fast_clock();

        unsafe { avr_device::interrupt::enable() };

        loop {
            let mut values = [0u16; NUM_SENSORS];
            for (value, channel) in values.iter_mut().zip(SENSOR_CHANNELS.iter()) {
                *value = adc.read_channel(*channel);
            }

            report::values(&mut console, &values).ok();
            delay_ms(100);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
