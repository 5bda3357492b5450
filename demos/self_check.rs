//! Runs the on-target hardware checks and reports over serial.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod demo {
    use panic_halt as _;

    use fsr_firmware::hal::delay_ms;
    use fsr_firmware::testing::{ConversionClockTest, SensorSweepTest, TestRunner};

    #[avr_device::entry]
    fn main() -> ! {
        let mut runner = TestRunner::new();

        unsafe { avr_device::interrupt::enable() };

        let hardware_tests: [&dyn fsr_firmware::testing::TestCase; 2] =
            [&ConversionClockTest, &SensorSweepTest];

        runner.run_suite("Hardware Tests", &hardware_tests);

        loop {
            delay_ms(1000);
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
