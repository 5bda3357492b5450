#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use fsr_firmware::config::SENSOR_CHANNELS;
    use fsr_firmware::drivers::{FsrPanel, SerialConsole};
    use fsr_firmware::hal::gpio::board::StatusLed;
    use fsr_firmware::hal::Adc;
    use fsr_firmware::protocol::{report, Command, LineReader};

    #[avr_device::entry]
    fn main() -> ! {
        let mut console = SerialConsole::new();
        let mut adc = Adc::new();
        // The conversion clock must be settled before the first conversion.
        adc.set_fast_clock();

        let mut led = StatusLed::new().into_output();
        let mut panel = FsrPanel::new();
        let mut line = LineReader::new();

        unsafe { avr_device::interrupt::enable() };

        console.write_line("FSR panel firmware v0.1.0");

        loop {
            for (index, channel) in SENSOR_CHANNELS.iter().enumerate() {
                let value = adc.read_channel(*channel);
                panel.update(index, value);
            }
            led.set(panel.any_pressed());

            while let Some(byte) = console.read_byte() {
                let raw = match line.push(byte) {
                    Some(raw) => raw,
                    None => continue,
                };
                match Command::parse(raw) {
                    Ok(Command::ReadValues) => {
                        report::values(&mut console, panel.values()).ok();
                    }
                    Ok(Command::ReadThresholds) => {
                        report::thresholds(&mut console, &panel.thresholds()).ok();
                    }
                    Ok(Command::SetThreshold { index, value }) => {
                        panel.set_threshold(index, value);
                        report::thresholds(&mut console, &panel.thresholds()).ok();
                    }
                    // Malformed input is dropped; the backend resends.
                    Err(_) => {}
                }
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
