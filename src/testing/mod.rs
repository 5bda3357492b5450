//! On-target self checks, reported over the serial console.
//!
//! These exercise the live hardware and complement the host unit tests,
//! which cover the bit-level and protocol logic against mock registers.

use crate::config;
use crate::drivers::SerialConsole;
use crate::hal::Adc;
use ufmt::uwrite;

pub trait TestCase {
    fn name(&self) -> &'static str;
    fn run(&self) -> TestResult;
}

#[derive(PartialEq)]
pub enum TestResult {
    Pass,
    Fail(&'static str),
}

pub struct TestRunner {
    console: SerialConsole,
    total_tests: u32,
    passed_tests: u32,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            console: SerialConsole::new(),
            total_tests: 0,
            passed_tests: 0,
        }
    }

    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) {
        uwrite!(&mut self.console, "\r\n=== Test Suite: {} ===\r\n", name).ok();

        for test in tests {
            self.total_tests += 1;
            uwrite!(&mut self.console, "Running {}: ", test.name()).ok();

            match test.run() {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    uwrite!(&mut self.console, "PASS\r\n").ok();
                }
                TestResult::Fail(reason) => {
                    uwrite!(&mut self.console, "FAIL - {}\r\n", reason).ok();
                }
            }
        }

        uwrite!(
            &mut self.console,
            "Passed: {}/{}\r\n",
            self.passed_tests,
            self.total_tests
        )
        .ok();
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ConversionClockTest;

impl TestCase for ConversionClockTest {
    fn name(&self) -> &'static str {
        "ADC conversion clock"
    }

    fn run(&self) -> TestResult {
        let mut adc = Adc::new();
        adc.set_fast_clock();

        let expected = if cfg!(feature = "fast-adc") {
            0b100 // div16
        } else {
            0b111 // power-on div128 left in place
        };

        if adc.prescaler_bits() != expected {
            return TestResult::Fail("prescaler bits wrong after setup");
        }

        // A second application must land in the same state.
        adc.set_fast_clock();
        if adc.prescaler_bits() != expected {
            return TestResult::Fail("prescaler bits not stable on reapply");
        }

        TestResult::Pass
    }
}

pub struct SensorSweepTest;

impl TestCase for SensorSweepTest {
    fn name(&self) -> &'static str {
        "Sensor channel sweep"
    }

    fn run(&self) -> TestResult {
        let mut adc = Adc::new();
        adc.set_fast_clock();

        for channel in config::SENSOR_CHANNELS {
            if adc.read_channel(channel) > config::ADC_MAX {
                return TestResult::Fail("reading exceeds 10-bit range");
            }
        }

        TestResult::Pass
    }
}
