pub mod adc;
pub mod sfr;

#[cfg(target_arch = "avr")]
pub mod gpio;
#[cfg(target_arch = "avr")]
pub mod timer;
#[cfg(target_arch = "avr")]
pub mod uart;

// Re-export commonly used types
pub use adc::AdcChannel;
pub use sfr::Sfr;

#[cfg(target_arch = "avr")]
pub use adc::Adc;
#[cfg(target_arch = "avr")]
pub use timer::delay_ms;
#[cfg(target_arch = "avr")]
pub use uart::Uart0;
