pub mod fsr;

#[cfg(target_arch = "avr")]
pub mod serial_console;

// Re-export commonly used types
pub use fsr::{FsrPanel, SensorEvent};

#[cfg(target_arch = "avr")]
pub use serial_console::SerialConsole;
