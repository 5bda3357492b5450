use crate::hal::Uart0;
use core::convert::Infallible;

pub struct SerialConsole {
    uart: Uart0,
}

impl SerialConsole {
    pub fn new() -> Self {
        Self { uart: Uart0::new() }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.uart.write_byte(byte);
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.uart.read_byte()
    }

    pub fn write_line(&mut self, s: &str) {
        self.uart.write_str(s);
        self.uart.write_str("\r\n");
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.uart.write_str(s);
        Ok(())
    }
}
