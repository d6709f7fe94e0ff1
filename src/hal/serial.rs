//! Host Serial Port
//!
//! Interrupt-driven buffered UART on the ST-LINK virtual COM port.
//! Buffering gives the non-blocking "is a command waiting?" check the
//! control loop relies on.

use embassy_stm32::usart::{self, BufferedUart, DataBits, Parity, StopBits};

use crate::config::SERIAL_BAUD;

/// Buffered host UART
pub type HostSerial = BufferedUart<'static>;

/// 9600 8N1
#[must_use]
pub fn host_serial_config() -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = SERIAL_BAUD;
    config.data_bits = DataBits::DataBits8;
    config.parity = Parity::ParityNone;
    config.stop_bits = StopBits::STOP1;
    config
}
