//! Serial host link
//!
//! Single owner of the transport: yields at most one command per poll
//! without blocking and writes reports fire-and-forget.

use embedded_io::{Read, ReadReady, Write};

use crate::config::COMMAND_BUFFER_SIZE;
use crate::game::event::GameEvent;
use crate::game::ports::EventSink;
use crate::protocol::command::{Command, CommandParser};
use crate::protocol::report::Report;

/// Command/report channel over a byte stream
pub struct HostLink<S> {
    serial: S,
    parser: CommandParser,
    report: Report,
}

impl<S> HostLink<S>
where
    S: Read + ReadReady + Write,
{
    /// Wrap a serial port
    pub const fn new(serial: S) -> Self {
        Self {
            serial,
            parser: CommandParser::new(),
            report: Report::new(),
        }
    }

    /// Next host command, if one is complete
    ///
    /// Buffered tokens are served first, one per call. Otherwise reads
    /// whatever input is waiting, bounded by the free space of the
    /// [`COMMAND_BUFFER_SIZE`] byte parser buffer; the rest stays in the
    /// transport for the next poll.
    pub fn poll_command(&mut self) -> Option<Command> {
        if let Some(command) = self.parser.next_command() {
            return Some(command);
        }

        match self.serial.read_ready() {
            Ok(true) => {}
            Ok(false) => return None,
            Err(_) => {
                warn!("link: read_ready failed");
                return None;
            }
        }

        let mut chunk = [0u8; COMMAND_BUFFER_SIZE];
        let spare = self.parser.spare().min(chunk.len());
        let len = match self.serial.read(&mut chunk[..spare]) {
            Ok(len) => len,
            Err(_) => {
                warn!("link: read failed");
                return None;
            }
        };

        self.parser.feed(&chunk[..len]);
        self.parser.next_command()
    }

    /// Bytes received but not yet parsed into a command
    pub fn pending_input(&self) -> &[u8] {
        self.parser.pending()
    }

    /// Format and send one event
    pub fn send(&mut self, event: &GameEvent) {
        let Ok(line) = self.report.format(event) else {
            warn!("link: report overflow for {}", event.status());
            return;
        };

        if self.serial.write_all(line.as_bytes()).is_err() {
            warn!("link: write failed");
        }
    }

    /// Access the underlying serial port
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Mutable access to the underlying serial port
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }
}

impl<S> EventSink for HostLink<S>
where
    S: Read + ReadReady + Write,
{
    fn emit(&mut self, event: &GameEvent) {
        self.send(event);
    }
}
