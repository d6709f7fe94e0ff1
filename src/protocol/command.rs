//! Host command decoding
//!
//! Commands are short ASCII tokens matched exactly and case-sensitively.
//! Tokens are delimited by whitespace or by the input buffer filling up;
//! anything that does not match is ignored.

use heapless::Vec;

use crate::config::COMMAND_BUFFER_SIZE;

/// Host command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `DM`: select distance match
    SelectDistanceMatch,
    /// `DO`: select dodge obstacle
    SelectDodgeObstacle,
    /// `START`: begin live distance sampling
    Start,
    /// `STOP`: end live distance sampling
    Stop,
    /// `RESTART`: fresh session and a new round
    Restart,
}

impl Command {
    /// Every command, in wire order
    pub const ALL: [Self; 5] = [
        Self::SelectDistanceMatch,
        Self::SelectDodgeObstacle,
        Self::Start,
        Self::Stop,
        Self::Restart,
    ];

    /// Decode one token from raw input
    ///
    /// Surrounding whitespace is trimmed. Returns None for non-UTF-8 input
    /// and unknown tokens.
    #[must_use]
    pub fn parse(raw: &[u8]) -> Option<Self> {
        let text = core::str::from_utf8(raw).ok()?;
        Self::from_token(text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0'))
    }

    /// Decode an already-trimmed token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DM" => Some(Self::SelectDistanceMatch),
            "DO" => Some(Self::SelectDodgeObstacle),
            "START" => Some(Self::Start),
            "STOP" => Some(Self::Stop),
            "RESTART" => Some(Self::Restart),
            _ => None,
        }
    }

    /// Wire token
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::SelectDistanceMatch => "DM",
            Self::SelectDodgeObstacle => "DO",
            Self::Start => "START",
            Self::Stop => "STOP",
            Self::Restart => "RESTART",
        }
    }

    /// Check if some token could still complete from these bytes
    #[must_use]
    pub fn is_partial(raw: &[u8]) -> bool {
        Self::ALL
            .iter()
            .any(|command| command.token().as_bytes().starts_with(raw))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.token());
    }
}

fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0
}

/// Incremental command parser
///
/// Buffers raw host input across reads so a token split between two reads,
/// or several tokens in one read, are all recovered. The buffer is bounded
/// by [`COMMAND_BUFFER_SIZE`]; a full buffer without a delimiter is taken
/// as one (truncated) token.
pub struct CommandParser {
    pending: Vec<u8, COMMAND_BUFFER_SIZE>,
}

impl CommandParser {
    /// Create an empty parser
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Buffered bytes not yet turned into a command
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Free space in the buffer
    #[must_use]
    pub fn spare(&self) -> usize {
        self.pending.capacity() - self.pending.len()
    }

    /// Append raw input, returns how many bytes were accepted
    pub fn feed(&mut self, bytes: &[u8]) -> usize {
        let accepted = bytes.len().min(self.spare());
        // Cannot fail, length checked against spare capacity
        let _ = self.pending.extend_from_slice(&bytes[..accepted]);
        accepted
    }

    /// Take the next command out of the buffer
    ///
    /// Unknown tokens are dropped on the way. A trailing token without a
    /// delimiter is returned as soon as it matches, kept while it is still
    /// the start of a known token, and dropped otherwise.
    pub fn next_command(&mut self) -> Option<Command> {
        loop {
            let leading = self
                .pending
                .iter()
                .take_while(|&&byte| is_separator(byte))
                .count();
            self.consume(leading);
            if self.pending.is_empty() {
                return None;
            }

            let (token_len, used) = match self.pending.iter().position(|&byte| is_separator(byte)) {
                Some(end) => (end, end + 1),
                None => {
                    let len = self.pending.len();
                    if Command::parse(&self.pending).is_none()
                        && !self.pending.is_full()
                        && Command::is_partial(&self.pending)
                    {
                        return None;
                    }
                    (len, len)
                }
            };

            let command = Command::parse(&self.pending[..token_len]);
            self.consume(used);
            if command.is_some() {
                return command;
            }
            trace!("command: dropped {} byte token", token_len);
        }
    }

    /// Forget buffered input
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    fn consume(&mut self, count: usize) {
        let count = count.min(self.pending.len());
        let remaining = self.pending.len() - count;
        self.pending.copy_within(count.., 0);
        self.pending.truncate(remaining);
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
