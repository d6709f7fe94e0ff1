//! Communication Protocols
//!
//! Host command decoding, JSON status reports and the serial link that
//! carries both.

pub mod command;
pub mod link;
pub mod report;
