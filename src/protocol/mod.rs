//! Serial line protocol spoken with the backend.
//!
//! Commands arrive as newline-terminated ASCII lines: `v` requests the
//! current readings, `t` the current thresholds, and a line starting with a
//! sensor index digit followed by a number sets that sensor's threshold.
//! Responses are single lines of the same shape, `v 12 34 56 78` style.

pub mod command;
pub mod line;
pub mod report;

pub use command::{Command, CommandError};
pub use line::LineReader;
