//! Slow query log reader
//!
//! Turns the raw line stream of a MySQL slow query log into typed
//! [`QueryRecord`]s. A record in the log looks like:
//!
//! ```text
//! # Time: 070606 10:02:03                   (optional)
//! # User@Host: root[root] @ localhost [127.0.0.1]
//! # Query_time: 2  Lock_time: 0  Rows_sent: 1  Rows_examined: 1042
//! use shop;                                 (optional)
//! SELECT * FROM orders
//! WHERE id = 5;
//! ```
//!
//! The processing architecture is:
//!
//! BufRead
//! LineCursor (rewindable lookahead)
//! RecordParser
//! QueryRecord
//!

mod constants;
mod cursor;
mod error;
mod fields;
mod parser;
#[cfg(test)]
mod tests;
mod types;

pub use constants::*;
pub use cursor::{LineCursor, Mark};
pub use error::ParseError;
pub use fields::{NumericField, SessionInfo, StatsLine, is_marker, is_time_header, parse_day_code};
pub use parser::RecordParser;
pub use types::{ParseOptions, ParseStats, QueryRecord};
