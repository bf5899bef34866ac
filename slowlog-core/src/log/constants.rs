/// First character of every header line.
pub const MARKER: char = '#';

/// Prefix of the optional header line carrying the record's timestamp.
pub const TIME_HEADER: &str = "# Time:";

/// A first SQL line starting with this selects the schema and is not part of the query.
pub const USE_PREFIX: &str = "use";

/// Records dated more than this many days before "today" are dropped.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 8;

// Whitespace token positions in the session line:
// `# User@Host: root[root] @ localhost [127.0.0.1]`
pub const USER_TOKEN: usize = 2;
pub const HOST_TOKEN: usize = 4;
pub const IP_TOKEN: usize = 5;

// Whitespace token positions in the stats line:
// `# Query_time: 2  Lock_time: 0  Rows_sent: 1  Rows_examined: 1042`
pub const ELAPSED_TOKEN: usize = 2;
pub const LOCK_TOKEN: usize = 4;
pub const ROWS_SENT_TOKEN: usize = 6;
pub const ROWS_EXAMINED_TOKEN: usize = 8;
