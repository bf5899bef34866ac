use crate::log::constants::USE_PREFIX;
use crate::log::cursor::LineCursor;
use crate::log::error::ParseError;
use crate::log::fields::{SessionInfo, StatsLine, is_marker, is_time_header, parse_day_code};
use crate::log::types::{ParseOptions, ParseStats, QueryRecord};
use chrono::NaiveDate;
use std::io::BufRead;

/// Result of one record attempt starting at a header line.
enum Attempt {
    Emit(QueryRecord),
    /// Complete record, older than the age limit.
    Filtered,
    /// Input ended before the SQL body started.
    Truncated,
}

/// Streams [`QueryRecord`]s out of a slow log.
///
/// The parser is a per-record state machine:
///
/// HeaderLine (`#`) → [SessionLine if the header was `# Time:`] → StatsLine →
/// [`use ...;`] → SqlBody → Continuation (until the next `#` line, which is
/// pushed back for the next attempt).
///
/// Malformed numeric fields and stray lines are recovered from and counted in
/// [`ParseStats`]. A malformed date or a read failure is yielded as an error,
/// after which the iterator is exhausted.
pub struct RecordParser<R> {
    cursor: LineCursor<R>,
    options: ParseOptions,
    stats: ParseStats,
    done: bool,
}

impl<R: BufRead> RecordParser<R> {
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            cursor: LineCursor::new(reader),
            options,
            stats: ParseStats::default(),
            done: false,
        }
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    fn next_record(&mut self) -> Result<Option<QueryRecord>, ParseError> {
        loop {
            let Some(line) = self.cursor.next_line()? else {
                return Ok(None);
            };

            if !is_marker(&line) {
                self.stats.noise_lines += 1;
                tracing::trace!(
                    line_number = self.cursor.line_number(),
                    "skipping line outside a record"
                );
                continue;
            }

            match self.read_record(line)? {
                Attempt::Emit(record) => {
                    self.stats.records_emitted += 1;
                    return Ok(Some(record));
                }
                Attempt::Filtered => {
                    self.stats.records_filtered += 1;
                }
                Attempt::Truncated => {
                    self.stats.truncated = true;
                    tracing::warn!(
                        line_number = self.cursor.line_number(),
                        "log ended in the middle of a record; discarding it"
                    );
                    return Ok(None);
                }
            }
        }
    }

    fn read_record(&mut self, header: String) -> Result<Attempt, ParseError> {
        //--------------------------------------------------------------------------
        // HeaderLine / SessionLine
        //--------------------------------------------------------------------------
        let (date, session_line) = if is_time_header(&header) {
            let date = parse_day_code(&header).map_err(|value| ParseError::MalformedDate {
                line_number: self.cursor.line_number(),
                value,
            })?;

            let Some(session_line) = self.cursor.next_line()? else {
                return Ok(Attempt::Truncated);
            };
            (Some(date), session_line)
        } else {
            (None, header)
        };
        let session = SessionInfo::from_line(&session_line);

        //--------------------------------------------------------------------------
        // StatsLine
        //--------------------------------------------------------------------------
        let Some(stats_line) = self.cursor.next_line()? else {
            return Ok(Attempt::Truncated);
        };
        let stats = StatsLine::from_line(&stats_line);
        let malformed = stats.malformed();
        if malformed > 0 {
            self.stats.malformed_fields += malformed;
            tracing::debug!(
                line_number = self.cursor.line_number(),
                malformed,
                "non-numeric stats fields read as zero"
            );
        }

        //--------------------------------------------------------------------------
        // SqlBody
        //--------------------------------------------------------------------------
        let Some(mut first) = self.cursor.next_line()? else {
            return Ok(Attempt::Truncated);
        };
        if first.starts_with(USE_PREFIX) {
            let Some(next) = self.cursor.next_line()? else {
                return Ok(Attempt::Truncated);
            };
            first = next;
        }
        let sql = self.read_continuation(first)?;

        //--------------------------------------------------------------------------
        // Filter & Emit
        //--------------------------------------------------------------------------
        if let Some(date) = date {
            if self.is_too_old(date) {
                tracing::debug!(%date, "dropping record older than the age limit");
                return Ok(Attempt::Filtered);
            }
        }

        Ok(Attempt::Emit(QueryRecord {
            sql,
            date,
            elapsed_seconds: stats.elapsed.value(),
            lock_seconds: stats.lock.value(),
            rows_sent: stats.rows_sent.value(),
            rows_examined: stats.rows_examined.value(),
            user: session.user,
            host: session.host,
            ip: session.ip,
        }))
    }

    /// Appends body lines until the next header, which is left unread.
    fn read_continuation(&mut self, first: String) -> Result<String, ParseError> {
        let mut sql = first;

        loop {
            let mark = self.cursor.mark();
            match self.cursor.next_line()? {
                None => break,
                Some(line) if is_marker(&line) => {
                    self.cursor.restore(mark);
                    break;
                }
                Some(line) => {
                    sql.push('\n');
                    sql.push_str(&line);
                }
            }
        }

        Ok(sql)
    }

    fn is_too_old(&self, date: NaiveDate) -> bool {
        (self.options.today - date).num_days() > i64::from(self.options.max_age_days)
    }
}

impl<R: BufRead> Iterator for RecordParser<R> {
    type Item = Result<QueryRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
