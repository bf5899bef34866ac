use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Position token handed out by [`LineCursor::mark`].
///
/// Restoring a mark replays every line read after it was taken.
#[derive(Debug, PartialEq, Eq)]
pub struct Mark(usize);

/// Line-oriented reader with one level of rewind.
///
/// Lines read since the latest [`mark`](LineCursor::mark) are retained in
/// memory so that [`restore`](LineCursor::restore) can hand them out again.
/// Nothing seeks the underlying reader, so any `BufRead` works: files,
/// sockets, in-memory buffers.
pub struct LineCursor<R> {
    reader: R,
    retained: VecDeque<String>,
    // absolute index of `retained[0]`
    offset: usize,
    // absolute index of the next line to hand out
    position: usize,
    anchor: Option<usize>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            retained: VecDeque::new(),
            offset: 0,
            position: 0,
            anchor: None,
            buf: Vec::new(),
        }
    }

    /// Returns the next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.retained.get(self.position - self.offset) {
            self.position += 1;
            return Ok(Some(line.clone()));
        }

        let Some(line) = self.read_physical_line()? else {
            return Ok(None);
        };

        if self.anchor.is_none() {
            // No outstanding mark: nothing needs to be replayed.
            self.retained.clear();
            self.offset = self.position + 1;
        } else {
            self.retained.push_back(line.clone());
        }
        self.position += 1;

        Ok(Some(line))
    }

    /// Remembers the current position. Only the latest mark can be restored.
    pub fn mark(&mut self) -> Mark {
        while self.offset < self.position && !self.retained.is_empty() {
            self.retained.pop_front();
            self.offset += 1;
        }
        self.offset = self.position;
        self.anchor = Some(self.position);
        Mark(self.position)
    }

    /// Rewinds to `mark` so the lines read after it are returned again.
    ///
    /// A stale mark (superseded by a later one) is ignored.
    pub fn restore(&mut self, mark: Mark) {
        if self.anchor != Some(mark.0) {
            return;
        }
        self.position = mark.0;
        self.anchor = None;
    }

    /// 1-based number of the line most recently returned (0 before the first read).
    pub fn line_number(&self) -> usize {
        self.position
    }

    fn read_physical_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
