/// One blank-line-delimited block of log lines, in file order.
pub type Record = Vec<String>;

/// Line accumulator that cuts a line stream into records.
///
/// A line equal to `""` closes the current record. Consecutive blank lines
/// (and blank lines before any content) never produce an empty record.
#[derive(Debug, Default)]
pub struct RecordSplitter {
    buffer: Vec<String>,
}

impl RecordSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (newline already stripped). Returns the completed
    /// record when `line` is the terminating blank line.
    pub fn push_line(&mut self, line: String) -> Option<Record> {
        if line.is_empty() {
            return self.flush();
        }

        self.buffer.push(line);
        None
    }

    /// Lines accumulated since the last record boundary.
    pub fn pending(&self) -> &[String] {
        &self.buffer
    }

    /// Take whatever has been accumulated, if anything.
    pub fn flush(&mut self) -> Option<Record> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }
}

/// Iterator adapter: lines in, records out.
///
/// For a finite source a non-empty trailing block is yielded once the source
/// is exhausted; a tailed source never ends so this only matters for one-shot
/// scans.
pub struct Records<I> {
    lines: I,
    splitter: RecordSplitter,
    done: bool,
}

impl<I> Records<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            splitter: RecordSplitter::new(),
            done: false,
        }
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator<Item = String>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(record) = self.splitter.push_line(line) {
                return Some(record);
            }
        }

        self.done = true;
        self.splitter.flush()
    }
}
