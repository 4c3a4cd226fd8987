use crate::index::AggregationIndex;
use crate::ingest::constants::TAILER_THREAD_NAME;
use crate::ingest::error::TailError;
use crate::ingest::splitter::{Record, RecordSplitter};
use crate::message::{Message, parse_message};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Reads complete lines from a source that keeps growing.
///
/// End of data is not end of stream: the reader sleeps for one poll interval
/// and tries again. A trailing line without its newline is held back until
/// the writer finishes it.
pub struct FollowReader<R> {
    reader: R,
    partial: Vec<u8>,
    poll_interval: Duration,
}

impl<R: BufRead> FollowReader<R> {
    pub fn new(reader: R, poll_interval: Duration) -> Self {
        Self {
            reader,
            partial: Vec::new(),
            poll_interval,
        }
    }

    /// Next complete line if one is available right now.
    pub fn try_next_line(&mut self) -> Option<String> {
        match self.reader.read_until(b'\n', &mut self.partial) {
            Ok(0) => None,
            Ok(_) if self.partial.ends_with(b"\n") => {
                let mut bytes = std::mem::take(&mut self.partial);
                bytes.pop();
                if bytes.ends_with(b"\r") {
                    bytes.pop();
                }
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            // Writer is mid-line.
            Ok(_) => None,
            Err(e) if e.kind() == ErrorKind::Interrupted => None,
            Err(e) => {
                warn!(error = %e, "read from tailed log failed, retrying");
                None
            }
        }
    }

    /// Block until the next complete line arrives.
    pub fn next_line(&mut self) -> String {
        loop {
            if let Some(line) = self.try_next_line() {
                return line;
            }
            thread::sleep(self.poll_interval);
        }
    }
}

/// Follows a log file and turns appended content into records.
pub struct Tailer<R = BufReader<File>> {
    lines: FollowReader<R>,
    splitter: RecordSplitter,
}

impl Tailer {
    /// Open `path` for following from its first byte.
    ///
    /// This is the only fallible step; once open, read stalls and errors are
    /// absorbed by the poll loop.
    pub fn open(path: impl AsRef<Path>, poll_interval: Duration) -> Result<Self, TailError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TailError::open(path, e))?;

        Ok(Self::from_reader(BufReader::new(file), poll_interval))
    }
}

impl<R: BufRead> Tailer<R> {
    pub fn from_reader(reader: R, poll_interval: Duration) -> Self {
        Self {
            lines: FollowReader::new(reader, poll_interval),
            splitter: RecordSplitter::new(),
        }
    }

    /// Next completed record if the data already read contains one.
    pub fn try_next_record(&mut self) -> Option<Record> {
        while let Some(line) = self.lines.try_next_line() {
            if let Some(record) = self.splitter.push_line(line) {
                return Some(record);
            }
        }
        None
    }

    /// Block until one more record has been completed by a blank line.
    pub fn next_record(&mut self) -> Record {
        loop {
            let line = self.lines.next_line();
            if let Some(record) = self.splitter.push_line(line) {
                return record;
            }
        }
    }

    /// Parse every completed record and hand it to `sink`, forever.
    pub fn run<F>(&mut self, mut sink: F)
    where
        F: FnMut(Message),
    {
        loop {
            let record = self.next_record();
            sink(parse_message(record));
        }
    }
}

/// Start following `path` on a background thread that feeds `index`.
///
/// The file is opened before the thread starts so that an unreadable path is
/// reported to the caller instead of being lost inside the thread.
pub fn spawn_tailer(
    path: &Path,
    poll_interval: Duration,
    index: Arc<AggregationIndex>,
) -> Result<JoinHandle<()>, TailError> {
    let mut tailer = Tailer::open(path, poll_interval).inspect_err(|e| {
        error!(error = %e, "tailer could not open log file");
    })?;

    info!(
        path = %path.display(),
        poll_interval_ms = u64::try_from(poll_interval.as_millis()).unwrap_or(u64::MAX),
        "tailing log file"
    );

    thread::Builder::new()
        .name(TAILER_THREAD_NAME.to_string())
        .spawn(move || {
            tailer.run(|message| {
                if message.has_endpoint() {
                    debug!(summary = %message.summary(), "ingesting message");
                } else {
                    debug!(
                        lines = message.raw().len(),
                        "record without endpoints, not indexed"
                    );
                }
                index.ingest(message);
            })
        })
        .map_err(TailError::Spawn)
}
