use crate::ingest::{FollowReader, TailError, Tailer};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Cursor, Read, Write};
use std::thread;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(10);

enum Step {
    Data(&'static [u8]),
    Eof,
    Fail,
}

/// Reader that plays back a fixed sequence of chunks, EOFs and errors.
struct ScriptedReader {
    steps: VecDeque<Step>,
    current: &'static [u8],
}

impl ScriptedReader {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            current: &[],
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ScriptedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.current.is_empty() {
            match self.steps.pop_front() {
                Some(Step::Data(bytes)) => self.current = bytes,
                Some(Step::Fail) => return Err(io::Error::other("device went away")),
                Some(Step::Eof) | None => {}
            }
        }
        Ok(self.current)
    }

    fn consume(&mut self, amt: usize) {
        self.current = &self.current[amt..];
    }
}

#[test]
fn follow_reader_strips_line_endings() {
    // Arrange
    let mut reader = FollowReader::new(Cursor::new(b"a\nb\r\n\n".to_vec()), POLL);

    // Act / Assert
    assert_eq!(reader.try_next_line().as_deref(), Some("a"));
    assert_eq!(reader.try_next_line().as_deref(), Some("b"));
    assert_eq!(reader.try_next_line().as_deref(), Some(""));
    assert_eq!(reader.try_next_line(), None);
}

#[test]
fn follow_reader_replaces_invalid_utf8() {
    let mut reader = FollowReader::new(Cursor::new(b"\xffok\n".to_vec()), POLL);

    assert_eq!(reader.try_next_line().as_deref(), Some("\u{FFFD}ok"));
}

#[test]
fn follow_reader_holds_back_partial_line_until_completed() {
    // Arrange
    let mut log = tempfile::NamedTempFile::new().unwrap();
    write!(log, "hello wor").unwrap();
    log.flush().unwrap();

    let file = File::open(log.path()).unwrap();
    let mut reader = FollowReader::new(BufReader::new(file), POLL);

    // Act / Assert
    assert_eq!(reader.try_next_line(), None);

    write!(log, "ld\n").unwrap();
    log.flush().unwrap();

    assert_eq!(reader.try_next_line().as_deref(), Some("hello world"));
    assert_eq!(reader.try_next_line(), None);
}

#[test]
fn tailer_yields_record_only_after_blank_line() {
    // Arrange
    let mut log = tempfile::NamedTempFile::new().unwrap();
    writeln!(log, "ABCD12 (Aircraft, x) -> EF5678 (Ground, y): payload").unwrap();
    log.flush().unwrap();
    let mut tailer = Tailer::open(log.path(), POLL).unwrap();

    // Act / Assert
    assert_eq!(tailer.try_next_record(), None);

    writeln!(log).unwrap();
    log.flush().unwrap();

    assert_eq!(
        tailer.try_next_record(),
        Some(vec![
            "ABCD12 (Aircraft, x) -> EF5678 (Ground, y): payload".to_string()
        ])
    );
    assert_eq!(tailer.try_next_record(), None);
}

#[test]
fn tailer_open_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.log");

    let result = Tailer::open(&missing, POLL);

    assert!(matches!(result, Err(TailError::Open { path, .. }) if path == missing));
}

#[test]
fn next_record_waits_for_appended_content() {
    // Arrange
    let log = tempfile::NamedTempFile::new().unwrap();
    let mut tailer = Tailer::open(log.path(), POLL).unwrap();
    let mut writer = log.reopen().unwrap();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        writer.write_all(b"line one\nline two\n\n").unwrap();
        writer.flush().unwrap();
    });

    // Act
    let record = tailer.next_record();

    // Assert
    assert_eq!(record, vec!["line one".to_string(), "line two".to_string()]);
    handle.join().unwrap();
}

#[test]
fn follow_reader_keeps_partial_line_across_read_error() {
    // Arrange
    let source = ScriptedReader::new(vec![
        Step::Data(b"par"),
        Step::Eof,
        Step::Fail,
        Step::Data(b"tial\n"),
    ]);
    let mut reader = FollowReader::new(source, POLL);

    // Act / Assert
    assert_eq!(reader.try_next_line(), None);
    assert_eq!(reader.try_next_line(), None);
    assert_eq!(reader.try_next_line().as_deref(), Some("partial"));
    assert_eq!(reader.try_next_line(), None);
}
