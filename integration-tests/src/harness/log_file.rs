use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// A decoder log that a test appends to while a tailer follows it.
pub struct GrowingLog {
    file: NamedTempFile,
}

impl GrowingLog {
    pub fn new() -> Self {
        Self {
            file: NamedTempFile::new().expect("failed to create temp log"),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Append raw text and make it visible to readers immediately.
    pub fn append(&mut self, text: &str) {
        let file: &mut File = self.file.as_file_mut();
        file.write_all(text.as_bytes()).expect("append failed");
        file.flush().expect("flush failed");
    }

    pub fn append_line(&mut self, line: &str) {
        self.append(&format!("{line}\n"));
    }

    /// Append `lines` followed by the blank line that closes the record.
    pub fn append_record(&mut self, lines: &[&str]) {
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        text.push('\n');
        self.append(&text);
    }
}

impl Default for GrowingLog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Poll `condition` until it holds or `timeout` elapses.
pub fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
}
