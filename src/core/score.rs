use std::cell::RefCell;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Default record location, relative to the working directory.
pub const DEFAULT_SCORE_FILE: &str = "highscore.txt";

/// Raw storage for the best-score record: one piece of text, read and
/// replaced whole.
pub trait ScoreBackend {
    /// Returns `Ok(None)` when no record exists yet.
    fn read(&self) -> io::Result<Option<String>>;

    fn write(&self, contents: &str) -> io::Result<()>;
}

/// Stores the record as a plain-text file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FILE)
    }
}

impl ScoreBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}

/// In-process record, lost on exit. Can be told to fail every write.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    record: RefCell<Option<String>>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(contents: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(contents.into())),
            fail_writes: false,
        }
    }

    /// A backend whose writes always fail with `PermissionDenied`.
    pub fn read_only(self) -> Self {
        Self {
            fail_writes: true,
            ..self
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl ScoreBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.record.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(ErrorKind::PermissionDenied, "record is read-only"));
        }
        *self.record.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

/// Durable best (lowest) attempt count.
///
/// Never surfaces an error: a missing or corrupt record reads as "no best
/// score yet", and a failed write only means the record does not survive to
/// the next session.
#[derive(Debug)]
pub struct ScoreStore<B = FileBackend> {
    backend: B,
}

impl ScoreStore<FileBackend> {
    /// Store backed by a file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }
}

impl<B: ScoreBackend> ScoreStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self) -> Option<u32> {
        let text = match self.backend.read() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("no best score recorded yet");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to read best score; treating as absent");
                return None;
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match text.parse::<u32>() {
            Ok(best) if best > 0 => Some(best),
            _ => {
                warn!(record = text, "ignoring malformed best score record");
                None
            }
        }
    }

    /// Persists `attempts` when it beats `current` and returns the best score
    /// together with whether it changed.
    pub fn record_if_better(&self, attempts: u32, current: Option<u32>) -> (u32, bool) {
        match current {
            Some(best) if attempts >= best => (best, false),
            _ => {
                if let Err(e) = self.backend.write(&attempts.to_string()) {
                    warn!(error = %e, attempts, "failed to persist best score");
                } else {
                    info!(attempts, previous = ?current, "new best score");
                }
                (attempts, true)
            }
        }
    }
}
