//! Clipboard sinks and the copy acknowledgement
//!
//! Generated code is handed to a [`ClipboardSink`]. [`CopyFeedback`] tracks
//! what the user sees afterwards: "Copied" for a short while, then idle
//! again. A failed copy is reported and logged but never stops the loop.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::{ClipboardBackend, ClipboardConfig};

/// Error raised by a clipboard sink
#[derive(Debug)]
pub enum ClipboardError {
    /// Writing to the target failed
    Io(io::Error),
    /// The sink cannot accept text (e.g. copying is disabled)
    Unavailable(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Io(e) => write!(f, "Clipboard write failed: {}", e),
            ClipboardError::Unavailable(reason) => write!(f, "Clipboard unavailable: {}", reason),
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::Io(e) => Some(e),
            ClipboardError::Unavailable(_) => None,
        }
    }
}

impl From<io::Error> for ClipboardError {
    fn from(e: io::Error) -> Self {
        ClipboardError::Io(e)
    }
}

/// Something that accepts copied text
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Overwrites a file with every copy
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardSink for FileSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text)?;
        log::debug!("Copied {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}

/// Prints copies to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ClipboardSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps every copy in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub copies: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent copy
    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl ClipboardSink for MemorySink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copies.push(text.to_string());
        Ok(())
    }
}

/// Rejects every copy
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSink;

impl ClipboardSink for DisabledSink {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("copying is disabled".to_string()))
    }
}

/// Build the sink named by the configuration
pub fn sink_from_config(config: &ClipboardConfig) -> Box<dyn ClipboardSink> {
    match config.backend {
        ClipboardBackend::File => Box::new(FileSink::new(&config.path)),
        ClipboardBackend::Stdout => Box::new(StdoutSink),
        ClipboardBackend::Disabled => Box::new(DisabledSink),
    }
}

/// What the copy button currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    /// Acknowledged until the given instant
    Copied { until: Instant },
    /// The last copy failed
    Failed(String),
}

impl CopyFeedback {
    /// Copy `text` to `sink` at time `now` and return the new feedback
    pub fn copy(sink: &mut dyn ClipboardSink, text: &str, now: Instant, ack: Duration) -> Self {
        match sink.write_text(text) {
            Ok(()) => CopyFeedback::Copied { until: now + ack },
            Err(e) => {
                log::error!("{}", e);
                CopyFeedback::Failed(e.to_string())
            }
        }
    }

    /// Feedback as seen at `now`; an expired acknowledgement turns idle
    pub fn at(&self, now: Instant) -> CopyFeedback {
        match self {
            CopyFeedback::Copied { until } if now >= *until => CopyFeedback::Idle,
            other => other.clone(),
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyFeedback::Copied { .. })
    }

    /// Button label for this state
    pub fn label(&self) -> &str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied { .. } => "Copied!",
            CopyFeedback::Failed(_) => "Copy failed",
        }
    }
}
