//! HTML preview system
//!
//! Presents the active editor on an [`HtmlPreview`] and writes the page to
//! the configured path.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use toolbox_core::Session;
use toolbox_preview::{present, HtmlPreview};

use crate::config::PreviewConfig;

/// Writes the preview page for the active editor
pub struct PreviewSystem {
    path: PathBuf,
    enabled: bool,
}

impl PreviewSystem {
    /// Create a preview system from config
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            enabled: config.enabled,
        }
    }

    /// Output path of the page
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether pages are written after every change
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Build the preview page for the active editor
    pub fn build(session: &Session) -> HtmlPreview {
        let mut page = HtmlPreview::new(&format!("CSS Toolbox - {}", session.active()));
        present(session, &mut page);
        page
    }

    /// Write the page, returning the number of elements it contains
    pub fn write(&self, session: &Session) -> Result<usize, PreviewError> {
        let page = Self::build(session);
        page.write_to(&self.path).map_err(|e| PreviewError {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!(
            "Wrote preview of {} ({} elements) to {}",
            session.active(),
            page.element_count(),
            self.path.display()
        );
        Ok(page.element_count())
    }

    /// Write the page after a change, if automatic previews are on
    pub fn on_change(&self, session: &Session) -> Option<Result<usize, PreviewError>> {
        self.enabled.then(|| self.write(session))
    }
}

/// Preview page could not be written
#[derive(Debug)]
pub struct PreviewError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to write preview to {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
