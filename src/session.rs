use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::{docx, pdf};

/// Conversion session bound to one input PDF. Mirrors the open/convert/close
/// lifecycle of the wrapped libraries: `open` validates and loads the input,
/// `convert` may be called for an output path, `close` releases the buffers.
#[derive(Debug)]
pub struct Session {
    bytes: Vec<u8>,
    document: lopdf::Document,
    source: PathBuf,
}

impl Session {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        let document = lopdf::Document::load_mem(&bytes)?;
        if document.is_encrypted() {
            return Err(Error::InvalidPdf("encrypted PDF is not supported".into()));
        }
        log::debug!(
            "opened {}: {} page(s)",
            path.display(),
            document.get_pages().len()
        );
        Ok(Session {
            bytes,
            document,
            source: path.to_path_buf(),
        })
    }

    /// Number of pages in the opened document. Convenience accessor for
    /// callers that want to inspect the input before converting.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Extract the document text, render it as DOCX and write it to
    /// `output`, creating or overwriting the file.
    pub fn convert(&self, output: &Path) -> Result<(), Error> {
        if let Some(title) = pdf::info_string(&self.document, b"Title") {
            log::debug!("PDF title: {title}");
        }
        if let Some(author) = pdf::info_string(&self.document, b"Author") {
            log::debug!("PDF author: {author}");
        }

        let doc = pdf::extract(&self.bytes)?;
        let bytes = docx::render(&doc)?;
        std::fs::write(output, bytes).map_err(Error::Io)
    }

    /// Release the session. Taking `self` by value means a session cannot be
    /// closed twice.
    pub fn close(self) {
        log::debug!("closed session for {}", self.source.display());
    }
}
