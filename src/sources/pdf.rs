//! PDF document reading.
//!
//! A [PdfDocument] owns the parsed document for as long as it lives,
//! and releases it when dropped, be it after a successful extraction or an error.
//!
//! Text is extracted page by page (in page number order) and flattened into a single line:
//! ```text
//! page 1:  "Minutes of the\nmeeting"
//! page 2:  "held in Geneva\n"
//! flat:    "Minutes of the meeting held in Geneva"
//! ```
use std::path::{Path, PathBuf};

use log::debug;
use lopdf::Document;

use crate::error::Error;

pub struct PdfDocument {
    path: PathBuf,
    inner: Document,
}

impl PdfDocument {
    /// Open and parse the PDF located at `path`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let inner = Document::load(path).map_err(|e| Error::pdf(path, e))?;
        debug!("opened {:?} ({} pages)", path, inner.get_pages().len());
        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Extracted text of each page, in page order.
    pub fn pages(&self) -> Result<Vec<String>, Error> {
        self.inner
            .get_pages()
            .into_keys()
            .map(|page_number| {
                self.inner
                    .extract_text(&[page_number])
                    .map_err(|e| Error::pdf(&self.path, e))
            })
            .collect()
    }

    /// Concatenate page texts, turning newlines into spaces.
    pub fn flatten(&self) -> Result<String, Error> {
        let flat = self
            .pages()?
            .iter()
            .map(|page| page.replace('\n', " "))
            .collect::<Vec<_>>()
            .join(" ");
        Ok(flat.trim().to_string())
    }
}

/// Open the PDF at `path` and return its flattened text.
pub fn extract_text(path: &Path) -> Result<String, Error> {
    PdfDocument::from_path(path)?.flatten()
}
