//! PDF corpus generation pipeline
//!
//! Builds a JSON corpus of English text chunks out of a folder of (possibly OCR'd) PDF documents.
//!
//! # Processing
//! 1. Each PDF of the source folder is opened and its pages are flattened into a single string.
//! 1. The text is split into chunks of 200 words.
//! 1. Chunks that are 100 characters long or less are discarded without being identified.
//! 1. The remaining ones get identified, and only English ones are kept.
//!    Chunks that can't be identified are logged and skipped.
//! 1. Kept chunks are normalized. Chunks with too many accented letters end up empty and are discarded.
//! 1. Every kept chunk is written, along with its file name, into a single JSON file.
//!
//! Files are processed one after the other, in file name order.
//! A PDF that can't be read stops the whole run, before anything is written.
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::filtering::{Filter, LangFilter, LangVerdict, Length};
use crate::identifiers::{Identifier, WhatLang};
use crate::io::writer::{CorpusWriter, OverwritePolicy, Prompt};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::PdfDocument;
use crate::transformers::{Chunker, Normalizer};

use super::types::{ChunkOutcome, ChunkRecord, Skipped, Summary};

pub struct PdfCorpus<P = Prompt, I: Identifier = WhatLang> {
    src: PathBuf,
    dst: PathBuf,
    chunker: Chunker,
    length: Length,
    lang_filter: LangFilter<I>,
    normalizer: Normalizer,
    policy: P,
}

impl<P: OverwritePolicy> PdfCorpus<P> {
    /// `policy` is asked before overwriting an existing `dst`.
    pub fn new(src: PathBuf, dst: PathBuf, policy: P) -> Self {
        debug!("using source {:?}, destination {:?}", src, dst);
        Self {
            src,
            dst,
            chunker: Chunker::default(),
            length: Length::default(),
            lang_filter: LangFilter::default(),
            normalizer: Normalizer::default(),
            policy,
        }
    }
}

impl<P: OverwritePolicy, I: Identifier> PdfCorpus<P, I> {
    /// Use a custom chunker.
    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Use a custom language filter (other identifier or target language).
    pub fn with_lang_filter<J: Identifier>(self, lang_filter: LangFilter<J>) -> PdfCorpus<P, J> {
        PdfCorpus {
            src: self.src,
            dst: self.dst,
            chunker: self.chunker,
            length: self.length,
            lang_filter,
            normalizer: self.normalizer,
            policy: self.policy,
        }
    }

    /// list PDF files of the source folder, sorted by name.
    ///
    /// Fails if the folder does not exist or has no PDF file.
    pub fn get_paths(&self) -> Result<Vec<PathBuf>, Error> {
        if !self.src.is_dir() {
            return Err(Error::MissingSource(self.src.clone()));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.src)?
            .filter_map(|entry| {
                entry.map_or_else(
                    |e| {
                        error!("error reading source directory: {}", e);
                        None
                    },
                    Some,
                )
            })
            .map(|entry| entry.path())
            .filter(|path| Self::is_pdf(path))
            .collect();

        if paths.is_empty() {
            return Err(Error::NoDocuments(self.src.clone()));
        }

        paths.sort();
        Ok(paths)
    }

    /// Regular files whose name ends with `.pdf` (case sensitive).
    fn is_pdf(path: &Path) -> bool {
        path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.ends_with(".pdf"))
    }

    /// Filter, identify and clean a single chunk.
    pub fn process_chunk(&self, title: &str, chunk: &str) -> ChunkOutcome {
        if !self.length.detect(chunk) {
            return ChunkOutcome::TooShort;
        }

        match self.lang_filter.check(chunk) {
            Ok(LangVerdict::Target(_)) => (),
            Ok(LangVerdict::Other(id)) => return ChunkOutcome::OtherLanguage(id),
            Err(e) => return ChunkOutcome::Unidentified(e),
        }

        let cleaned = self.normalizer.normalize(chunk);
        if cleaned.is_empty() {
            ChunkOutcome::Rejected
        } else {
            ChunkOutcome::Kept(ChunkRecord::new(title.to_string(), cleaned))
        }
    }

    /// Process a document.
    ///
    /// This opens the PDF, chunks its text and returns the outcome of each chunk, in order.
    pub fn process_document(&self, path: &Path) -> Result<Vec<ChunkOutcome>, Error> {
        let doc = PdfDocument::from_path(path)?;
        let title = doc
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = doc.flatten()?;
        let outcomes: Vec<ChunkOutcome> = self
            .chunker
            .chunks(&text)
            .map(|chunk| self.process_chunk(&title, &chunk))
            .collect();

        debug!("{}: {} chunks", title, outcomes.len());
        Ok(outcomes)
    }

    /// Process every provided document and return kept records in order,
    /// along with the number of processed files and skipped chunks.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<(Vec<ChunkRecord>, usize, Skipped), Error> {
        let nb_files = paths.len();

        let mut records = Vec::new();
        let mut skipped = Skipped::default();
        let mut files_processed = 0;
        for (idx, path) in paths.iter().enumerate() {
            info!("[{}/{}] processing {:?}", idx + 1, nb_files, path);

            for outcome in self.process_document(path)? {
                match outcome {
                    ChunkOutcome::Kept(record) => records.push(record),
                    ChunkOutcome::TooShort => skipped.too_short += 1,
                    ChunkOutcome::Unidentified(e) => {
                        warn!("{:?}: error processing chunk: {}", path, e);
                        skipped.unidentified += 1;
                    }
                    ChunkOutcome::OtherLanguage(id) => {
                        debug!("{:?}: skipping chunk identified as {}", path, id.label());
                        skipped.other_language += 1;
                    }
                    ChunkOutcome::Rejected => {
                        debug!("{:?}: chunk emptied by normalization", path);
                        skipped.rejected += 1;
                    }
                }
            }
            files_processed += 1;
        }

        Ok((records, files_processed, skipped))
    }
}

impl<P: OverwritePolicy, I: Identifier> Pipeline<Summary> for PdfCorpus<P, I> {
    fn run(&self) -> Result<Summary, Error> {
        let paths = self.get_paths()?;
        let (records, files_processed, skipped) = self.collect(&paths)?;

        info!("Extraction and chunking complete.");
        info!("{} / {} files processed.", files_processed, paths.len());
        info!(
            "{} chunks created, {} skipped.",
            records.len(),
            skipped.total()
        );
        debug!("{:?}", skipped);

        let outcome = CorpusWriter::new(&self.dst, &self.policy).write(&records)?;

        Ok(Summary {
            files_found: paths.len(),
            files_processed,
            chunks_created: records.len(),
            skipped,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use oxilangtag::LanguageTag;

    use crate::identifiers::Identification;
    use crate::io::writer::NeverOverwrite;

    use super::*;

    const ENGLISH: &str = "The committee met on Tuesday to discuss the distribution of food \
        and blankets to the families who had arrived in the camp during the winter months.";

    /// Always answers `lang`, and counts calls.
    #[derive(Default)]
    struct Counting {
        lang: &'static str,
        calls: Cell<usize>,
    }

    impl Identifier for Counting {
        fn identify(&self, _text: &str) -> Result<Identification, Error> {
            self.calls.set(self.calls.get() + 1);
            if self.lang.is_empty() {
                return Err(Error::Unidentified);
            }
            Ok(Identification::new(
                LanguageTag::parse(self.lang.to_string())?,
                1.0,
            ))
        }
    }

    fn pipeline(lang: &'static str) -> PdfCorpus<NeverOverwrite, Counting> {
        PdfCorpus::new(
            PathBuf::from("src"),
            PathBuf::from("dst.json"),
            NeverOverwrite,
        )
        .with_lang_filter(LangFilter::new(
            Counting {
                lang,
                calls: Cell::new(0),
            },
            "en",
        ))
    }

    #[test]
    fn short_chunks_not_identified() {
        let p = pipeline("en");
        let short = "only a few words here";
        assert!(matches!(
            p.process_chunk("a.pdf", short),
            ChunkOutcome::TooShort
        ));
        let hundred: String = ['a'; 100].iter().collect();
        assert!(matches!(
            p.process_chunk("a.pdf", &hundred),
            ChunkOutcome::TooShort
        ));
        assert_eq!(p.lang_filter.identifier().calls.get(), 0);
    }

    #[test]
    fn english_kept_and_cleaned() {
        let p = pipeline("en");
        let chunk = format!("{}  THE END ----", ENGLISH);
        match p.process_chunk("a.pdf", &chunk) {
            ChunkOutcome::Kept(record) => {
                assert_eq!(record.title(), "a.pdf");
                assert!(record.chunk().ends_with("winter months. The End"));
                assert!(record.chunk().contains("in the camp"));
            }
            other => panic!("expected kept chunk, got {:?}", other),
        }
        assert_eq!(p.lang_filter.identifier().calls.get(), 1);
    }

    #[test]
    fn other_language_skipped() {
        let p = pipeline("fr");
        assert!(matches!(
            p.process_chunk("a.pdf", ENGLISH),
            ChunkOutcome::OtherLanguage(_)
        ));
    }

    #[test_log::test]
    fn unidentified_skipped() {
        let p = pipeline("");
        assert!(matches!(
            p.process_chunk("a.pdf", ENGLISH),
            ChunkOutcome::Unidentified(Error::Unidentified)
        ));
    }

    #[test]
    fn accented_rejected_after_identification() {
        // identified as English, but too many accented letters
        let p = pipeline("en");
        let chunk = format!("{} café crème déjà vu élevé", ENGLISH);
        assert!(matches!(
            p.process_chunk("a.pdf", &chunk),
            ChunkOutcome::Rejected
        ));
    }

    #[test]
    fn missing_source() {
        let p = PdfCorpus::new(
            PathBuf::from("this/folder/does/not/exist"),
            PathBuf::from("dst.json"),
            NeverOverwrite,
        );
        assert!(matches!(p.run(), Err(Error::MissingSource(_))));
    }

    #[test]
    fn no_pdf_in_source() {
        let src = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("notes.txt"), b"not a pdf").unwrap();
        std::fs::write(src.path().join("UPPER.PDF"), b"wrong case").unwrap();
        std::fs::create_dir(src.path().join("folder.pdf")).unwrap();

        let dst = src.path().join("out.json");
        let p = PdfCorpus::new(src.path().to_path_buf(), dst.clone(), NeverOverwrite);
        assert!(matches!(p.run(), Err(Error::NoDocuments(_))));
        assert!(!dst.exists());
    }

    #[test]
    fn paths_sorted_and_filtered() {
        let src = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.pdf", "c.txt", "d.PDF"] {
            std::fs::write(src.path().join(name), b"").unwrap();
        }

        let p = PdfCorpus::new(
            src.path().to_path_buf(),
            PathBuf::from("dst.json"),
            NeverOverwrite,
        );
        let names: Vec<String> = p
            .get_paths()
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn invalid_pdf_stops_run() {
        let src = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("broken.pdf"), b"garbage").unwrap();
        let dst = src.path().join("out.json");

        let p = PdfCorpus::new(src.path().to_path_buf(), dst.clone(), NeverOverwrite);
        assert!(matches!(p.run(), Err(Error::Pdf { .. })));
        assert!(!dst.exists());
    }
}
