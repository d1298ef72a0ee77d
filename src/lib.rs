/*! # pdf-corpus

Builds a JSON text corpus out of a folder of PDF documents.

Text is extracted from each PDF, split into 200-word chunks, filtered by length and language,
cleaned from common OCR artifacts and written along with its source file name.

This project can be used both as a tool, or as a lib to integrate the processing steps into other projects.
See [pipelines::PdfCorpus] for the whole pipeline.
!*/
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod pipelines;
pub mod sources;
pub mod transformers;
