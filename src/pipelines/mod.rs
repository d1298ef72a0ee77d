//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation,
//! and the [PdfCorpus] pipeline that builds a JSON corpus out of a PDF folder.
pub mod pdfcorpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use pdfcorpus::PdfCorpus;
pub use pipeline::Pipeline;
