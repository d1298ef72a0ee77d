/*! Input sources.

Sources open input documents and expose their textual content.
Only PDF documents are supported, see [pdf].
!*/
pub mod pdf;

pub use pdf::PdfDocument;
