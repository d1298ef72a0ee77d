//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Extract and clean text from PDF files, and save to JSON.
///
/// ```sh
/// pdf-corpus 1.0.0
/// Extract and clean text from PDF files, and save to JSON.
///
/// USAGE:
///     pdf-corpus <pdf-dir> <output-json>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -v, --version    Prints version information
///
/// ARGS:
///     <pdf-dir>        Directory containing PDF files.
///     <output-json>    Output JSON file path.
/// ```
#[structopt(
    name = "pdf-corpus",
    about = "Extract and clean text from PDF files, and save to JSON.",
    version_short = "v"
)]
pub struct PdfCorpus {
    #[structopt(parse(from_os_str), help = "Directory containing PDF files.")]
    pub pdf_dir: PathBuf,
    #[structopt(parse(from_os_str), help = "Output JSON file path.")]
    pub output_json: PathBuf,
}
