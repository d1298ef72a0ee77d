//! # pdf-corpus
//!
//! Extract and clean text from PDF files, and save to JSON.
//!
//! ```sh
//! pdf-corpus <pdf-dir> <output-json>
//! ```
//!
//! Logging defaults to `info`, use `RUST_LOG` to change it.
use env_logger::Env;
use structopt::StructOpt;

use pdf_corpus::error::Error;
use pdf_corpus::io::writer::Prompt;
use pdf_corpus::io::WriteOutcome;
use pdf_corpus::pipelines::pdfcorpus::Summary;
use pdf_corpus::pipelines::{PdfCorpus, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn run(opt: cli::PdfCorpus) -> Result<(), Error> {
    info!("pdf-corpus {}", <PdfCorpus<Prompt> as Pipeline<Summary>>::version());
    let p = PdfCorpus::new(opt.pdf_dir, opt.output_json, Prompt);
    let summary = p.run()?;

    match summary.outcome {
        WriteOutcome::Written(dst) => info!("Data saved to {:?}.", dst),
        WriteOutcome::Cancelled => info!("Operation cancelled."),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = cli::PdfCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
