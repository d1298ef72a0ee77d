//! Overwrite confirmation.
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::Error;

/// Decides whether an existing destination file can be overwritten.
pub trait OverwritePolicy {
    fn confirm(&self, dst: &Path) -> Result<bool, Error>;
}

/// Interactive confirmation on stdin/stderr.
///
/// Only `y` or `Y` confirms, anything else (including an empty line) declines.
#[derive(Debug, Default)]
pub struct Prompt;

impl OverwritePolicy for Prompt {
    fn confirm(&self, dst: &Path) -> Result<bool, Error> {
        let stdin = std::io::stdin();
        let mut stderr = std::io::stderr();
        ask(dst, &mut stdin.lock(), &mut stderr)
    }
}

/// Write the overwrite question for `dst` to `output` and read the answer from `input`.
pub fn ask<R: BufRead, W: Write>(dst: &Path, input: &mut R, output: &mut W) -> Result<bool, Error> {
    write!(
        output,
        "{} already exists. Overwrite? (y/N): \n> ",
        dst.display()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_end_matches(&['\r', '\n'][..]).eq_ignore_ascii_case("y"))
}

#[derive(Debug, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn confirm(&self, _dst: &Path) -> Result<bool, Error> {
        Ok(true)
    }
}

#[derive(Debug, Default)]
pub struct NeverOverwrite;

impl OverwritePolicy for NeverOverwrite {
    fn confirm(&self, _dst: &Path) -> Result<bool, Error> {
        Ok(false)
    }
}

impl<P: OverwritePolicy + ?Sized> OverwritePolicy for &P {
    fn confirm(&self, dst: &Path) -> Result<bool, Error> {
        (**self).confirm(dst)
    }
}
