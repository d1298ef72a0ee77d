/*! JSON corpus writer.

Writes the whole corpus in one go:
```json
[
  {
    "title": "report.pdf",
    "chunk": "The committee met..."
  }
]
```
Non-ASCII characters are written as is, records keep their insertion order.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::pipelines::pdfcorpus::ChunkRecord;

use super::OverwritePolicy;

/// What happened to the destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// destination existed and overwriting was declined. Nothing was written.
    Cancelled,
}

pub struct CorpusWriter<P: OverwritePolicy> {
    dst: PathBuf,
    policy: P,
}

impl<P: OverwritePolicy> CorpusWriter<P> {
    pub fn new(dst: &Path, policy: P) -> Self {
        Self {
            dst: dst.to_path_buf(),
            policy,
        }
    }

    /// Serialize `records` into the destination file, replacing its content.
    ///
    /// If the file already exists, the policy is asked first.
    pub fn write(&self, records: &[ChunkRecord]) -> Result<WriteOutcome, Error> {
        if self.dst.exists() {
            debug!("{:?} exists, asking for confirmation", self.dst);
            if !self.policy.confirm(&self.dst)? {
                info!("not overwriting {:?}", self.dst);
                return Ok(WriteOutcome::Cancelled);
            }
        }

        let content = serde_json::to_vec_pretty(records)?;
        std::fs::write(&self.dst, content)?;
        info!("wrote {} records to {:?}", records.len(), self.dst);

        Ok(WriteOutcome::Written(self.dst.clone()))
    }
}
