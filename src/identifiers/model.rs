/*! whatlang-based identifier.

Only the top-1 language is kept, along with whatlang's confidence.
!*/
use log::debug;
use whatlang::Detector;

use crate::error::Error;

use super::{tag_convert, Identification, Identifier};

pub struct WhatLang {
    inner: Detector,
}

impl WhatLang {
    pub fn new() -> Self {
        Self {
            inner: Detector::new(),
        }
    }
}

impl Default for WhatLang {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifier for WhatLang {
    fn identify(&self, text: &str) -> Result<Identification, Error> {
        let info = self.inner.detect(text).ok_or(Error::Unidentified)?;
        debug!(
            "whatlang: {} ({:.3}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );

        let label = tag_convert::to_bcp47(info.lang().code())?;
        Ok(Identification::new(label, info.confidence() as f32))
    }
}
