/*! Language identification models

Holds an [Identifier] trait for implementing other ones.

The current identifier used is [whatlang](https://github.com/greyblake/whatlang-rs),
a trigram-based detector that ships its profiles in the binary and needs no model file.
!*/
pub(crate) mod identification;
mod identifier;
mod model;
mod tag_convert;

pub use identification::Identification;
pub use identifier::Identifier;
pub use model::WhatLang;
