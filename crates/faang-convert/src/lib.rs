//! Conversion of FAANG sample submissions to BioSamples JSON.
//!
//! Each sample becomes a BioSamples record with its fields as attributes,
//! its `same_as`/`child_of`/`derived_from` links as relationships and the
//! taxon of its organism, inherited along `derived_from` when needed.

#![deny(unsafe_code)]

pub mod biosample;
pub mod converter;
pub mod error;
pub mod taxon;

pub use biosample::{Attribute, BioSample, Relationship, RelationshipNature, TermUrl};
pub use converter::{BioSampleConverter, SPECIAL_SHEETS};
pub use error::{ConversionError, Result};
pub use taxon::{BioSampleLookup, StaticBioSampleLookup, Taxon, TaxonResolver};
