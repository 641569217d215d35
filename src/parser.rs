//! Parsing the input data
//!
//! The parsers produce the data structures the classification works on and
//! can be replaced by any other source of the same data:
//!
//! - [`hp_obo`]: the ontology, into a [`Builder`](crate::builder::Builder)
//! - [`annotation`]: per-disease annotation files, into [`Diseases`](crate::Diseases)
//! - [`morbidmap`]: disease genes, added to existing [`Diseases`](crate::Diseases)
//! - [`rules`]: category rule files, into a [`Nosology`](crate::Nosology)

pub mod annotation;
/// Module to parse `hp.obo` file
pub mod hp_obo;
pub mod morbidmap;
pub mod rules;
