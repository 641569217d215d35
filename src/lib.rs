//! Rule-based classification of genetic diseases into nosology groups
//!
//! Diseases are described by their annotations with terms of the Human
//! Phenotype Ontology. Each nosology group ([`Category`]) carries one or more
//! rule predicates ([`Definition`]) and a gold standard of known members.
//!
//! # Architecture
//!
//! - [`Ontology`]: the `is_a` graph with cached ancestors, answering
//!   [`AncestorQuery`]s
//! - [`annotations`]: diseases with their genes and phenotype annotations
//! - [`nosology`]: rule evaluation, category membership and the report
//! - [`parser`]: the data files for all of the above
//!
//! # Example
//!
//! ```
//! use nosology::builder::Builder;
//! use nosology::HpoTermId;
//!
//! let mut builder = Builder::new();
//! builder.add_term("All", 1u32, []);
//! builder.add_term("Mode of inheritance", 5u32, [HpoTermId::from(1u32)]);
//! builder.add_term("Phenotypic abnormality", 118u32, [HpoTermId::from(1u32)]);
//! builder.add_term("Onset", 3674u32, [HpoTermId::from(1u32)]);
//! builder.add_term("Abnormality of the skeletal system", 924u32, [HpoTermId::from(118u32)]);
//! builder.add_term("Ligamentous laxity", 1380u32, [HpoTermId::from(924u32)]);
//! let ontology = builder.terms_complete().connect_all_terms()?.build()?;
//!
//! assert!(ontology.is_ancestor_of(924u32.into(), 1380u32.into())?);
//! assert!(ontology.is_ancestor_of(118u32.into(), 1380u32.into())?);
//! assert!(!ontology.is_ancestor_of(1u32.into(), 1380u32.into())?);
//! # Ok::<(), nosology::HpoError>(())
//! ```

use std::num::ParseIntError;
use thiserror::Error;

pub mod annotations;
pub mod nosology;
pub mod parser;
pub mod term;

mod ontology;

#[cfg(test)]
pub(crate) mod fixtures;

pub use annotations::{DiseaseAnnotation, DiseaseId, Diseases};
pub use nosology::{Category, Definition, Nosology};
pub use ontology::builder;
pub use ontology::{AncestorQuery, Ontology};
pub use term::{HpoTerm, HpoTermId};

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_ALL_PARENTS: usize = 30;

/// The `Phenotypic abnormality` term, root of all phenotypic features
///
/// Ancestor queries never expand beyond this term
pub const PHENOTYPE_ID: HpoTermId = HpoTermId::from_u32(118);

/// The `Onset` term, root of all age-of-onset terms
pub const ONSET_ID: HpoTermId = HpoTermId::from_u32(3674);

/// The `Mode of inheritance` term
pub const INHERITANCE_ID: HpoTermId = HpoTermId::from_u32(5);

/// Name of the ontology file inside the data folder
pub const OBO_FILENAME: &str = "hp.obo";

/// Folder with one annotation file per disease, e.g. `OMIM-100800.tab`
pub const ANNOTATION_DIRNAME: &str = "annotated";

/// Name of the OMIM morbid map file used to add disease genes
pub const MORBIDMAP_FILENAME: &str = "morbidmap";

/// Folder with one rule file per nosology category
pub const NOSOLOGY_DIRNAME: &str = "nosology";

/// File inside [`NOSOLOGY_DIRNAME`] listing the rule files in their curated order
pub const CATEGORY_ORDER_FILENAME: &str = "order.txt";

/// Main Error type for this crate
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HpoError {
    /// The term is not present in the ontology
    #[error("term {0} does not exist")]
    UnknownTerm(HpoTermId),
    /// A term declares a parent that is not present in the ontology
    #[error("term {child} has an unknown parent {parent}")]
    UnresolvedParent {
        /// The term that declares the parent
        child: HpoTermId,
        /// The missing parent
        parent: HpoTermId,
    },
    /// One of the distinguished anchor terms is missing
    #[error("the ontology does not contain the anchor term {0}")]
    MissingAnchor(HpoTermId),
    /// The string is not a valid `HP:nnnnnnn` identifier
    #[error("invalid HPO term id: {0}")]
    InvalidTermId(String),
    /// A rule file contains invalid content
    #[error("invalid category definition: {0}")]
    InvalidRule(String),
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Failed to open or read a file
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Input data is in an unexpected format
    #[error("invalid data: {0}")]
    InvalidInput(String),
    /// The members of a category have already been determined
    #[error("members of category {0} have already been determined")]
    AlreadyEvaluated(String),
}

impl From<ParseIntError> for HpoError {
    fn from(_: ParseIntError) -> Self {
        HpoError::ParseIntError
    }
}

/// Shortcut for `Result<T, HpoError>`
pub type HpoResult<T> = Result<T, HpoError>;
