//! [`HpoTerm`]s are the nodes of the phenotype ontology
//!
//! Each term has a unique [`HpoTermId`] and a name and is connected to
//! its parents and children through `is_a` relationships.

use crate::Ontology;

mod group;
mod hpoterm;
mod hpotermid;
pub(crate) mod internal;

pub use group::{HpoGroup, HpoTermIds};
pub use hpoterm::HpoTerm;
pub use hpotermid::HpoTermId;

/// The direct and indirect parents of a term
pub type HpoParents = HpoGroup;

/// The direct children of a term
pub type HpoChildren = HpoGroup;

/// Iterates [`HpoTerm`]s from a referenced [`HpoGroup`]
pub struct HpoTerms<'a> {
    ontology: &'a Ontology,
    group: HpoTermIds<'a>,
}

impl<'a> HpoTerms<'a> {
    /// Constructs a new [`HpoTerms`] iterator
    pub fn new(group: &'a HpoGroup, ontology: &'a Ontology) -> Self {
        HpoTerms {
            group: group.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for HpoTerms<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let term_id = self.group.next()?;
        let term = self.ontology.get(term_id)?;
        Some(HpoTerm::new(self.ontology, term))
    }
}
