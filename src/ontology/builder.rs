//! Step-by-step construction of the [`Ontology`]
//!
//! The builder moves through three states, so that terms can only be
//! connected once all of them are known and the [`Ontology`] can only
//! be created once all connections are resolved:
//!
//! ```text
//! Builder<LooseCollection>
//! |
//! terms_complete()
//! |
//! V
//! Builder<AllTerms>
//! |
//! connect_all_terms()
//! |
//! V
//! Builder<ConnectedTerms>
//! |
//! build()
//! |
//! V
//! Ontology
//! ```
//!
//! # Examples
//!
//! ```
//! use nosology::builder::Builder;
//! use nosology::HpoTermId;
//!
//! let mut builder = Builder::new();
//! builder.add_term("All", 1u32, []);
//! builder.add_term("Mode of inheritance", 5u32, [1u32.into()]);
//! builder.add_term("Phenotypic abnormality", 118u32, [1u32.into()]);
//! builder.add_term("Onset", 3674u32, [1u32.into()]);
//! builder.add_term("Abnormality of the skeletal system", 924u32, [118u32.into()]);
//!
//! let ontology = builder
//!     .terms_complete()
//!     .connect_all_terms()
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ontology.len(), 5);
//! assert!(ontology.is_ancestor_of(118u32.into(), 924u32.into()).unwrap());
//! ```
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::ontology::termarena::Arena;
use crate::term::internal::HpoTermInternal;
use crate::term::HpoGroup;
use crate::{HpoError, HpoResult, HpoTermId, Ontology};
use crate::{INHERITANCE_ID, ONSET_ID, PHENOTYPE_ID};

/// Terms are being added
pub struct LooseCollection;
/// All terms are present, but not yet connected
pub struct AllTerms;
/// All terms are connected to their parents and children
pub struct ConnectedTerms;

fn transition_state<TX, TY>(builder: Builder<TX>) -> Builder<TY> {
    Builder::<TY> {
        hpo_terms: builder.hpo_terms,
        state: PhantomData,
    }
}

/// Builds an [`Ontology`] from flat term records
///
/// See the [module documentation](self) for the individual steps
pub struct Builder<T> {
    hpo_terms: Arena,
    state: PhantomData<T>,
}

impl Builder<LooseCollection> {
    /// Constructs a new, empty builder
    pub fn new() -> Builder<LooseCollection> {
        Builder::<LooseCollection> {
            hpo_terms: Arena::default(),
            state: PhantomData,
        }
    }

    /// Adds a term together with the ids of its declared `is_a` parents
    ///
    /// The parents do not have to be present yet, they are resolved
    /// in [`Builder::connect_all_terms`].
    /// If a term with the same id was added before, it is replaced.
    pub fn add_term<I, P>(&mut self, name: &str, id: I, parents: P) -> HpoTermId
    where
        I: Into<HpoTermId>,
        P: IntoIterator<Item = HpoTermId>,
    {
        let id = id.into();
        let mut term = HpoTermInternal::new(name.to_string(), id);
        for parent in parents {
            term.declare_parent(parent);
        }
        if self.hpo_terms.insert(term) {
            warn!("{id} is defined more than once, keeping the last definition");
        }
        id
    }

    /// Finishes adding terms
    #[must_use]
    pub fn terms_complete(self) -> Builder<AllTerms> {
        debug!("Collected {} terms", self.hpo_terms.len());
        transition_state(self)
    }
}

impl Default for Builder<LooseCollection> {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<AllTerms> {
    /// Resolves all declared parents and caches the ancestors of every term
    ///
    /// # Errors
    ///
    /// [`HpoError::UnresolvedParent`] if a term declares a parent that
    /// is not present
    pub fn connect_all_terms(mut self) -> HpoResult<Builder<ConnectedTerms>> {
        let mut connections: Vec<(HpoTermId, HpoTermId)> = Vec::new();
        for term in self.hpo_terms.values() {
            for parent in term.declared_parents() {
                if !self.hpo_terms.contains(*parent) {
                    return Err(HpoError::UnresolvedParent {
                        child: *term.id(),
                        parent: *parent,
                    });
                }
                connections.push((*parent, *term.id()));
            }
        }

        for (parent, child) in connections {
            self.add_parent(parent, child);
        }

        for id in self.hpo_terms.keys() {
            let ancestors = self.create_cache_of_grandparents(id);
            *self.hpo_terms.get_unchecked_mut(id).all_parents_mut() = ancestors;
        }
        Ok(transition_state(self))
    }

    /// Add a connection from a term to its parent
    ///
    /// # Panics
    ///
    /// This method will panic if the `parent_id` or `child_id` is not present
    fn add_parent(&mut self, parent_id: HpoTermId, child_id: HpoTermId) {
        let parent = self.hpo_terms.get_unchecked_mut(parent_id);
        parent.add_child(child_id);

        let child = self.hpo_terms.get_unchecked_mut(child_id);
        child.add_parent(parent_id);
    }

    /// Collects all direct and indirect parents of the term
    ///
    /// The walk does not continue above `Phenotypic abnormality`, so the
    /// ancestors of phenotypic features never contain `All`. Every parent
    /// is expanded at most once, which also ends the walk on cyclic
    /// `is_a` relationships.
    fn create_cache_of_grandparents(&self, term_id: HpoTermId) -> HpoGroup {
        let mut ancestors = HpoGroup::new();
        let mut candidates = vec![term_id];
        while let Some(candidate) = candidates.pop() {
            for parent in self.hpo_terms.get_unchecked(candidate).parents() {
                if !ancestors.insert(parent) {
                    continue;
                }
                if parent == term_id {
                    warn!("Cyclic is_a relationship between {term_id} and {candidate}");
                }
                if parent != PHENOTYPE_ID {
                    candidates.push(parent);
                }
            }
        }
        ancestors
    }
}

impl Builder<ConnectedTerms> {
    /// Creates the [`Ontology`]
    ///
    /// # Errors
    ///
    /// [`HpoError::MissingAnchor`] if `Phenotypic abnormality`, `Onset`
    /// or `Mode of inheritance` is not present
    pub fn build(self) -> HpoResult<Ontology> {
        for anchor in [PHENOTYPE_ID, ONSET_ID, INHERITANCE_ID] {
            if !self.hpo_terms.contains(anchor) {
                return Err(HpoError::MissingAnchor(anchor));
            }
        }
        debug!("Created ontology with {} terms", self.hpo_terms.len());
        Ok(Ontology::new(self.hpo_terms))
    }
}

impl<T> Builder<T> {
    /// Returns the number of terms in the builder
    pub fn len(&self) -> usize {
        self.hpo_terms.len()
    }

    /// Returns `true` if no terms were added yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn anchored_builder() -> Builder<LooseCollection> {
        let mut builder = Builder::new();
        builder.add_term("All", 1u32, []);
        builder.add_term("Mode of inheritance", 5u32, [1u32.into()]);
        builder.add_term("Phenotypic abnormality", 118u32, [1u32.into()]);
        builder.add_term("Clinical modifier", 12823u32, [1u32.into()]);
        builder.add_term("Onset", 3674u32, [12823u32.into()]);
        builder
    }

    #[test]
    fn unresolved_parent_is_an_error() {
        let mut builder = anchored_builder();
        builder.add_term("Orphan", 924u32, [999u32.into()]);

        let res = builder.terms_complete().connect_all_terms();
        assert_eq!(
            res.err(),
            Some(HpoError::UnresolvedParent {
                child: 924u32.into(),
                parent: 999u32.into()
            })
        );
    }

    #[test]
    fn parents_can_be_added_after_children() {
        let mut builder = anchored_builder();
        builder.add_term("Child", 2u32, [3u32.into()]);
        builder.add_term("Parent", 3u32, [118u32.into()]);

        let ontology = builder
            .terms_complete()
            .connect_all_terms()
            .unwrap()
            .build()
            .unwrap();
        let child = ontology.hpo(2u32).unwrap();
        assert!(child.all_parent_ids().contains(&3u32.into()));
        assert!(child.all_parent_ids().contains(&118u32.into()));
        assert!(!child.all_parent_ids().contains(&1u32.into()));
    }

    #[test]
    fn missing_anchors_are_an_error() {
        for anchor in [5u32, 118, 3674] {
            let mut builder = Builder::new();
            for (name, id) in [("Inheritance", 5u32), ("Phenotype", 118), ("Onset", 3674)] {
                if id != anchor {
                    builder.add_term(name, id, []);
                }
            }
            let res = builder.terms_complete().connect_all_terms().unwrap().build();
            assert_eq!(res.err(), Some(HpoError::MissingAnchor(anchor.into())));
        }
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        let mut builder = anchored_builder();
        builder.add_term("A", 10u32, [11u32.into(), 118u32.into()]);
        builder.add_term("B", 11u32, [10u32.into()]);

        let ontology = builder
            .terms_complete()
            .connect_all_terms()
            .unwrap()
            .build()
            .unwrap();
        assert!(ontology.is_ancestor_of(10u32.into(), 11u32.into()).unwrap());
        assert!(ontology.is_ancestor_of(11u32.into(), 10u32.into()).unwrap());
        assert!(ontology.is_ancestor_by_traversal(11u32.into(), 10u32.into()).unwrap());
        assert!(!ontology.is_ancestor_by_traversal(5u32.into(), 10u32.into()).unwrap());
        assert!(ontology.is_ancestor_of(118u32.into(), 11u32.into()).unwrap());
    }

    #[test]
    fn cyclic_ancestors_match_traversal() {
        let mut builder = anchored_builder();
        builder.add_term("A", 10u32, [11u32.into(), 118u32.into()]);
        builder.add_term("B", 11u32, [10u32.into()]);
        builder.add_term("C", 12u32, [11u32.into()]);
        builder.add_term("D", 13u32, [14u32.into()]);
        builder.add_term("E", 14u32, [15u32.into()]);
        builder.add_term("F", 15u32, [13u32.into(), 5u32.into()]);

        let ontology = builder
            .terms_complete()
            .connect_all_terms()
            .unwrap()
            .build()
            .unwrap();
        for a in &ontology {
            for b in &ontology {
                assert_eq!(
                    ontology.is_ancestor_of(a.id(), b.id()),
                    ontology.is_ancestor_by_traversal(a.id(), b.id()),
                    "{} -> {}",
                    a.id(),
                    b.id()
                );
            }
        }
        assert!(ontology.is_ancestor_of(118u32.into(), 12u32.into()).unwrap());
        assert!(!ontology.is_ancestor_of(1u32.into(), 12u32.into()).unwrap());
        assert!(ontology.is_ancestor_of(1u32.into(), 13u32.into()).unwrap());
    }

    #[test]
    fn duplicate_terms_are_replaced() {
        let mut builder = anchored_builder();
        builder.add_term("First", 20u32, [118u32.into()]);
        builder.add_term("Second", 20u32, [5u32.into()]);
        assert_eq!(builder.len(), 6);

        let ontology = builder
            .terms_complete()
            .connect_all_terms()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(ontology.term_name(20u32.into()), "Second");
        assert!(ontology.is_ancestor_of(5u32.into(), 20u32.into()).unwrap());
    }
}
