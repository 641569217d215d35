use crate::term::internal::HpoTermInternal;
use crate::term::{HpoChildren, HpoParents, HpoTermId, HpoTerms};
use crate::HpoError;
use crate::HpoResult;
use crate::Ontology;

/// The `HpoTerm` represents a single term from the HP Ontology
///
/// The term is a borrowed view into the [`Ontology`] and holds
/// all relationship data required for path traversals.
#[derive(Debug, Clone, Copy)]
pub struct HpoTerm<'a> {
    id: &'a HpoTermId,
    name: &'a str,
    parents: &'a HpoParents,
    all_parents: &'a HpoParents,
    children: &'a HpoChildren,
    ontology: &'a Ontology,
}

impl<'a> HpoTerm<'a> {
    /// Constructs a new [`HpoTerm`]
    ///
    /// # Errors
    ///
    /// If the given [`HpoTermId`] does not match an existing term
    /// it returns [`HpoError::UnknownTerm`]
    pub fn try_new(ontology: &'a Ontology, term: HpoTermId) -> HpoResult<HpoTerm<'a>> {
        let internal = ontology.get(term).ok_or(HpoError::UnknownTerm(term))?;
        Ok(HpoTerm::new(ontology, internal))
    }

    /// Constructs a new [`HpoTerm`] from an `HpoTermInternal`
    pub(crate) fn new(ontology: &'a Ontology, term: &'a HpoTermInternal) -> HpoTerm<'a> {
        HpoTerm {
            id: term.id(),
            name: term.name(),
            parents: term.parents(),
            all_parents: term.all_parents(),
            children: term.children(),
            ontology,
        }
    }

    /// Returns the [`HpoTermId`] of the term
    ///
    /// e.g.: `HP:0012345`
    pub fn id(&self) -> HpoTermId {
        *self.id
    }

    /// Returns the name of the term
    ///
    /// e.g.: `Abnormality of the nervous system`
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns an iterator of the direct parents of the term
    pub fn parents(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.parents, self.ontology)
    }

    /// Returns the [`HpoTermId`]s of the direct parents
    pub fn parent_ids(&self) -> &'a HpoParents {
        self.parents
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.children, self.ontology)
    }

    /// Returns the [`HpoTermId`]s of the direct children
    pub fn children_ids(&self) -> &'a HpoChildren {
        self.children
    }

    /// Returns the [`HpoTermId`]s of all direct and indirect parents
    ///
    /// The ancestors do not extend beyond the `Phenotypic abnormality`
    /// term ([`crate::PHENOTYPE_ID`]). `Phenotypic abnormality` itself is
    /// part of the ancestors, but its own parents are not.
    pub fn all_parent_ids(&self) -> &'a HpoParents {
        self.all_parents
    }

    /// Returns an iterator of the direct and indirect parents of the term
    pub fn all_parents(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.all_parents, self.ontology)
    }

    /// Returns `true` if `self` is a child (direct or indirect) of `other`
    pub fn child_of(&self, other: &HpoTerm) -> bool {
        self.all_parents.contains(other.id)
    }

    /// Returns `true` if `self` is a parent (direct or indirect) of `other`
    pub fn parent_of(&self, other: &HpoTerm) -> bool {
        other.child_of(self)
    }
}

impl PartialEq for HpoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HpoTerm<'_> {}
