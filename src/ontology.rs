use core::fmt::Debug;
use std::path::Path;

use crate::parser;
use crate::term::internal::HpoTermInternal;
use crate::term::{HpoGroup, HpoTerm};
use crate::{HpoError, HpoResult, HpoTermId};
use crate::{INHERITANCE_ID, ONSET_ID, PHENOTYPE_ID};

pub mod builder;
mod termarena;
use termarena::Arena;

/// Answers whether one term is equal to or an ancestor of another term
///
/// This is the only capability that rule evaluation needs from the
/// ontology. [`Ontology`] is the canonical implementation, other
/// implementations can be used to test rules in isolation.
pub trait AncestorQuery {
    /// Returns `true` if `ancestor` is equal to `descendant` or reachable
    /// from `descendant` via `is_a` relationships
    ///
    /// # Errors
    ///
    /// [`HpoError::UnknownTerm`] if either term does not exist
    fn is_ancestor_of(&self, ancestor: HpoTermId, descendant: HpoTermId) -> HpoResult<bool>;

    /// Returns the name of the term, or `"?"` if it does not exist
    fn term_name(&self, term_id: HpoTermId) -> &str;
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` contains all [`HpoTerm`]s and their `is_a` relationships
///
/// The ontology is built once, using the [`builder::Builder`], and is
/// immutable afterwards. Its main purpose is answering ancestor queries
/// ([`Ontology::is_ancestor_of`]) for the classification of diseases.
///
/// # Ancestor boundary
///
/// All terms share the same root term `All`. Upward traversal stops at
/// `Phenotypic abnormality` ([`PHENOTYPE_ID`]), so phenotypic features are
/// never considered descendants of `All` or of terms that are only
/// reachable through it. `Phenotypic abnormality` itself is a regular
/// ancestor of all phenotypic features.
///
/// ```mermaid
/// graph TD
/// HP:0000001["HP:0000001<br>
/// All"]
/// HP:0000001 --> HP:0000005
/// HP:0000001 --> HP:0000118
/// HP:0000001 --> HP:0012823
/// HP:0000005["HP:0000005<br>
/// Mode of inheritance"]
/// HP:0000118["HP:0000118<br>
/// Phenotypic abnormality"]
/// HP:0000118 --> HP:0000924
/// HP:0012823["HP:0012823<br>
/// Clinical modifier"]
/// HP:0012823 --> HP:0003674
/// HP:0003674["HP:0003674<br>
/// Onset"]
/// HP:0000924["HP:0000924<br>
/// Abnormality of the skeletal system"]
/// HP:0000924 --> HP:0001380
/// HP:0001380["HP:0001380<br>
/// Ligamentous laxity"]
/// ```
///
/// # Examples
///
/// ```
/// use nosology::builder::Builder;
/// use nosology::HpoTermId;
///
/// let mut builder = Builder::new();
/// builder.add_term("All", 1u32, []);
/// builder.add_term("Mode of inheritance", 5u32, [1u32.into()]);
/// builder.add_term("Phenotypic abnormality", 118u32, [1u32.into()]);
/// builder.add_term("Clinical modifier", 12823u32, [1u32.into()]);
/// builder.add_term("Onset", 3674u32, [12823u32.into()]);
/// builder.add_term("Abnormality of the skeletal system", 924u32, [118u32.into()]);
/// builder.add_term("Ligamentous laxity", 1380u32, [924u32.into()]);
///
/// let ontology = builder.terms_complete().connect_all_terms().unwrap().build().unwrap();
///
/// let root = HpoTermId::from(118u32);
/// let skeletal = HpoTermId::from(924u32);
/// let laxity = HpoTermId::from(1380u32);
///
/// assert!(ontology.is_ancestor_of(skeletal, laxity).unwrap());
/// assert!(!ontology.is_ancestor_of(laxity, skeletal).unwrap());
/// assert!(ontology.is_ancestor_of(root, laxity).unwrap());
///
/// // `All` is beyond the boundary for phenotypic features...
/// assert!(!ontology.is_ancestor_of(1u32.into(), laxity).unwrap());
/// // ...but not for other branches
/// assert!(ontology.is_ancestor_of(1u32.into(), 3674u32.into()).unwrap());
/// ```
pub struct Ontology {
    hpo_terms: Arena,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.hpo_terms.len())
    }
}

/// Public API of the Ontology
///
/// Those methods are all safe to use
impl Ontology {
    pub(crate) fn new(hpo_terms: Arena) -> Self {
        Self { hpo_terms }
    }

    /// Initialize the [`Ontology`] from the `hp.obo` file inside `folder`
    ///
    /// # Errors
    ///
    /// See [`Ontology::from_obo`]
    pub fn from_standard<P: AsRef<Path>>(folder: P) -> HpoResult<Self> {
        Self::from_obo(folder.as_ref().join(crate::OBO_FILENAME))
    }

    /// Initialize the [`Ontology`] from an OBO file
    ///
    /// # Errors
    ///
    /// - obo file not present or available: [`HpoError::CannotOpenFile`]
    /// - a term contains an invalid id: [`HpoError::InvalidTermId`]
    /// - a parent term does not exist: [`HpoError::UnresolvedParent`]
    /// - an anchor term is missing: [`HpoError::MissingAnchor`]
    pub fn from_obo<P: AsRef<Path>>(filename: P) -> HpoResult<Self> {
        parser::hp_obo::read_obo_file(filename)?
            .terms_complete()
            .connect_all_terms()?
            .build()
    }

    /// Returns the number of HPO-Terms in the Ontology
    pub fn len(&self) -> usize {
        self.hpo_terms.len()
    }

    /// Returns `true` if the Ontology does not contain any HPO-Terms
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`HpoTerm`] of the provided [`HpoTermId`]
    ///
    /// If no such term is present in the Ontolgy, `None` is returned
    pub fn hpo<I: Into<HpoTermId>>(&self, term_id: I) -> Option<HpoTerm> {
        HpoTerm::try_new(self, term_id.into()).ok()
    }

    /// Returns an Iterator of all [`HpoTerm`]s from the Ontology
    pub fn hpos(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the `Phenotypic abnormality` term
    pub fn phenotype_root(&self) -> HpoTerm {
        self.anchor(PHENOTYPE_ID)
    }

    /// Returns the `Onset` term
    pub fn onset_root(&self) -> HpoTerm {
        self.anchor(ONSET_ID)
    }

    /// Returns the `Mode of inheritance` term
    pub fn inheritance_root(&self) -> HpoTerm {
        self.anchor(INHERITANCE_ID)
    }

    /// Returns `true` if `ancestor` is the same term as `descendant` or
    /// if `descendant` is a direct or indirect child of `ancestor`
    ///
    /// This uses the cached ancestors of every term and does not
    /// traverse the ontology.
    ///
    /// # Errors
    ///
    /// [`HpoError::UnknownTerm`] if either term is not present
    pub fn is_ancestor_of(&self, ancestor: HpoTermId, descendant: HpoTermId) -> HpoResult<bool> {
        if self.get(ancestor).is_none() {
            return Err(HpoError::UnknownTerm(ancestor));
        }
        let term = self
            .get(descendant)
            .ok_or(HpoError::UnknownTerm(descendant))?;
        if ancestor == descendant {
            return Ok(true);
        }
        Ok(term.all_parents().contains(&ancestor))
    }

    /// Same as [`Ontology::is_ancestor_of`], but walks up the ontology
    /// from `descendant` instead of using the cached ancestors
    ///
    /// The walk does not expand `Phenotypic abnormality` any further.
    /// Every term is visited at most once, even if the ontology contains cycles.
    ///
    /// # Errors
    ///
    /// [`HpoError::UnknownTerm`] if either term is not present
    pub fn is_ancestor_by_traversal(
        &self,
        ancestor: HpoTermId,
        descendant: HpoTermId,
    ) -> HpoResult<bool> {
        if self.get(ancestor).is_none() {
            return Err(HpoError::UnknownTerm(ancestor));
        }
        let term = self
            .get(descendant)
            .ok_or(HpoError::UnknownTerm(descendant))?;
        if ancestor == descendant {
            return Ok(true);
        }

        let mut visited = HpoGroup::new();
        let mut candidates = vec![term];
        while let Some(candidate) = candidates.pop() {
            for parent in candidate.parents() {
                if parent == ancestor {
                    return Ok(true);
                }
                if parent == PHENOTYPE_ID || !visited.insert(parent) {
                    continue;
                }
                candidates.push(self.get_unchecked(parent));
            }
        }
        Ok(false)
    }

    /// Returns the name of the term or `"?"` if no such term exists
    ///
    /// Use this only for display purposes
    pub fn term_name(&self, term_id: HpoTermId) -> &str {
        self.get(term_id).map_or("?", HpoTermInternal::name)
    }
}

/// Crate-only functions for accessing terms
impl Ontology {
    /// Returns the `HpoTermInternal` with the given `HpoTermId`
    ///
    /// Returns `None` if no such term is present
    pub(crate) fn get<I: Into<HpoTermId>>(&self, term_id: I) -> Option<&HpoTermInternal> {
        self.hpo_terms.get(term_id.into())
    }

    /// Returns the `HpoTermInternal` with the given `HpoTermId`
    ///
    /// This method should only be called if the caller is sure that the term actually
    /// exists, e.g. during an iteration of all `HpoTermId`s.
    ///
    /// # Panics
    ///
    /// This method will panic if the `term_id` is not present in the Ontology
    pub(crate) fn get_unchecked<I: Into<HpoTermId>>(&self, term_id: I) -> &HpoTermInternal {
        self.hpo_terms.get_unchecked(term_id.into())
    }

    /// Anchors are checked by the builder, so they are always present
    fn anchor(&self, term_id: HpoTermId) -> HpoTerm {
        HpoTerm::new(self, self.get_unchecked(term_id))
    }
}

impl AncestorQuery for Ontology {
    fn is_ancestor_of(&self, ancestor: HpoTermId, descendant: HpoTermId) -> HpoResult<bool> {
        Ontology::is_ancestor_of(self, ancestor, descendant)
    }

    fn term_name(&self, term_id: HpoTermId) -> &str {
        Ontology::term_name(self, term_id)
    }
}

/// Iterates the Ontology and yields [`HpoTerm`]s
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, HpoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> std::iter::Iterator for Iter<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|term| HpoTerm::new(self.ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = HpoTerm<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.hpo_terms.values(),
            ontology: self,
        }
    }
}
