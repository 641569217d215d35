use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::annotations::{DiseaseId, Diseases};
use crate::nosology::{satisfies, Definition};
use crate::{AncestorQuery, DiseaseAnnotation, HpoError, HpoResult};

/// The gold standard of a category, disease ids with a descriptive label
pub type GoldStandard = BTreeMap<DiseaseId, String>;

/// The result of the membership pass of a [`Category`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Membership {
    matched: Vec<DiseaseId>,
    missed: Vec<DiseaseId>,
}

impl Membership {
    /// Diseases that satisfy at least one definition of the category
    pub fn matched(&self) -> &[DiseaseId] {
        &self.matched
    }

    /// Gold standard diseases that do not satisfy any definition
    pub fn missed(&self) -> &[DiseaseId] {
        &self.missed
    }
}

/// Fraction of the gold standard that was recovered by the membership pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    recovered: usize,
    total: usize,
}

impl Recovery {
    /// Number of matched gold standard diseases
    pub fn recovered(&self) -> usize {
        self.recovered
    }

    /// Size of the gold standard
    pub fn total(&self) -> usize {
        self.total
    }

    /// Recovered diseases in percent, `0.0` for an empty gold standard
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.recovered as f64 / self.total as f64
        }
    }
}

/// A nosology group
///
/// A `Category` is defined by one or more [`Definition`]s. A disease is a
/// member if it satisfies any one of them. The gold standard lists the
/// known members of the category and is used to evaluate how well the
/// definitions recover them.
///
/// Categories are immutable except for the [`Membership`], which is
/// determined exactly once by [`Category::find_members`].
///
/// # Examples
///
/// ```
/// use nosology::{Category, Definition};
///
/// let mut definition = Definition::builder();
/// definition.gene("FGFR3");
///
/// let mut category = Category::new("FGFR3 group", 1);
/// category.add_gold_standard(100800u32.into(), "Achondroplasia");
/// category.add_definition(definition.build());
///
/// assert_eq!(category.header(), "1.FGFR3 group");
/// assert!(category.in_gold_standard(100800u32.into()));
/// assert!(category.membership().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    number: u32,
    gold_standard: GoldStandard,
    definitions: Vec<Definition>,
    membership: Option<Membership>,
}

impl Category {
    /// Constructs a new [`Category`] without definitions or gold standard
    ///
    /// `number` is the position in the published nosology, `0` if the
    /// category is not part of it.
    pub fn new(name: &str, number: u32) -> Self {
        Self {
            name: name.to_string(),
            number,
            gold_standard: GoldStandard::new(),
            definitions: Vec::new(),
            membership: None,
        }
    }

    /// The category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The position of the category in the published nosology
    pub fn number(&self) -> u32 {
        self.number
    }

    /// `<number>.<name>`, or only the name if the category has no number
    pub fn header(&self) -> String {
        if self.number > 0 {
            format!("{}.{}", self.number, self.name)
        } else {
            self.name.clone()
        }
    }

    /// Adds a known member of the category
    pub fn add_gold_standard(&mut self, disease: DiseaseId, label: &str) {
        self.gold_standard.insert(disease, label.to_string());
    }

    /// All known members of the category
    pub fn gold_standard(&self) -> &GoldStandard {
        &self.gold_standard
    }

    /// Returns `true` if the disease is a known member of the category
    pub fn in_gold_standard(&self, disease: DiseaseId) -> bool {
        self.gold_standard.contains_key(&disease)
    }

    /// Adds an alternative definition
    pub fn add_definition(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    /// The alternative definitions of the category
    ///
    /// Once added to a [`Nosology`](crate::Nosology), a category without
    /// explicit definitions has a single trivial one
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Returns `true` if the disease satisfies any of the definitions
    pub fn is_member<Q: AncestorQuery + ?Sized>(
        &self,
        disease: &DiseaseAnnotation,
        query: &Q,
    ) -> bool {
        self.definitions
            .iter()
            .any(|definition| satisfies(definition, disease, query))
    }

    /// Evaluates every disease and records the [`Membership`]
    ///
    /// Every disease ends up in at most one of the matched or missed lists.
    /// Diseases that are neither members nor in the gold standard are not
    /// recorded.
    ///
    /// # Errors
    ///
    /// [`HpoError::AlreadyEvaluated`] if the members were determined before
    pub fn find_members<Q: AncestorQuery + ?Sized>(
        &mut self,
        diseases: &Diseases,
        query: &Q,
    ) -> HpoResult<&Membership> {
        if self.membership.is_some() {
            return Err(HpoError::AlreadyEvaluated(self.name.clone()));
        }
        let mut membership = Membership::default();
        for disease in diseases {
            if self.is_member(disease, query) {
                debug!("{} is a member of {}", disease, self.name);
                membership.matched.push(disease.id());
            } else if self.in_gold_standard(disease.id()) {
                membership.missed.push(disease.id());
            }
        }
        info!(
            "{}: {} matched diseases, {} missed gold standard diseases",
            self.name,
            membership.matched.len(),
            membership.missed.len()
        );
        Ok(self.membership.insert(membership))
    }

    /// The result of the membership pass, if it was run
    pub fn membership(&self) -> Option<&Membership> {
        self.membership.as_ref()
    }

    /// The recovered fraction of the gold standard, if the members were determined
    pub fn recovery(&self) -> Option<Recovery> {
        self.membership.as_ref().map(|membership| Recovery {
            recovered: membership
                .matched
                .iter()
                .filter(|id| self.in_gold_standard(**id))
                .count(),
            total: self.gold_standard.len(),
        })
    }

    /// Adds a trivial definition if the category does not have any
    pub(crate) fn ensure_definition(&mut self) {
        if self.definitions.is_empty() {
            self.definitions.push(Definition::default());
        }
    }
}
