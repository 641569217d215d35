//! Classification of diseases into nosology groups
//!
//! A [`Nosology`] is the ordered list of all [`Category`]s. Each category
//! carries one or more [`Definition`]s, rule predicates that decide whether a
//! disease belongs to it, and a gold standard of known members.
//!
//! The classification runs in three steps:
//!
//! 1. Load all categories, including every gold standard
//! 2. [`Nosology::classify`] determines the members of each category
//! 3. [`Nosology::report`] compares the members to the gold standards and
//!    attributes new predictions to other categories
//!
//! # Examples
//!
//! ```
//! use nosology::builder::Builder;
//! use nosology::{Category, Definition, DiseaseAnnotation, Diseases, HpoTermId, Nosology};
//!
//! let mut builder = Builder::new();
//! builder.add_term("All", 1u32, []);
//! builder.add_term("Mode of inheritance", 5u32, [HpoTermId::from(1u32)]);
//! builder.add_term("Phenotypic abnormality", 118u32, [HpoTermId::from(1u32)]);
//! builder.add_term("Onset", 3674u32, [HpoTermId::from(1u32)]);
//! let ontology = builder.terms_complete().connect_all_terms().unwrap().build().unwrap();
//!
//! let mut achondroplasia = DiseaseAnnotation::new(100800u32.into(), "Achondroplasia");
//! achondroplasia.add_gene("FGFR3");
//! let mut li_fraumeni = DiseaseAnnotation::new(151623u32.into(), "Li-Fraumeni syndrome");
//! li_fraumeni.add_gene("TP53");
//! let diseases: Diseases = [achondroplasia, li_fraumeni].into_iter().collect();
//!
//! let mut definition = Definition::builder();
//! definition.gene("FGFR3");
//! let mut category = Category::new("FGFR3 group", 1);
//! category.add_gold_standard(100800u32.into(), "Achondroplasia");
//! category.add_definition(definition.build());
//!
//! let mut nosology = Nosology::new();
//! nosology.push(category);
//! nosology.classify(&diseases, &ontology).unwrap();
//!
//! let recovery = nosology.categories()[0].recovery().unwrap();
//! assert_eq!(recovery.recovered(), 1);
//! assert_eq!(recovery.total(), 1);
//! assert!(nosology
//!     .report(&diseases, &ontology)
//!     .contains("I got 1/1 (100.0%) of the gold standard diseases."));
//! ```
use std::fs;
use std::path::Path;

use tracing::info;

use crate::annotations::{DiseaseId, Diseases};
use crate::{parser, AncestorQuery, HpoError, HpoResult};

mod category;
mod definition;
mod evaluation;
mod report;

pub use category::{Category, GoldStandard, Membership, Recovery};
pub use definition::{Definition, DefinitionBuilder, MinimumCount};
pub use evaluation::satisfies;

/// All categories in their curated order
#[derive(Debug, Default, Clone)]
pub struct Nosology {
    categories: Vec<Category>,
}

impl Nosology {
    /// Constructs a new, empty [`Nosology`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all categories from the [`crate::NOSOLOGY_DIRNAME`] inside `folder`
    ///
    /// # Errors
    ///
    /// See [`parser::rules::load_nosology`]
    pub fn from_standard<P: AsRef<Path>>(folder: P) -> HpoResult<Self> {
        parser::rules::load_nosology(folder.as_ref().join(crate::NOSOLOGY_DIRNAME))
    }

    /// Appends a category
    ///
    /// A category without any definition receives a single trivial one.
    pub fn push(&mut self, mut category: Category) {
        category.ensure_definition();
        self.categories.push(category);
    }

    /// Returns the number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if there are no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// All categories in load order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the category with the given name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// Determines the members of every category
    ///
    /// # Errors
    ///
    /// [`HpoError::AlreadyEvaluated`] if the nosology was classified before
    pub fn classify<Q: AncestorQuery + ?Sized>(
        &mut self,
        diseases: &Diseases,
        query: &Q,
    ) -> HpoResult<()> {
        info!(
            "Classifying {} diseases into {} categories",
            diseases.len(),
            self.categories.len()
        );
        for category in &mut self.categories {
            category.find_members(diseases, query)?;
        }
        Ok(())
    }

    /// Returns the first other category whose gold standard contains the disease
    ///
    /// Categories are told apart by identity, so `category` must be borrowed
    /// from this nosology. Other categories with the same name still count.
    pub fn attribution(&self, disease: DiseaseId, category: &Category) -> Option<&Category> {
        self.categories
            .iter()
            .filter(|other| !std::ptr::eq(*other, category))
            .find(|other| other.in_gold_standard(disease))
    }

    /// Renders the plain text report of all categories
    pub fn report<Q: AncestorQuery + ?Sized>(&self, diseases: &Diseases, query: &Q) -> String {
        let mut out = String::new();
        for category in &self.categories {
            // writing into a String does not fail
            let _ = report::write_category(&mut out, self, category, diseases, query);
            out.push('\n');
        }
        out
    }

    /// Writes the report to a file
    ///
    /// # Errors
    ///
    /// [`HpoError::CannotOpenFile`] if the file cannot be written
    pub fn write_report<P: AsRef<Path>, Q: AncestorQuery + ?Sized>(
        &self,
        path: P,
        diseases: &Diseases,
        query: &Q,
    ) -> HpoResult<()> {
        let filename = path.as_ref().display().to_string();
        fs::write(path, self.report(diseases, query))
            .map_err(|_| HpoError::CannotOpenFile(filename))
    }
}

impl<'a> IntoIterator for &'a Nosology {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
