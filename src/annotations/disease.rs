use std::collections::btree_map::Values;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use tracing::{debug, info};

use crate::annotations::{AnnotationItem, Onset};
use crate::parser;
use crate::{HpoError, HpoResult, HpoTermId};

/// A unique identifier for a disease, the OMIM MIM number
#[derive(Clone, Copy, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct DiseaseId {
    inner: u32,
}

impl DiseaseId {
    /// Returns the integer representation of the id
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for DiseaseId {
    type Error = HpoError;
    /// Parses `OMIM:123456`, `MIM:123456` or `123456`
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value
            .strip_prefix("OMIM:")
            .or_else(|| value.strip_prefix("MIM:"))
            .unwrap_or(value);
        Ok(DiseaseId {
            inner: value.trim().parse::<u32>()?,
        })
    }
}

impl From<u32> for DiseaseId {
    fn from(inner: u32) -> Self {
        DiseaseId { inner }
    }
}

impl Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OMIM:{:06}", self.inner)
    }
}

/// A single disease with its phenotype annotations and disease genes
///
/// # Examples
///
/// ```
/// use nosology::annotations::{AnnotationItem, DiseaseAnnotation, Onset};
///
/// let mut disease = DiseaseAnnotation::new(100800u32.into(), "Achondroplasia");
/// disease.add_gene("FGFR3");
/// disease.add_item(AnnotationItem::new(4322u32.into(), false, Onset::Congenital));
/// disease.add_item(AnnotationItem::new(1250u32.into(), true, Onset::Unknown));
///
/// assert!(disease.has_gene("FGFR3"));
/// assert!(!disease.has_gene("fgfr3"));
/// assert_eq!(disease.positive_annotations().count(), 1);
/// assert_eq!(disease.negative_annotations().count(), 1);
/// assert_eq!(disease.to_string(), "OMIM:100800 Achondroplasia [FGFR3]");
/// ```
#[derive(Default, Debug, Clone)]
pub struct DiseaseAnnotation {
    id: DiseaseId,
    name: String,
    genes: Vec<String>,
    items: Vec<AnnotationItem>,
}

impl DiseaseAnnotation {
    /// Initializes a new disease without annotations or genes
    pub fn new(id: DiseaseId, name: &str) -> DiseaseAnnotation {
        DiseaseAnnotation {
            id,
            name: name.to_string(),
            genes: Vec::new(),
            items: Vec::new(),
        }
    }

    /// The unique [`DiseaseId`] of the disease
    pub fn id(&self) -> DiseaseId {
        self.id
    }

    /// The disease name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbols of the germline disease genes
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    /// Returns `true` if `symbol` is one of the disease genes
    ///
    /// Symbols are compared exactly, without any normalization
    pub fn has_gene(&self, symbol: &str) -> bool {
        self.genes.iter().any(|gene| gene == symbol)
    }

    /// Adds a disease gene and returns `true` if it was not present before
    pub fn add_gene(&mut self, symbol: &str) -> bool {
        if self.has_gene(symbol) {
            false
        } else {
            self.genes.push(symbol.to_string());
            true
        }
    }

    /// All positive and negative annotations in their original order
    pub fn items(&self) -> &[AnnotationItem] {
        &self.items
    }

    /// Adds another annotation
    pub fn add_item(&mut self, item: AnnotationItem) {
        self.items.push(item);
    }

    /// Terms the disease is annotated to
    pub fn positive_annotations(&self) -> impl Iterator<Item = HpoTermId> + '_ {
        self.items
            .iter()
            .filter(|item| !item.is_negated())
            .map(AnnotationItem::term)
    }

    /// Terms that are explicitly excluded for the disease
    pub fn negative_annotations(&self) -> impl Iterator<Item = HpoTermId> + '_ {
        self.items
            .iter()
            .filter(|item| item.is_negated())
            .map(AnnotationItem::term)
    }

    /// Terms with neonatal onset
    pub fn neonatal_annotations(&self) -> impl Iterator<Item = HpoTermId> + '_ {
        self.annotations_with_onset(Onset::Neonatal)
    }

    /// Terms with congenital onset
    pub fn congenital_annotations(&self) -> impl Iterator<Item = HpoTermId> + '_ {
        self.annotations_with_onset(Onset::Congenital)
    }

    /// Returns `true` if the disease has at least one annotation
    pub fn is_valid(&self) -> bool {
        !self.items.is_empty()
    }

    fn annotations_with_onset(&self, onset: Onset) -> impl Iterator<Item = HpoTermId> + '_ {
        self.items
            .iter()
            .filter(move |item| item.onset() == onset)
            .map(AnnotationItem::term)
    }
}

impl PartialEq for DiseaseAnnotation {
    fn eq(&self, other: &DiseaseAnnotation) -> bool {
        self.id == other.id
    }
}

impl Eq for DiseaseAnnotation {}

impl Display for DiseaseAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let genes = if self.genes.is_empty() {
            String::from("-")
        } else {
            self.genes.join(",")
        };
        write!(f, "{} {} [{}]", self.id, self.name, genes)
    }
}

/// All diseases that are classified, ordered by [`DiseaseId`]
#[derive(Default, Debug)]
pub struct Diseases {
    inner: BTreeMap<DiseaseId, DiseaseAnnotation>,
}

impl Diseases {
    /// Constructs a new, empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all diseases from the standard folder layout
    ///
    /// Annotations are read from [`crate::ANNOTATION_DIRNAME`]. If the
    /// folder also contains the [`crate::MORBIDMAP_FILENAME`], disease genes
    /// are added from it.
    ///
    /// # Errors
    ///
    /// See [`parser::annotation::load_diseases`] and
    /// [`parser::morbidmap::add_disease_genes`]
    pub fn from_standard<P: AsRef<Path>>(folder: P) -> HpoResult<Self> {
        let folder = folder.as_ref();
        let mut diseases =
            parser::annotation::load_diseases(folder.join(crate::ANNOTATION_DIRNAME))?;

        let morbidmap = folder.join(crate::MORBIDMAP_FILENAME);
        if morbidmap.is_file() {
            let n = parser::morbidmap::add_disease_genes(morbidmap, &mut diseases)?;
            info!("Added disease genes to {n} diseases");
        } else {
            debug!("No morbid map present, diseases have no genes");
        }
        Ok(diseases)
    }

    /// Adds a disease and returns the previous disease with the same id, if any
    pub fn insert(&mut self, disease: DiseaseAnnotation) -> Option<DiseaseAnnotation> {
        self.inner.insert(disease.id(), disease)
    }

    /// Returns the disease with the given id
    pub fn get(&self, id: &DiseaseId) -> Option<&DiseaseAnnotation> {
        self.inner.get(id)
    }

    /// Returns a mutable reference to the disease with the given id
    pub fn get_mut(&mut self, id: &DiseaseId) -> Option<&mut DiseaseAnnotation> {
        self.inner.get_mut(id)
    }

    /// Returns the number of diseases
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the collection does not contain any disease
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates all diseases, ordered by id
    pub fn iter(&self) -> Values<'_, DiseaseId, DiseaseAnnotation> {
        self.inner.values()
    }
}

impl<'a> IntoIterator for &'a Diseases {
    type Item = &'a DiseaseAnnotation;
    type IntoIter = Values<'a, DiseaseId, DiseaseAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<DiseaseAnnotation> for Diseases {
    fn from_iter<T: IntoIterator<Item = DiseaseAnnotation>>(iter: T) -> Self {
        let mut diseases = Diseases::new();
        for disease in iter {
            diseases.insert(disease);
        }
        diseases
    }
}
