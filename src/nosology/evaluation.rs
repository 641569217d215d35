//! Evaluation of a single [`Definition`] against a disease
use tracing::error;

use crate::annotations::DiseaseAnnotation;
use crate::nosology::Definition;
use crate::{AncestorQuery, HpoTermId};

/// Returns `true` if the disease satisfies the definition
///
/// All constraints must hold, they are checked in this order and the
/// evaluation stops at the first failing one:
///
/// 1. Disease gene: at least one of the genes is a disease gene
/// 2. Excluded terms: no positive annotation is (a descendant of) any of them
/// 3. Onset feature: a neonatal or congenital annotation is (a descendant of) it
/// 4. Minimum counts: enough positive annotations below each of the terms
/// 5. Required terms: every term is matched by a positive annotation
/// 6. Optional terms: at least one term is matched by a positive annotation
///
/// Empty constraints are always satisfied. Annotations with a term that is
/// not part of the ontology are logged and never match.
///
/// # Examples
///
/// ```
/// use nosology::annotations::{AnnotationItem, DiseaseAnnotation, Onset};
/// use nosology::builder::Builder;
/// use nosology::nosology::satisfies;
/// use nosology::{Definition, HpoTermId};
///
/// let mut builder = Builder::new();
/// builder.add_term("All", 1u32, []);
/// builder.add_term("Mode of inheritance", 5u32, [HpoTermId::from(1u32)]);
/// builder.add_term("Phenotypic abnormality", 118u32, [HpoTermId::from(1u32)]);
/// builder.add_term("Onset", 3674u32, [HpoTermId::from(1u32)]);
/// builder.add_term("Abnormality of the skeletal system", 924u32, [HpoTermId::from(118u32)]);
/// builder.add_term("Ligamentous laxity", 1380u32, [HpoTermId::from(924u32)]);
/// let ontology = builder.terms_complete().connect_all_terms().unwrap().build().unwrap();
///
/// let mut disease = DiseaseAnnotation::new(100800u32.into(), "Achondroplasia");
/// disease.add_item(AnnotationItem::new(1380u32.into(), false, Onset::Unknown));
///
/// let mut definition = Definition::builder();
/// definition.required(924u32.into());
/// assert!(satisfies(&definition.build(), &disease, &ontology));
///
/// definition.gene("FGFR3");
/// assert!(!satisfies(&definition.build(), &disease, &ontology));
/// ```
pub fn satisfies<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    has_disease_gene(definition, disease)
        && lacks_excluded_features(definition, disease, query)
        && has_onset_feature(definition, disease, query)
        && has_minimum_counts(definition, disease, query)
        && has_required_features(definition, disease, query)
        && has_optional_features(definition, disease, query)
}

fn has_disease_gene(definition: &Definition, disease: &DiseaseAnnotation) -> bool {
    definition.genes().is_empty()
        || definition
            .genes()
            .iter()
            .any(|symbol| disease.has_gene(symbol))
}

fn lacks_excluded_features<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    definition
        .excluded()
        .iter()
        .all(|excluded| {
            !disease
                .positive_annotations()
                .any(|term| matches(query, *excluded, term, disease))
        })
}

fn has_onset_feature<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    let Some(feature) = definition.onset_feature() else {
        return true;
    };
    let mut early_onset = disease
        .neonatal_annotations()
        .chain(disease.congenital_annotations());
    early_onset.any(|term| matches(query, feature, term, disease))
}

fn has_minimum_counts<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    definition.minimum_counts().iter().all(|constraint| {
        count_matches(query, constraint.term(), disease.positive_annotations(), disease)
            >= constraint.minimum()
    })
}

fn has_required_features<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    let satisfied = definition
        .required()
        .iter()
        .filter(|required| {
            disease
                .positive_annotations()
                .any(|term| matches(query, **required, term, disease))
        })
        .count();
    satisfied == definition.required().len()
}

fn has_optional_features<Q: AncestorQuery + ?Sized>(
    definition: &Definition,
    disease: &DiseaseAnnotation,
    query: &Q,
) -> bool {
    definition.optional().is_empty()
        || definition.optional().iter().any(|optional| {
            disease
                .positive_annotations()
                .any(|term| matches(query, *optional, term, disease))
        })
}

fn count_matches<Q: AncestorQuery + ?Sized>(
    query: &Q,
    ancestor: HpoTermId,
    terms: impl Iterator<Item = HpoTermId>,
    disease: &DiseaseAnnotation,
) -> usize {
    terms
        .filter(|term| matches(query, ancestor, *term, disease))
        .count()
}

/// Checks a single rule term against a single annotation
fn matches<Q: AncestorQuery + ?Sized>(
    query: &Q,
    ancestor: HpoTermId,
    term: HpoTermId,
    disease: &DiseaseAnnotation,
) -> bool {
    match query.is_ancestor_of(ancestor, term) {
        Ok(is_ancestor) => is_ancestor,
        Err(err) => {
            error!(
                "Could not compare {} and {} for disease {}: {}",
                ancestor,
                term,
                disease.name(),
                err
            );
            false
        }
    }
}
