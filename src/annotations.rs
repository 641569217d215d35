//! Diseases and their phenotype annotations
//!
//! Every disease is identified by its OMIM number and annotated with
//! a list of [`AnnotationItem`]s. Each item links the disease to one
//! [`HpoTerm`](crate::HpoTerm) and may be negated (the disease does
//! **not** show the feature) or tagged with the age of [`Onset`].
//!
//! In addition, a disease knows the symbols of its germline disease genes.
//! Those are usually not part of the annotation data itself, but merged in
//! from the OMIM morbid map, see [`crate::parser::morbidmap`].

mod disease;
mod item;

pub use disease::{DiseaseAnnotation, DiseaseId, Diseases};
pub use item::{AnnotationItem, Onset};
