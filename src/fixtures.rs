//! Small, hand-curated ontology and diseases for unit tests
//!
//! ```text
//! HP:0000001 All
//! ├── HP:0000005 Mode of inheritance
//! │   └── HP:0000007 Autosomal recessive inheritance
//! ├── HP:0000118 Phenotypic abnormality
//! │   ├── HP:0000152 Abnormality of head or neck
//! │   │   └── HP:0001363 Craniosynostosis (also under HP:0011842)
//! │   ├── HP:0000707 Abnormality of the nervous system
//! │   │   ├── HP:0001250 Seizure
//! │   │   └── HP:0001263 Global developmental delay
//! │   └── HP:0000924 Abnormality of the skeletal system
//! │       ├── HP:0001380 Ligamentous laxity
//! │       └── HP:0011842 Abnormality of skeletal morphology
//! │           ├── HP:0001363 Craniosynostosis
//! │           ├── HP:0002652 Skeletal dysplasia
//! │           └── HP:0004322 Short stature
//! └── HP:0012823 Clinical modifier
//!     └── HP:0031797 Clinical course
//!         └── HP:0003674 Onset
//!             ├── HP:0003577 Congenital onset
//!             └── HP:0003623 Neonatal onset
//! ```
use crate::annotations::{AnnotationItem, DiseaseAnnotation, Onset};
use crate::builder::Builder;
use crate::{HpoTermId, Ontology};

const TERMS: [(&str, u32, &[u32]); 19] = [
    ("All", 1, &[]),
    ("Mode of inheritance", 5, &[1]),
    ("Autosomal recessive inheritance", 7, &[5]),
    ("Phenotypic abnormality", 118, &[1]),
    ("Abnormality of head or neck", 152, &[118]),
    ("Abnormality of the nervous system", 707, &[118]),
    ("Seizure", 1250, &[707]),
    ("Global developmental delay", 1263, &[707]),
    ("Abnormality of the skeletal system", 924, &[118]),
    ("Ligamentous laxity", 1380, &[924]),
    ("Abnormality of skeletal morphology", 11842, &[924]),
    ("Craniosynostosis", 1363, &[11842, 152]),
    ("Skeletal dysplasia", 2652, &[11842]),
    ("Short stature", 4322, &[11842]),
    ("Clinical modifier", 12823, &[1]),
    ("Clinical course", 31797, &[12823]),
    ("Onset", 3674, &[31797]),
    ("Congenital onset", 3577, &[3674]),
    ("Neonatal onset", 3623, &[3674]),
];

pub(crate) fn example_ontology() -> Ontology {
    let mut builder = Builder::new();
    for (name, id, parents) in TERMS {
        builder.add_term(name, id, parents.iter().map(|p| HpoTermId::from(*p)));
    }
    builder
        .terms_complete()
        .connect_all_terms()
        .expect("fixture terms are all connected")
        .build()
        .expect("fixture contains all anchors")
}

/// Creates a disease with positive annotations without onset information
pub(crate) fn disease(id: u32, name: &str, genes: &[&str], terms: &[u32]) -> DiseaseAnnotation {
    let mut disease = DiseaseAnnotation::new(id.into(), name);
    for gene in genes {
        disease.add_gene(gene);
    }
    for term in terms {
        disease.add_item(AnnotationItem::new((*term).into(), false, Onset::Unknown));
    }
    disease
}
