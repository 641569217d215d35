use nosology::annotations::DiseaseId;
use nosology::{AncestorQuery, Diseases, HpoError, HpoTermId, Nosology, Ontology};

fn id(n: u32) -> HpoTermId {
    HpoTermId::from(n)
}

fn load() -> (Ontology, Diseases, Nosology) {
    let ontology = Ontology::from_obo("tests/small.obo").expect("small.obo is valid");
    let diseases = Diseases::from_standard("tests").expect("annotations are valid");
    let nosology = Nosology::from_standard("tests").expect("rule files are valid");
    (ontology, diseases, nosology)
}

#[test]
fn ontology_from_obo() {
    let ontology = Ontology::from_obo("tests/small.obo").unwrap();
    assert_eq!(ontology.len(), 19);
    assert_eq!(ontology.phenotype_root().name(), "Phenotypic abnormality");
    assert_eq!(ontology.onset_root().name(), "Onset");
    assert_eq!(ontology.inheritance_root().name(), "Mode of inheritance");

    assert!(ontology.is_ancestor_of(id(924), id(1380)).unwrap());
    assert!(!ontology.is_ancestor_of(id(1380), id(924)).unwrap());
    assert!(ontology.is_ancestor_of(id(118), id(1380)).unwrap());
    assert!(!ontology.is_ancestor_of(id(1), id(1380)).unwrap());
    assert_eq!(
        ontology.is_ancestor_of(id(924), id(99_999)),
        Err(HpoError::UnknownTerm(id(99_999)))
    );
}

#[test]
fn cached_and_traversal_queries_agree() {
    let ontology = Ontology::from_obo("tests/small.obo").unwrap();
    for a in &ontology {
        for b in &ontology {
            assert_eq!(
                ontology.is_ancestor_of(a.id(), b.id()).unwrap(),
                ontology.is_ancestor_by_traversal(a.id(), b.id()).unwrap(),
                "{} {}",
                a.id(),
                b.id()
            );
        }
    }
}

#[test]
fn diseases_with_genes() {
    let (_, diseases, _) = load();
    assert_eq!(diseases.len(), 6);

    let achondroplasia = diseases.get(&DiseaseId::from(100_800u32)).unwrap();
    assert_eq!(achondroplasia.genes(), ["FGFR3", "ACH"]);
    assert_eq!(achondroplasia.positive_annotations().count(), 2);
    assert_eq!(achondroplasia.negative_annotations().count(), 1);
    assert_eq!(achondroplasia.congenital_annotations().count(), 1);

    let crouzon = diseases.get(&DiseaseId::from(123_500u32)).unwrap();
    assert_eq!(crouzon.genes(), ["FGFR2"]);

    let li_fraumeni = diseases.get(&DiseaseId::from(151_623u32)).unwrap();
    assert_eq!(li_fraumeni.items().len(), 3);
    assert_eq!(li_fraumeni.neonatal_annotations().count(), 1);
}

#[test]
fn categories_in_curated_order() {
    let (_, _, nosology) = load();
    let headers: Vec<String> = nosology.categories().iter().map(|c| c.header()).collect();
    assert_eq!(
        headers,
        vec![
            "1.FGFR3 group",
            "33.Craniosynostosis syndromes",
            "Neurodevelopmental disorders"
        ]
    );
    assert_eq!(nosology.categories()[2].definitions().len(), 2);
}

#[test]
fn classification() {
    let (ontology, diseases, mut nosology) = load();
    nosology.classify(&diseases, &ontology).unwrap();

    let recoveries: Vec<(usize, usize)> = nosology
        .categories()
        .iter()
        .map(|category| {
            let recovery = category.recovery().unwrap();
            (recovery.recovered(), recovery.total())
        })
        .collect();
    assert_eq!(recoveries, vec![(2, 3), (2, 2), (1, 2)]);

    let neuro = nosology.get("Neurodevelopmental disorders").unwrap();
    let membership = neuro.membership().unwrap();
    assert_eq!(
        membership.matched(),
        [DiseaseId::from(123_500u32), DiseaseId::from(151_623u32)]
    );
    assert_eq!(membership.missed(), [DiseaseId::from(101_200u32)]);

    let attributed = nosology
        .attribution(DiseaseId::from(123_500u32), neuro)
        .unwrap();
    assert_eq!(attributed.name(), "Craniosynostosis syndromes");
}

#[test]
fn report() {
    let (ontology, diseases, mut nosology) = load();
    nosology.classify(&diseases, &ontology).unwrap();
    let report = nosology.report(&diseases, &ontology);

    let fgfr3 = "\
1.FGFR3 group
Definition 1:
Disease Gene: FGFR3.
NOT features: HP:0001363: Craniosynostosis
Required features: No constraint
Optional features(>=1 must be present): No constraint
Predictions:
1) OMIM:100800 Achondroplasia [FGFR3,ACH][+]
2) OMIM:187600 Thanatophoric dysplasia, type I [FGFR3][+]
I got 2/3 (66.7%) of the gold standard diseases.
Unrecovered gold standard diseases:
\tOMIM:146000 Hypochondroplasia
No new predictions.
";
    assert!(report.starts_with(fgfr3), "{report}");

    assert!(report.contains(
        "3) OMIM:146000 Hypochondroplasia [FGFR3]\n\
         I got 2/2 (100.0%) of the gold standard diseases.\n\
         All gold standard diseases were recovered.\n\
         New predictions:\n\
         \tOMIM:146000 Hypochondroplasia [FGFR3] (also in: FGFR3 group)\n"
    ));

    let neuro = "\
Neurodevelopmental disorders
Definition 1:
Disease Gene: no constraint.
NOT features: No constraint
Required features: No constraint
Optional features(>=1 must be present): No constraint
Neonatal/congenital feature: HP:0000707: Abnormality of the nervous system
Definition 2:
Disease Gene: no constraint.
NOT features: No constraint
Required features: No constraint
Optional features(>=1 must be present): No constraint
Require at least 2 descendents of HP:0000707: Abnormality of the nervous system
Predictions:
1) OMIM:123500 Crouzon syndrome [FGFR2]
2) OMIM:151623 Li-Fraumeni syndrome [TP53,P53,LFS1][+]
I got 1/2 (50.0%) of the gold standard diseases.
Unrecovered gold standard diseases:
\tOMIM:101200 Apert syndrome
New predictions:
\tOMIM:123500 Crouzon syndrome [FGFR2] (also in: Craniosynostosis syndromes)
";
    assert!(report.contains(neuro), "{report}");
}

#[test]
fn write_report_to_file() {
    let (ontology, diseases, mut nosology) = load();
    nosology.classify(&diseases, &ontology).unwrap();

    let path = std::env::temp_dir().join("nosology-classification-report.txt");
    nosology.write_report(&path, &diseases, &ontology).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, nosology.report(&diseases, &ontology));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn term_names_for_reports() {
    let ontology = Ontology::from_obo("tests/small.obo").unwrap();
    let query: &dyn AncestorQuery = &ontology;
    assert_eq!(query.term_name(id(4322)), "Short stature");
    assert_eq!(query.term_name(id(99_999)), "?");
}
