use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nosology::{Diseases, Nosology, Ontology};

fn classification_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo("tests/small.obo").expect("small.obo is valid");
    let diseases = Diseases::from_standard("tests").expect("annotations are valid");
    let nosology = Nosology::from_standard("tests").expect("rule files are valid");

    c.bench_function("classify and report", |b| {
        b.iter(|| {
            let mut nosology = nosology.clone();
            nosology
                .classify(black_box(&diseases), black_box(&ontology))
                .expect("nosology is classified only once");
            nosology.report(&diseases, &ontology).len()
        })
    });
}

criterion_group! {
    name = classification;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = classification_benchmark
}
criterion_main!(classification);
