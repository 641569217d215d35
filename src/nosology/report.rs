//! Plain text report of the classification
use std::fmt::{self, Write};

use crate::annotations::Diseases;
use crate::nosology::{Category, Definition, Nosology};
use crate::{AncestorQuery, HpoTermId};

/// Writes the report section of a single category
pub(crate) fn write_category<W: Write, Q: AncestorQuery + ?Sized>(
    out: &mut W,
    nosology: &Nosology,
    category: &Category,
    diseases: &Diseases,
    query: &Q,
) -> fmt::Result {
    writeln!(out, "{}", category.header())?;
    for (idx, definition) in category.definitions().iter().enumerate() {
        writeln!(out, "Definition {}:", idx + 1)?;
        write_definition(out, definition, query)?;
    }

    let (Some(membership), Some(recovery)) = (category.membership(), category.recovery()) else {
        return writeln!(out, "Not classified.");
    };

    writeln!(out, "Predictions:")?;
    let mut novel = Vec::new();
    for (idx, id) in membership.matched().iter().enumerate() {
        let Some(disease) = diseases.get(id) else {
            continue;
        };
        if category.in_gold_standard(*id) {
            writeln!(out, "{}) {}[+]", idx + 1, disease)?;
        } else {
            writeln!(out, "{}) {}", idx + 1, disease)?;
            novel.push(disease);
        }
    }

    writeln!(
        out,
        "I got {}/{} ({:.1}%) of the gold standard diseases.",
        recovery.recovered(),
        recovery.total(),
        recovery.percentage()
    )?;

    if membership.missed().is_empty() {
        writeln!(out, "All gold standard diseases were recovered.")?;
    } else {
        writeln!(out, "Unrecovered gold standard diseases:")?;
        for id in membership.missed() {
            let label = category
                .gold_standard()
                .get(id)
                .map_or("", String::as_str);
            writeln!(out, "\t{id} {label}")?;
        }
    }

    if novel.is_empty() {
        writeln!(out, "No new predictions.")?;
    } else {
        writeln!(out, "New predictions:")?;
        for disease in novel {
            match nosology.attribution(disease.id(), category) {
                Some(other) => writeln!(out, "\t{} (also in: {})", disease, other.name())?,
                None => writeln!(out, "\t{disease} (no other category)")?,
            }
        }
    }
    Ok(())
}

fn write_definition<W: Write, Q: AncestorQuery + ?Sized>(
    out: &mut W,
    definition: &Definition,
    query: &Q,
) -> fmt::Result {
    match definition.genes() {
        [] => writeln!(out, "Disease Gene: no constraint.")?,
        [gene] => writeln!(out, "Disease Gene: {gene}.")?,
        genes => writeln!(out, "Disease Gene: {}", genes.join(";"))?,
    }
    writeln!(
        out,
        "NOT features: {}",
        term_list(definition.excluded(), query)
    )?;
    writeln!(
        out,
        "Required features: {}",
        term_list(definition.required(), query)
    )?;
    writeln!(
        out,
        "Optional features(>=1 must be present): {}",
        term_list(definition.optional(), query)
    )?;
    for constraint in definition.minimum_counts() {
        writeln!(
            out,
            "Require at least {} descendents of {}",
            constraint.minimum(),
            term_label(constraint.term(), query)
        )?;
    }
    if let Some(term) = definition.onset_feature() {
        writeln!(
            out,
            "Neonatal/congenital feature: {}",
            term_label(term, query)
        )?;
    }
    Ok(())
}

fn term_list<Q: AncestorQuery + ?Sized>(terms: &[HpoTermId], query: &Q) -> String {
    if terms.is_empty() {
        return String::from("No constraint");
    }
    terms
        .iter()
        .map(|term| term_label(*term, query))
        .collect::<Vec<String>>()
        .join("; ")
}

fn term_label<Q: AncestorQuery + ?Sized>(term: HpoTermId, query: &Q) -> String {
    format!("{}: {}", term, query.term_name(term))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::example_ontology;

    #[test]
    fn definition_echo() {
        let ontology = example_ontology();
        let mut builder = Definition::builder();
        builder
            .gene("FGFR3")
            .excluded(1363u32.into())
            .required(4322u32.into())
            .required(1380u32.into())
            .minimum_count(707u32.into(), 2);
        builder.onset_feature(1250u32.into()).unwrap();

        let mut out = String::new();
        write_definition(&mut out, &builder.build(), &ontology).unwrap();
        assert_eq!(
            out,
            "Disease Gene: FGFR3.\n\
             NOT features: HP:0001363: Craniosynostosis\n\
             Required features: HP:0004322: Short stature; HP:0001380: Ligamentous laxity\n\
             Optional features(>=1 must be present): No constraint\n\
             Require at least 2 descendents of HP:0000707: Abnormality of the nervous system\n\
             Neonatal/congenital feature: HP:0001250: Seizure\n"
        );
    }

    #[test]
    fn trivial_definition_echo() {
        let ontology = example_ontology();
        let mut builder = Definition::builder();
        builder.gene("FGFR2").gene("FGFR3").optional(99_999u32.into());

        let mut out = String::new();
        write_definition(&mut out, &builder.build(), &ontology).unwrap();
        assert_eq!(
            out,
            "Disease Gene: FGFR2;FGFR3\n\
             NOT features: No constraint\n\
             Required features: No constraint\n\
             Optional features(>=1 must be present): HP:0099999: ?\n"
        );
    }
}
