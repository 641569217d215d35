//! OMIM morbid map, used to add disease genes to the diseases
//!
//! ```text
//! Marfan syndrome, 154700 (3)|FBN1, MFS1, WMS2, SSKS|134797|15q21.1
//! ```
//!
//! The first field contains the disease id somewhere in the name, the
//! second field lists the gene symbol and its synonyms.
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::annotations::{DiseaseId, Diseases};
use crate::{HpoError, HpoResult};

/// A single line of the morbid map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorbidMapEntry {
    disease: DiseaseId,
    genes: Vec<String>,
    somatic: bool,
    modifier: bool,
}

impl MorbidMapEntry {
    /// The disease the genes are associated with
    pub fn disease(&self) -> DiseaseId {
        self.disease
    }

    /// Gene symbols, including synonyms
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    /// Returns `true` for germline mutations that cause the disease
    ///
    /// Somatic mutations and modifier genes are not germline disease genes
    pub fn is_germline(&self) -> bool {
        !self.somatic && !self.modifier
    }
}

/// Parses a single morbid map line
///
/// Returns `None` for comments and lines without a disease id or genes
///
/// # Examples
///
/// ```
/// use nosology::parser::morbidmap::parse_line;
///
/// let entry = parse_line("Marfan syndrome, 154700 (3)|FBN1, MFS1|134797|15q21.1").unwrap();
/// assert_eq!(entry.disease().as_u32(), 154700);
/// assert_eq!(entry.genes(), ["FBN1", "MFS1"]);
/// assert!(entry.is_germline());
///
/// assert!(parse_line("Some disease (3)|FBN1|134797|15q21.1").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<MorbidMapEntry> {
    if line.starts_with('#') {
        return None;
    }
    let mut fields = line.split('|');
    let name = fields.next()?;
    let genes = fields.next()?;

    let disease = first_six_digits(name)?;
    let lowercase_name = name.to_lowercase();

    let genes: Vec<String> = genes
        .split([',', ';', '.'])
        .map(str::trim)
        .filter(|gene| !gene.is_empty())
        .map(String::from)
        .collect();
    if genes.is_empty() {
        return None;
    }

    Some(MorbidMapEntry {
        disease,
        genes,
        somatic: lowercase_name.contains("somatic"),
        modifier: lowercase_name.contains("modifier") || lowercase_name.contains("modification"),
    })
}

/// Adds the germline disease genes of a morbid map file to the diseases
///
/// Returns the number of diseases that received at least one new gene.
///
/// # Errors
///
/// [`HpoError::CannotOpenFile`] if the file cannot be read
pub fn add_disease_genes<P: AsRef<Path>>(path: P, diseases: &mut Diseases) -> HpoResult<usize> {
    let filename = path.as_ref().display().to_string();
    let content = fs::read_to_string(path).map_err(|_| HpoError::CannotOpenFile(filename))?;
    Ok(add_disease_genes_from_str(&content, diseases))
}

/// Adds the germline disease genes of the morbid map content to the diseases
///
/// See [`add_disease_genes`]
pub fn add_disease_genes_from_str(content: &str, diseases: &mut Diseases) -> usize {
    let mut unparsable = 0usize;
    let mut updated = Vec::new();
    for line in content.lines() {
        let Some(entry) = parse_line(line) else {
            trace!("Unable to parse morbid map line: {}", line);
            unparsable += 1;
            continue;
        };
        if !entry.is_germline() {
            continue;
        }
        let Some(disease) = diseases.get_mut(&entry.disease) else {
            continue;
        };
        let mut added = false;
        for gene in &entry.genes {
            added |= disease.add_gene(gene);
        }
        if added && !updated.contains(&entry.disease) {
            updated.push(entry.disease);
        }
    }
    debug!("Skipped {} unparsable morbid map lines", unparsable);
    updated.len()
}

/// Finds the first run of six consecutive digits
fn first_six_digits(field: &str) -> Option<DiseaseId> {
    field
        .as_bytes()
        .windows(6)
        .find(|window| window.iter().all(u8::is_ascii_digit))
        .and_then(|window| std::str::from_utf8(window).ok())
        .and_then(|digits| digits.parse::<u32>().ok())
        .map(DiseaseId::from)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::disease;

    #[test]
    fn six_digits() {
        assert_eq!(first_six_digits("Foo, 1234567 (3)"), Some(123_456u32.into()));
        assert_eq!(first_six_digits("Foo 12345 (3)"), None);
        assert_eq!(
            first_six_digits("Foo 12345 and 654321 (3)"),
            Some(654_321u32.into())
        );
    }

    #[test]
    fn gene_separators() {
        let entry = parse_line("Foo, 123456 (3)|ABCD2;HF23, XYZ.1|134797|15q21.1").unwrap();
        assert_eq!(entry.genes(), ["ABCD2", "HF23", "XYZ", "1"]);
    }

    #[test]
    fn somatic_and_modifier() {
        let somatic = parse_line("Colorectal cancer, somatic, 114500 (3)|TP53|191170|17p13.1");
        assert!(!somatic.unwrap().is_germline());

        let modifier = parse_line("Cystic fibrosis, modifier of, 219700 (3)|TGFB1|190180|19q13");
        assert!(!modifier.unwrap().is_germline());

        let modification = parse_line("Severity, modification of, 219700 (3)|IFRD1|603502|7q31");
        assert!(!modification.unwrap().is_germline());
    }

    #[test]
    fn unparsable_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("# Copyright (c) 1966-2023").is_none());
        assert!(parse_line("Foo, 123456 (3)").is_none());
        assert!(parse_line("Foo, 123456 (3)| , |134797").is_none());
    }

    #[test]
    fn back_filling() {
        let mut diseases: Diseases = [
            disease(100_800, "Achondroplasia", &[], &[4322]),
            disease(114_500, "Colorectal cancer", &[], &[1250]),
        ]
        .into_iter()
        .collect();

        let content = "Achondroplasia, 100800 (3)|FGFR3, ACH|134934|4p16.3\n\
                       Colorectal cancer, somatic, 114500 (3)|TP53|191170|17p13.1\n\
                       Unknown, 999999 (3)|FOO|999999|1p1\n\
                       garbage\n\
                       Achondroplasia, 100800 (3)|FGFR3|134934|4p16.3\n";
        assert_eq!(add_disease_genes_from_str(content, &mut diseases), 1);
        assert_eq!(
            diseases.get(&100_800u32.into()).unwrap().genes(),
            ["FGFR3", "ACH"]
        );
        assert!(diseases.get(&114_500u32.into()).unwrap().genes().is_empty());
    }
}
