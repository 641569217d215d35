//! Per-disease phenotype annotation files
//!
//! Each file contains the annotations of a single disease, e.g.
//! `OMIM-100800.tab`. The first line is a header naming the columns,
//! their order is not fixed:
//!
//! ```text
//! Disease ID    Disease Name    Phenotype ID    Phenotype Name    Negation ID    Age of Onset Name
//! OMIM:100800   Achondroplasia  HP:0004322      Short stature                    Congenital onset
//! OMIM:100800   Achondroplasia  HP:0001250      Seizure           NOT
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::annotations::{AnnotationItem, DiseaseAnnotation, DiseaseId, Diseases, Onset};
use crate::{HpoError, HpoResult, HpoTermId};

/// Reads all annotation files of a folder
///
/// Only files whose name starts with `OMIM` and does not end with `~` are read.
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the folder or one of the files cannot be read
/// - see [`parse_annotations`] for errors in individual files
pub fn load_diseases<P: AsRef<Path>>(folder: P) -> HpoResult<Diseases> {
    let files = annotation_files(folder.as_ref())?;
    info!(
        "Found {} annotation files in {}",
        files.len(),
        folder.as_ref().display()
    );

    let mut diseases = Diseases::new();
    for (idx, path) in files.iter().enumerate() {
        let disease = read_annotation_file(path)?;
        if let Some(previous) = diseases.insert(disease) {
            warn!("Duplicate annotations for {}", previous.id());
        }
        if (idx + 1) % 500 == 0 {
            info!("Parsed {} annotation files", idx + 1);
        }
    }
    Ok(diseases)
}

/// Reads a single annotation file
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file cannot be read
/// - see [`parse_annotations`]
pub fn read_annotation_file<P: AsRef<Path>>(path: P) -> HpoResult<DiseaseAnnotation> {
    let filename = path.as_ref().display().to_string();
    let content =
        fs::read_to_string(path).map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
    parse_annotations(&content, &filename)
}

/// Parses the content of a single annotation file
///
/// Disease id and name are taken from the first annotation line. Lines with
/// missing columns or an invalid term id are skipped.
///
/// # Errors
///
/// - [`HpoError::InvalidInput`]: a header column is missing or the file does
///   not contain a single valid annotation
/// - [`HpoError::ParseIntError`]: the disease id is invalid
///
/// # Examples
///
/// ```
/// use nosology::parser::annotation::parse_annotations;
///
/// let content = "Disease ID\tDisease Name\tPhenotype ID\tNegation ID\tAge of Onset Name\n\
///     OMIM:100800\tAchondroplasia\tHP:0004322\t\tCongenital onset\n\
///     OMIM:100800\tAchondroplasia\tHP:0001250\tNOT\t\n";
/// let disease = parse_annotations(content, "OMIM-100800.tab").unwrap();
///
/// assert_eq!(disease.id().as_u32(), 100800);
/// assert_eq!(disease.name(), "Achondroplasia");
/// assert_eq!(disease.positive_annotations().count(), 1);
/// assert_eq!(disease.congenital_annotations().count(), 1);
/// assert_eq!(disease.negative_annotations().count(), 1);
/// ```
pub fn parse_annotations(content: &str, source: &str) -> HpoResult<DiseaseAnnotation> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| HpoError::InvalidInput(format!("{source} is empty")))?;
    let columns = Columns::from_header(header, source)?;

    let mut disease: Option<DiseaseAnnotation> = None;
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= columns.max_index() {
            warn!(
                "Ignoring line {} of {}: expected at least {} fields, found {}",
                idx + 2,
                source,
                columns.max_index() + 1,
                fields.len()
            );
            continue;
        }

        let term = match HpoTermId::try_from(fields[columns.phenotype].trim()) {
            Ok(term) => term,
            Err(err) => {
                warn!("Ignoring line {} of {}: {}", idx + 2, source, err);
                continue;
            }
        };
        let negated = fields[columns.negation].trim().eq_ignore_ascii_case("NOT");
        let onset = Onset::from_label(fields[columns.onset]);

        if disease.is_none() {
            disease = Some(DiseaseAnnotation::new(
                DiseaseId::try_from(fields[columns.id])?,
                fields[columns.name].trim(),
            ));
        }
        if let Some(disease) = disease.as_mut() {
            disease.add_item(AnnotationItem::new(term, negated, onset));
        }
    }

    match disease {
        Some(disease) => {
            debug!("{} annotations for {}", disease.items().len(), disease);
            Ok(disease)
        }
        None => Err(HpoError::InvalidInput(format!(
            "{source} does not contain any valid annotation"
        ))),
    }
}

/// Positions of the relevant columns
struct Columns {
    id: usize,
    name: usize,
    phenotype: usize,
    negation: usize,
    onset: usize,
}

impl Columns {
    fn from_header(header: &str, source: &str) -> HpoResult<Self> {
        let fields: Vec<&str> = header.split('\t').map(str::trim).collect();
        let position = |column: &str| {
            fields.iter().position(|field| *field == column).ok_or_else(|| {
                HpoError::InvalidInput(format!("column {column} is not present in {source}"))
            })
        };
        Ok(Self {
            id: position("Disease ID")?,
            name: position("Disease Name")?,
            phenotype: position("Phenotype ID")?,
            negation: position("Negation ID")?,
            onset: position("Age of Onset Name")?,
        })
    }

    fn max_index(&self) -> usize {
        [self.id, self.name, self.phenotype, self.negation, self.onset]
            .into_iter()
            .max()
            .unwrap_or_default()
    }
}

fn annotation_files(folder: &Path) -> HpoResult<Vec<PathBuf>> {
    let cannot_open = || HpoError::CannotOpenFile(folder.display().to_string());
    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(|_| cannot_open())? {
        let path = entry.map_err(|_| cannot_open())?.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if path.is_file() && name.starts_with("OMIM") && !name.ends_with('~') {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
