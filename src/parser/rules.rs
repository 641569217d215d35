//! Category rule files
//!
//! Every category is defined in its own file. The grammar is strict,
//! every line that is not a comment (`//`), blank, or one of the known
//! keys is an error:
//!
//! ```text
//! name:FGFR3 group
//! number:1
//! gold:100800=Achondroplasia
//! gold:146000=Hypochondroplasia
//! // NOT craniosynostosis
//! hasGermlineMutationIn:FGFR3
//! notHasFeature:HP_0001363
//! [Definition]
//! hasFeature:HP:0004322
//! hasOptionalFeature:HP:0002652
//! hasFeatureN(2):HP:0011842
//! hasNeonatalFeature:HP:0001250
//! ```
//!
//! `[Definition]` starts another alternative definition, the lines before
//! the first `[Definition]` belong to the first definition.
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::annotations::DiseaseId;
use crate::nosology::{Category, Definition, DefinitionBuilder, Nosology};
use crate::{HpoError, HpoResult, HpoTermId};

/// Loads all categories listed in [`crate::CATEGORY_ORDER_FILENAME`] inside `folder`
///
/// The order file lists one rule file name per line, blank lines and
/// comments (`//`) are ignored. The categories keep the listed order.
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the order file or a listed rule file cannot be read
/// - see [`parse_category`] for errors in the rule files
pub fn load_nosology<P: AsRef<Path>>(folder: P) -> HpoResult<Nosology> {
    let folder = folder.as_ref();
    let order_file = folder.join(crate::CATEGORY_ORDER_FILENAME);
    let order = fs::read_to_string(&order_file)
        .map_err(|_| HpoError::CannotOpenFile(order_file.display().to_string()))?;

    let mut nosology = Nosology::new();
    for filename in order.lines().map(str::trim) {
        if filename.is_empty() || filename.starts_with("//") {
            continue;
        }
        nosology.push(read_category_file(folder.join(filename))?);
    }
    info!("Loaded {} categories", nosology.len());
    Ok(nosology)
}

/// Reads a single rule file
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file cannot be read
/// - see [`parse_category`]
pub fn read_category_file<P: AsRef<Path>>(path: P) -> HpoResult<Category> {
    let filename = path.as_ref().display().to_string();
    let content =
        fs::read_to_string(path).map_err(|_| HpoError::CannotOpenFile(filename.clone()))?;
    let category = parse_category(&content)?;
    debug!("Parsed category {} from {}", category.header(), filename);
    Ok(category)
}

/// Parses the content of a rule file
///
/// # Errors
///
/// - [`HpoError::InvalidRule`]: unknown line, malformed `gold`, `number` or
///   `hasFeatureN` line, a second neonatal feature within one definition,
///   an empty `[Definition]` block or a missing `name`
/// - [`HpoError::InvalidTermId`]: a malformed term id
///
/// # Examples
///
/// ```
/// use nosology::parser::rules::parse_category;
///
/// let category = parse_category("name:FGFR3 group\nnumber:1\ngold:100800=Achondroplasia\nhasGermlineMutationIn:FGFR3\n").unwrap();
/// assert_eq!(category.header(), "1.FGFR3 group");
/// assert_eq!(category.definitions().len(), 1);
/// assert_eq!(category.definitions()[0].genes(), ["FGFR3"]);
///
/// assert!(parse_category("name:Foo\nhasFeatur:HP:0000118\n").is_err());
/// ```
pub fn parse_category(content: &str) -> HpoResult<Category> {
    let mut name: Option<&str> = None;
    let mut number = 0u32;
    let mut gold: Vec<(DiseaseId, &str)> = Vec::new();
    let mut definitions = Definitions::default();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let invalid =
            |reason: &str| HpoError::InvalidRule(format!("line {}: {reason}: {line}", idx + 1));

        if line == "[Definition]" {
            if !definitions.start_next() {
                return Err(invalid("empty definition"));
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(invalid("unknown content"));
        };
        let value = value.trim();
        match key.trim() {
            "name" => name = Some(value),
            "number" => number = value.parse().map_err(|_| invalid("invalid number"))?,
            "gold" => {
                let (id, label) = value
                    .split_once('=')
                    .ok_or_else(|| invalid("gold standard without '='"))?;
                let id = DiseaseId::try_from(id.trim())
                    .map_err(|_| invalid("invalid disease id"))?;
                gold.push((id, label.trim()));
            }
            "hasGermlineMutationIn" => {
                definitions.current.gene(value);
            }
            "hasFeature" => {
                definitions.current.required(HpoTermId::try_from(value)?);
            }
            "notHasFeature" => {
                definitions.current.excluded(HpoTermId::try_from(value)?);
            }
            "hasOptionalFeature" => {
                definitions.current.optional(HpoTermId::try_from(value)?);
            }
            "hasNeonatalFeature" => {
                definitions
                    .current
                    .onset_feature(HpoTermId::try_from(value)?)
                    .map_err(|_| invalid("duplicate neonatal feature"))?;
            }
            key => {
                let minimum = key
                    .strip_prefix("hasFeatureN(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or_else(|| invalid("unknown content"))?
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid("invalid minimum count"))?;
                definitions
                    .current
                    .minimum_count(HpoTermId::try_from(value)?, minimum);
            }
        }
    }

    let name = name.ok_or_else(|| HpoError::InvalidRule("category without name".to_string()))?;
    let mut category = Category::new(name, number);
    for (id, label) in gold {
        category.add_gold_standard(id, label);
    }
    let definitions = definitions
        .finish()
        .ok_or_else(|| HpoError::InvalidRule(format!("{name}: empty last definition")))?;
    for definition in definitions {
        category.add_definition(definition);
    }
    Ok(category)
}

/// Collects the definitions of a rule file
#[derive(Default)]
struct Definitions {
    done: Vec<Definition>,
    current: DefinitionBuilder,
    explicit: bool,
}

impl Definitions {
    /// Closes the current definition and starts a new one
    ///
    /// Returns `false` if the closed `[Definition]` block was empty
    fn start_next(&mut self) -> bool {
        let closed = self.close();
        self.explicit = true;
        closed
    }

    fn finish(mut self) -> Option<Vec<Definition>> {
        self.close().then_some(self.done)
    }

    fn close(&mut self) -> bool {
        if self.current.is_empty() {
            // lines before the first [Definition] are optional
            return !self.explicit;
        }
        self.done.push(self.current.build());
        self.current = DefinitionBuilder::default();
        true
    }
}
