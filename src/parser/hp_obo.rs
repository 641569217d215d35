use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::builder::{Builder, LooseCollection};
use crate::{HpoError, HpoResult, HpoTermId};

/// Reads all terms of an OBO file into a new [`Builder`]
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file is not present or not readable
/// - [`HpoError::InvalidTermId`]: a term or parent id is malformed
/// - [`HpoError::InvalidInput`]: a `[Term]` stanza lacks an id or a name
pub fn read_obo_file<P: AsRef<Path>>(filename: P) -> HpoResult<Builder<LooseCollection>> {
    let path = filename.as_ref().display().to_string();
    let content =
        fs::read_to_string(filename).map_err(|_| HpoError::CannotOpenFile(path.clone()))?;
    let builder = parse_obo(&content)?;
    debug!("Read {} terms from {}", builder.len(), path);
    Ok(builder)
}

/// Parses the content of an OBO file
///
/// Only `[Term]` stanzas are used. Of those, only the `id`, `name` and
/// `is_a` lines are relevant, everything else is ignored. Obsolete terms are
/// skipped.
///
/// # Errors
///
/// See [`read_obo_file`]
///
/// # Examples
///
/// ```
/// use nosology::parser::hp_obo::parse_obo;
///
/// let obo = "format-version: 1.2\n\n\
///     [Term]\nid: HP:0000001\nname: All\n\n\
///     [Term]\nid: HP:0000118\nname: Phenotypic abnormality\nis_a: HP:0000001 ! All\n";
/// let builder = parse_obo(obo).unwrap();
/// assert_eq!(builder.len(), 2);
/// ```
pub fn parse_obo(content: &str) -> HpoResult<Builder<LooseCollection>> {
    let mut builder = Builder::new();
    let content = content.replace("\r\n", "\n");
    for stanza in content.split("\n\n") {
        let stanza = stanza.trim();
        if let Some(term) = stanza.strip_prefix("[Term]") {
            if let Some(raw_term) = term_from_obo(term)? {
                builder.add_term(raw_term.name, raw_term.id, raw_term.parents);
            }
        } else {
            trace!("Ignoring: {}", stanza);
        }
    }
    Ok(builder)
}

struct RawTerm<'a> {
    id: HpoTermId,
    name: &'a str,
    parents: Vec<HpoTermId>,
}

fn term_from_obo(term: &str) -> HpoResult<Option<RawTerm<'_>>> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut parents = Vec::new();
    for line in term.lines() {
        match line.split_once(':') {
            Some(("id", value)) => id = Some(value.trim()),
            Some(("name", value)) => name = Some(value.trim()),
            Some(("is_a", value)) => parents.push(HpoTermId::try_from(strip_comment(value))?),
            Some(("is_obsolete", value)) if value.trim() == "true" => {
                trace!("Skipping obsolete term {:?}", id);
                return Ok(None);
            }
            _ => (),
        }
    }
    match (id, name) {
        (Some(id), Some(name)) => Ok(Some(RawTerm {
            id: HpoTermId::try_from(id)?,
            name,
            parents,
        })),
        _ => Err(HpoError::InvalidInput(format!(
            "term without id or name: {}",
            term.trim()
        ))),
    }
}

/// Removes the trailing `! comment` of a value
fn strip_comment(value: &str) -> &str {
    value
        .split_once('!')
        .map_or(value, |(value, _)| value)
        .trim()
}
