//! Merging per-section input into one markdown document.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::section::{SECTIONS, SectionDefinition, section_by_id};

/// Raw per-section input, keyed by section id. Absent keys and
/// whitespace-only values both mean "leave this section out".
pub type SectionValues = HashMap<String, String>;

/// Rejected custom orderings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
}

/// Merges `values` into a single markdown document.
///
/// Sections are emitted in catalog order, or in `order` when one is given.
/// A supplied order must stay within the catalog and name each id at most
/// once; ids it leaves out drop their sections from the output. Each
/// included section contributes one fragment (its prefix plus the trimmed
/// value, with `title`, `description` and `license` special-cased), and
/// fragments are joined with a single blank line.
pub fn assemble(values: &SectionValues, order: Option<&[&str]>) -> Result<String, AssembleError> {
    let sections = resolve_order(order)?;

    let mut fragments = Vec::new();
    for section in sections {
        let value = match values.get(section.id) {
            Some(raw) => raw.trim(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        fragments.push(fragment_for(section, value));
    }

    Ok(fragments.join("\n\n"))
}

/// Catalog entries whose value is non-blank, in catalog order.
pub fn filled_sections(values: &SectionValues) -> Vec<&'static SectionDefinition> {
    SECTIONS
        .iter()
        .filter(|section| {
            values
                .get(section.id)
                .is_some_and(|value| !value.trim().is_empty())
        })
        .collect()
}

fn resolve_order(
    order: Option<&[&str]>,
) -> Result<Vec<&'static SectionDefinition>, AssembleError> {
    let ids = match order {
        Some(ids) => ids,
        None => return Ok(SECTIONS.iter().collect()),
    };

    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(ids.len());
    for &id in ids {
        let section =
            section_by_id(id).ok_or_else(|| AssembleError::UnknownSection(id.to_string()))?;
        if !seen.insert(section.id) {
            return Err(AssembleError::DuplicateSection(id.to_string()));
        }
        sections.push(section);
    }
    Ok(sections)
}

fn fragment_for(section: &SectionDefinition, value: &str) -> String {
    match section.id {
        "title" => format!("# {value}"),
        "description" => value.to_string(),
        "license" => format!(
            "## License\n\n[{value}](https://choosealicense.com/licenses/{}/)",
            value.to_lowercase()
        ),
        _ => match section.prefix {
            Some(prefix) => format!("{prefix}{value}"),
            None => value.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(entries: &[(&str, &str)]) -> SectionValues {
        entries
            .iter()
            .map(|(id, value)| (id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_values_assemble_to_empty_document() {
        assert_eq!(assemble(&SectionValues::new(), None), Ok(String::new()));
    }

    #[test]
    fn whitespace_only_values_are_skipped() {
        let values = values(&[("title", "   \n"), ("features", "\t")]);
        assert_eq!(assemble(&values, None), Ok(String::new()));
    }

    #[test]
    fn title_becomes_level_one_heading() {
        let values = values(&[("title", "Foo")]);
        assert_eq!(assemble(&values, None).unwrap(), "# Foo");
    }

    #[test]
    fn description_is_emitted_without_heading() {
        let values = values(&[("description", "Does things.")]);
        assert_eq!(assemble(&values, None).unwrap(), "Does things.");
    }

    #[test]
    fn license_links_to_choosealicense() {
        let values = values(&[("license", "MIT")]);
        assert_eq!(
            assemble(&values, None).unwrap(),
            "## License\n\n[MIT](https://choosealicense.com/licenses/mit/)"
        );
    }

    #[test]
    fn license_slug_is_only_lowercased() {
        let values = values(&[("license", "Apache 2.0")]);
        assert_eq!(
            assemble(&values, None).unwrap(),
            "## License\n\n[Apache 2.0](https://choosealicense.com/licenses/apache 2.0/)"
        );
    }

    #[test]
    fn prefix_abuts_trimmed_value() {
        let values = values(&[("features", "  - fast\n- small  ")]);
        assert_eq!(
            assemble(&values, None).unwrap(),
            "## Features\n\n- fast\n- small"
        );
    }

    #[test]
    fn fragments_join_with_one_blank_line_in_catalog_order() {
        let values = values(&[
            ("usage", "use it"),
            ("title", "X"),
            ("features", "- a"),
        ]);
        assert_eq!(
            assemble(&values, None).unwrap(),
            "# X\n\n## Features\n\n- a\n\n## Usage\n\nuse it"
        );
    }

    #[test]
    fn trimming_makes_padded_values_equivalent() {
        let padded = values(&[("title", "  Foo  "), ("usage", "run\n\n")]);
        let bare = values(&[("title", "Foo"), ("usage", "run")]);
        assert_eq!(assemble(&padded, None), assemble(&bare, None));
    }

    #[test]
    fn custom_order_overrides_catalog_order() {
        let values = values(&[("title", "X"), ("usage", "use it")]);
        let output = assemble(&values, Some(&["usage", "title"])).unwrap();
        assert_eq!(output, "## Usage\n\nuse it\n\n# X");
    }

    #[test]
    fn custom_order_drops_omitted_sections() {
        let values = values(&[("title", "X"), ("license", "MIT")]);
        let output = assemble(&values, Some(&["title"])).unwrap();
        assert_eq!(output, "# X");
    }

    #[test]
    fn unknown_id_in_order_is_rejected() {
        let values = values(&[("title", "X")]);
        assert_eq!(
            assemble(&values, Some(&["title", "nope"])),
            Err(AssembleError::UnknownSection("nope".to_string()))
        );
    }

    #[test]
    fn duplicate_id_in_order_is_rejected() {
        let values = values(&[("title", "X")]);
        assert_eq!(
            assemble(&values, Some(&["title", "title"])),
            Err(AssembleError::DuplicateSection("title".to_string()))
        );
    }

    #[test]
    fn unknown_value_keys_are_ignored() {
        let values = values(&[("bogus", "content")]);
        assert_eq!(assemble(&values, None), Ok(String::new()));
    }

    #[test]
    fn error_messages_name_the_offending_id() {
        assert_eq!(
            AssembleError::UnknownSection("nope".to_string()).to_string(),
            "unknown section id: nope"
        );
        assert_eq!(
            AssembleError::DuplicateSection("title".to_string()).to_string(),
            "duplicate section id: title"
        );
    }

    #[test]
    fn filled_sections_follow_catalog_order() {
        let values = values(&[
            ("usage", "u"),
            ("title", "t"),
            ("features", "   "),
        ]);
        let filled = filled_sections(&values);
        let ids: Vec<&str> = filled.iter().map(|section| section.id).collect();
        assert_eq!(ids, vec!["title", "usage"]);
    }
}
