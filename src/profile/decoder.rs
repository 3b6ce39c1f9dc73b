use std::collections::BTreeMap;
use std::str;

use tracing::{debug, trace};

use crate::error::DecodeError;

/// Entries of one section, keyed as written in the store.
pub type Section = BTreeMap<String, String>;

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Header(&'a str),
    Entry(&'a str, &'a str),
    Other,
}

/// Tokenizes the whole store and returns the entries found under `[name]`.
///
/// Any syntax error fails the decode, including one in an unrelated section.
pub fn decode_section(raw: &[u8], name: &str) -> Result<Section, DecodeError> {
    let text = str::from_utf8(raw)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut section = Section::new();
    let mut in_section = false;

    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        match classify(line, number)? {
            Line::Skip => {}
            Line::Header(header) => in_section = header == name,
            Line::Entry(key, value) if in_section => {
                trace!(line = number, key, "decoded entry");
                section.insert(key.to_string(), value.to_string());
            }
            Line::Entry(..) => {}
            Line::Other => debug!(line = number, "ignoring line without `=`"),
        }
    }

    debug!(profile = name, entries = section.len(), "decoded section");
    Ok(section)
}

fn classify(line: &str, number: usize) -> Result<Line<'_>, DecodeError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Ok(Line::Skip);
    }

    if let Some(rest) = line.strip_prefix('[') {
        let header = rest
            .strip_suffix(']')
            .ok_or(DecodeError::UnterminatedHeader { line: number })?
            .trim();
        if header.is_empty() {
            return Err(DecodeError::EmptySectionName { line: number });
        }
        return Ok(Line::Header(header));
    }

    match line.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                return Err(DecodeError::EmptyKey { line: number });
            }
            Ok(Line::Entry(key, value.trim()))
        }
        None => Ok(Line::Other),
    }
}
