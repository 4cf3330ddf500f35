use std::collections::HashMap;

use tracing::debug;

use super::{DictEntry, DictError};
use crate::unicode::hiragana_to_katakana;

/// Column of the reading in an IPADIC line:
/// `surface,left_id,right_id,cost,pos1,pos2,pos3,pos4,conj_type,conj_form,base,reading,pronunciation`.
const READING_FIELD: usize = 11;

/// Line counts collected while parsing a CSV dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvStats {
    pub lines: u64,
    pub entries: u64,
    pub skipped: u64,
    /// Entries accepted without a reading column.
    pub missing_reading: u64,
}

/// Parse IPADIC / MeCab CSV dictionary text into surface → entries.
///
/// Empty lines and `#` comments are skipped, as are lines whose id or cost
/// columns do not parse. A line that stops before the reading column is kept
/// with `reading: None`. Readings are normalised to katakana.
///
/// Fails only when the text yields no entries at all.
pub fn parse_csv(text: &str) -> Result<(HashMap<String, Vec<DictEntry>>, CsvStats), DictError> {
    let mut entries: HashMap<String, Vec<DictEntry>> = HashMap::new();
    let mut stats = CsvStats::default();

    for line in text.lines() {
        stats.lines += 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            stats.skipped += 1;
            continue;
        }

        let fields = split_fields(line);
        let Some((surface, entry)) = parse_fields(&fields) else {
            stats.skipped += 1;
            continue;
        };
        if entry.reading.is_none() {
            stats.missing_reading += 1;
        }
        stats.entries += 1;
        entries.entry(surface).or_default().push(entry);
    }

    debug!(
        lines = stats.lines,
        entries = stats.entries,
        skipped = stats.skipped,
        missing_reading = stats.missing_reading,
        "parsed csv dictionary"
    );
    if entries.is_empty() {
        return Err(DictError::Parse("no dictionary entries found".to_string()));
    }
    Ok((entries, stats))
}

fn parse_fields(fields: &[String]) -> Option<(String, DictEntry)> {
    let surface = fields.first()?;
    if surface.is_empty() {
        return None;
    }
    let left_id: u16 = fields.get(1)?.trim().parse().ok()?;
    let right_id: u16 = fields.get(2)?.trim().parse().ok()?;
    let cost: i16 = fields.get(3)?.trim().parse().ok()?;
    let reading = fields
        .get(READING_FIELD)
        .map(|r| r.trim())
        .filter(|r| !r.is_empty() && *r != "*")
        .map(hiragana_to_katakana);
    Some((
        surface.clone(),
        DictEntry {
            reading,
            cost,
            left_id,
            right_id,
        },
    ))
}

/// Split one CSV line. Fields may be wrapped in double quotes so that a
/// surface can itself be `,`; `""` inside quotes is a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
