use std::collections::HashMap;

use super::{DictEntry, DictError, Dictionary, SearchResult};

const EMBEDDED_LEXICON: &str = include_str!("lexicon.csv");

/// Dictionary keyed by surface form.
///
/// Prefix search probes each prefix of the query up to the longest stored
/// surface, so its cost is bounded by `max_surface_chars` lookups.
#[derive(Debug, Default)]
pub struct SurfaceDictionary {
    pub(super) entries: HashMap<String, Vec<DictEntry>>,
    pub(super) max_surface_chars: usize,
}

impl SurfaceDictionary {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<DictEntry>)>) -> Self {
        let mut map: HashMap<String, Vec<DictEntry>> = HashMap::new();
        for (surface, list) in entries {
            if surface.is_empty() {
                continue;
            }
            map.entry(surface).or_default().extend(list);
        }
        map.retain(|_, list| !list.is_empty());
        for list in map.values_mut() {
            list.sort_by_key(|e| e.cost);
        }
        let max_surface_chars = map.keys().map(|s| s.chars().count()).max().unwrap_or(0);
        Self {
            entries: map,
            max_surface_chars,
        }
    }

    /// Parse IPADIC-style CSV text. See [`super::parse_csv`].
    pub fn from_csv(text: &str) -> Result<Self, DictError> {
        let (entries, _) = super::parse_csv(text)?;
        Ok(Self::from_entries(entries))
    }

    /// The small lyric lexicon compiled into the crate.
    pub fn embedded() -> Result<Self, DictError> {
        Self::from_csv(EMBEDDED_LEXICON)
    }

    /// Iterate over all `(surface, entries)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DictEntry])> {
        self.entries.iter().map(|(s, e)| (s.as_str(), e.as_slice()))
    }

    /// Returns (surface_count, entry_count).
    pub fn stats(&self) -> (usize, usize) {
        let surfaces = self.entries.len();
        let entries: usize = self.entries.values().map(|v| v.len()).sum();
        (surfaces, entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for SurfaceDictionary {
    fn lookup(&self, surface: &str) -> &[DictEntry] {
        self.entries
            .get(surface)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn common_prefix_search<'a>(&'a self, text: &'a str) -> Vec<SearchResult<'a>> {
        text.char_indices()
            .take(self.max_surface_chars)
            .filter_map(|(i, c)| {
                let prefix = &text[..i + c.len_utf8()];
                self.entries.get(prefix).map(|entries| SearchResult {
                    surface: prefix,
                    entries: entries.as_slice(),
                })
            })
            .collect()
    }
}
