use tracing::{debug, debug_span};

use super::chars::CharClass;
use crate::dict::Dictionary;
use crate::settings::settings;

/// A node in the tokenization lattice.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    /// Slice of the input covered by this node
    pub surface: String,
    /// Katakana reading, if the dictionary has one
    pub reading: Option<String>,
    /// Whether the node came from the dictionary
    pub known: bool,
    /// Word cost (lower = more preferred)
    pub cost: i16,
    /// Left boundary morpheme ID
    pub left_id: u16,
    /// Right boundary morpheme ID
    pub right_id: u16,
}

/// The lattice: all candidate tokens over the input text.
pub struct Lattice {
    /// All nodes in the lattice
    pub nodes: Vec<LatticeNode>,
    /// nodes_by_end[i] = indices of nodes that end at position i
    pub nodes_by_end: Vec<Vec<usize>>,
    /// nodes_by_start[i] = indices of nodes that start at position i
    pub nodes_by_start: Vec<Vec<usize>>,
    /// Number of characters in input
    pub char_count: usize,
}

impl Lattice {
    fn push(&mut self, node: LatticeNode) {
        let idx = self.nodes.len();
        self.nodes_by_end[node.end].push(idx);
        self.nodes_by_start[node.start].push(idx);
        self.nodes.push(node);
    }
}

/// Build a lattice from arbitrary text using dictionary lookups.
///
/// Each start position gets one node per dictionary surface that begins
/// there. Unknown characters of a grouping class also get a node spanning
/// their whole run (for hiragana, only where no dictionary word starts),
/// and a 1-char fallback node is added whenever no
/// dictionary entry covers exactly one character, which keeps every
/// position reachable.
pub fn build_lattice(dict: &dyn Dictionary, text: &str) -> Lattice {
    let chars: Vec<char> = text.chars().collect();
    let char_count = chars.len();
    let _span = debug_span!("build_lattice", char_count).entered();
    let byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let byte_at = |pos: usize| byte_offsets.get(pos).copied().unwrap_or(text.len());
    let s = settings();

    let mut lattice = Lattice {
        nodes: Vec::new(),
        nodes_by_end: vec![Vec::new(); char_count + 1],
        nodes_by_start: vec![Vec::new(); char_count],
        char_count,
    };

    for start in 0..char_count {
        let mut has_match = false;
        let mut has_single_char_match = false;

        for result in dict.common_prefix_search(&text[byte_at(start)..]) {
            has_match = true;
            let end = start + result.surface.chars().count();
            for entry in result.entries {
                lattice.push(LatticeNode {
                    start,
                    end,
                    surface: result.surface.to_string(),
                    reading: entry.reading.clone(),
                    known: true,
                    cost: entry.cost,
                    left_id: entry.left_id,
                    right_id: entry.right_id,
                });
            }
            if end == start + 1 {
                has_single_char_match = true;
            }
        }

        let class = CharClass::of(chars[start]);
        if class.groups() && (class.groups_over_known() || !has_match) {
            let run = chars[start..]
                .iter()
                .take(s.tokenizer.max_unknown_run)
                .take_while(|&&c| CharClass::of(c) == class)
                .count();
            if run > 1 {
                lattice.push(unknown_node(text, start, start + run, &byte_at));
            }
        }

        if !has_single_char_match {
            lattice.push(unknown_node(text, start, start + 1, &byte_at));
        }
    }

    debug!(node_count = lattice.nodes.len());
    lattice
}

fn unknown_node(
    text: &str,
    start: usize,
    end: usize,
    byte_at: &impl Fn(usize) -> usize,
) -> LatticeNode {
    LatticeNode {
        start,
        end,
        surface: text[byte_at(start)..byte_at(end)].to_string(),
        reading: None,
        known: false,
        cost: settings().tokenizer.unknown_word_cost,
        left_id: 0,
        right_id: 0,
    }
}
