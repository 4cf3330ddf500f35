use std::fs;
use std::path::Path;

use super::DictError;

/// A connection cost matrix mapping (previous right_id, next left_id) → cost.
/// Used by the Viterbi search to score morpheme transitions.
#[derive(Debug, Clone)]
pub struct ConnectionMatrix {
    prev_size: u16,
    next_size: u16,
    costs: Vec<i16>,
}

impl ConnectionMatrix {
    /// Parse MeCab `matrix.def` text.
    ///
    /// Line 1 is `prev_size next_size`, then `prev_right_id next_left_id cost`
    /// per line. Pairs absent from the file cost 0.
    pub fn from_text(text: &str) -> Result<Self, DictError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| DictError::Parse("empty file".to_string()))?;
        let parts: Vec<&str> = header.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(DictError::Parse(format!(
                "expected 2 values in header, got {}",
                parts.len()
            )));
        }
        let prev_size: u16 = parts[0]
            .parse()
            .map_err(|e| DictError::Parse(format!("invalid prev_size: {e}")))?;
        let next_size: u16 = parts[1]
            .parse()
            .map_err(|e| DictError::Parse(format!("invalid next_size: {e}")))?;

        let expected = prev_size as usize * next_size as usize;
        let mut costs = vec![0i16; expected];
        for line in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(DictError::Parse(format!(
                    "expected 3 fields, got {}",
                    fields.len()
                )));
            }
            let prev: u16 = fields[0]
                .parse()
                .map_err(|e| DictError::Parse(format!("prev_right_id: {e}")))?;
            let next: u16 = fields[1]
                .parse()
                .map_err(|e| DictError::Parse(format!("next_left_id: {e}")))?;
            let cost: i16 = fields[2]
                .parse()
                .map_err(|e| DictError::Parse(format!("cost: {e}")))?;
            if prev >= prev_size || next >= next_size {
                return Err(DictError::Parse(format!(
                    "index out of bounds: ({prev}, {next})"
                )));
            }
            costs[prev as usize * next_size as usize + next as usize] = cost;
        }

        Ok(Self {
            prev_size,
            next_size,
            costs,
        })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        Self::from_text(&fs::read_to_string(path)?)
    }

    /// Look up the transition cost between two morphemes. Out-of-range ids cost 0.
    pub fn cost(&self, prev_right_id: u16, next_left_id: u16) -> i16 {
        if prev_right_id >= self.prev_size || next_left_id >= self.next_size {
            return 0;
        }
        let idx = prev_right_id as usize * self.next_size as usize + next_left_id as usize;
        self.costs.get(idx).copied().unwrap_or(0)
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.prev_size, self.next_size)
    }
}
