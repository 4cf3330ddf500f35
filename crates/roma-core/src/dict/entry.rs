use serde::{Deserialize, Serialize};

/// One dictionary analysis of a surface form.
///
/// `reading` is `None` when the source line carried no reading column.
/// The tokenizer still marks such tokens as known, and the expander falls
/// back to the surface for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub reading: Option<String>,
    pub cost: i16,
    pub left_id: u16,
    pub right_id: u16,
}
