#![cfg(test)]

use crate::dict::{DictEntry, SurfaceDictionary};

fn entry(reading: &str, cost: i16) -> DictEntry {
    DictEntry {
        reading: Some(reading.to_string()),
        cost,
        left_id: 0,
        right_id: 0,
    }
}

/// Shared test dictionary for tokenizer tests.
pub fn test_dict() -> SurfaceDictionary {
    SurfaceDictionary::from_entries(vec![
        ("東".to_string(), vec![entry("ヒガシ", 5000)]),
        ("京".to_string(), vec![entry("キョウ", 5000)]),
        ("東京".to_string(), vec![entry("トウキョウ", 3000)]),
        ("空".to_string(), vec![entry("ソラ", 3300)]),
        ("の".to_string(), vec![entry("ノ", 2000)]),
        ("は".to_string(), vec![entry("ハ", 2000)]),
        ("です".to_string(), vec![entry("デス", 2000)]),
        ("注".to_string(), vec![entry("チュウ", 4000)]),
        ("赤い".to_string(), vec![entry("アカイ", 3600)]),
        ("花".to_string(), vec![entry("ハナ", 3300)]),
        (
            "謎".to_string(),
            vec![DictEntry {
                reading: None,
                cost: 3000,
                left_id: 0,
                right_id: 0,
            }],
        ),
    ])
}
