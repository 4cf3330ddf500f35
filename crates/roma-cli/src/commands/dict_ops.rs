use std::fs;
use std::path::Path;

use roma_core::dict::{parse_csv, Dictionary, SurfaceDictionary};

/// Compile an IPADIC-style CSV file into the binary dictionary format.
pub fn compile_dict(input_csv: &str, output_file: &str) {
    let text = die!(
        fs::read_to_string(input_csv),
        "Error reading {input_csv}: {}"
    );
    let (entries, stats) = die!(parse_csv(&text), "Error parsing dictionary: {}");
    eprintln!(
        "Parsed {} lines: {} entries, {} skipped, {} without reading",
        stats.lines, stats.entries, stats.skipped, stats.missing_reading
    );

    let dict = SurfaceDictionary::from_entries(entries);
    let (surfaces, entry_count) = dict.stats();
    die!(
        dict.save(Path::new(output_file)),
        "Error writing {output_file}: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!("Wrote {output_file} ({surfaces} surfaces, {entry_count} entries, {file_size} bytes)");
}

/// Print the entries stored for `surface` in a binary dictionary.
pub fn lookup(dict_file: &str, surface: &str) {
    let dict = die!(
        SurfaceDictionary::open(Path::new(dict_file)),
        "Error opening {dict_file}: {}"
    );
    let entries = dict.lookup(surface);
    if entries.is_empty() {
        println!("{surface}: not found");
        return;
    }
    for e in entries {
        println!(
            "{surface}\t{}\tcost={}\tleft={}\tright={}",
            e.reading.as_deref().unwrap_or("*"),
            e.cost,
            e.left_id,
            e.right_id
        );
    }
}
