use std::fs;

pub fn settings_export() {
    print!("{}", roma_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        roma_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: tokenizer.unknown_word_cost={}, detector.target_language={}, detector.min_relative_distance={}",
        s.tokenizer.unknown_word_cost, s.detector.target_language, s.detector.min_relative_distance
    );
}
