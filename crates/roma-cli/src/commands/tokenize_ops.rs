use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use roma_core::tokenizer::Token;

use super::DictOptions;

#[derive(Debug, Serialize)]
struct TokenRow {
    surface: String,
    known: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading: Option<String>,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            surface: token.surface.clone(),
            known: token.known,
            reading: token.reading().ok().map(str::to_string),
        }
    }
}

pub fn tokenize_cmd(text: &str, dict: &DictOptions, json: bool) {
    let tokenizer = die!(dict.tokenizer(), "Error loading tokenizer: {}");
    let rows: Vec<TokenRow> = tokenizer.tokenize(text).iter().map(TokenRow::from).collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_table(&rows));
    }
}

/// Display a whitespace token so the table stays readable.
fn visible(surface: &str) -> String {
    surface
        .chars()
        .map(|c| match c {
            ' ' => '␣',
            '\n' => '↵',
            '\t' => '⇥',
            c => c,
        })
        .collect()
}

/// Pad `s` to `width` terminal columns. CJK glyphs take two columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

fn format_table(rows: &[TokenRow]) -> String {
    let surfaces: Vec<String> = rows.iter().map(|r| visible(&r.surface)).collect();
    let width = surfaces
        .iter()
        .map(|s| UnicodeWidthStr::width(s.as_str()))
        .chain(std::iter::once("surface".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}  known  reading\n", pad("surface", width));
    for (row, surface) in rows.iter().zip(&surfaces) {
        let known = if row.known { "yes" } else { "no" };
        let reading = row.reading.as_deref().unwrap_or("-");
        out.push_str(&format!("{}  {:<5}  {}\n", pad(surface, width), known, reading));
    }
    out
}
