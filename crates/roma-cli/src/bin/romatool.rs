use std::path::Path;

use clap::{Args, Parser, Subcommand};

use roma_cli::commands::{
    apply_settings, config_ops, detect_ops, dict_ops, romanize_ops, tokenize_ops, DictOptions,
};

const DEFAULT_LANGUAGES: &str = "ja,zh,ko,en";

#[derive(Parser)]
#[command(name = "romatool", about = "Lyric romanization tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DictArgs {
    /// IPADIC-style CSV dictionary (default: built-in IPADIC)
    #[arg(long)]
    dict: Option<String>,
    /// Binary dictionary written by `compile-dict`
    #[arg(long, conflicts_with = "dict")]
    binary_dict: Option<String>,
    /// MeCab matrix.def connection matrix
    #[arg(long)]
    conn: Option<String>,
}

impl From<DictArgs> for DictOptions {
    fn from(args: DictArgs) -> Self {
        Self {
            dict: args.dict,
            binary_dict: args.binary_dict,
            conn: args.conn,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Romanize text (reads stdin lines when no text is given)
    Romanize {
        text: Vec<String>,
        #[command(flatten)]
        dict: DictArgs,
        /// Comma-separated ISO 639-1 codes for language detection
        #[arg(long, value_delimiter = ',', default_value = DEFAULT_LANGUAGES)]
        languages: Vec<String>,
    },
    /// Show the tokenizer's segmentation
    Tokenize {
        text: String,
        #[command(flatten)]
        dict: DictArgs,
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Rank languages for a text
    Detect {
        text: String,
        /// Comma-separated ISO 639-1 codes to rank
        #[arg(long, value_delimiter = ',', default_value = DEFAULT_LANGUAGES)]
        languages: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Exit 0 if the text contains ideographic characters, 1 otherwise
    Ideographic { text: String },
    /// Compile a CSV dictionary to the binary format
    CompileDict {
        /// Input CSV file
        input_csv: String,
        /// Output file
        output_file: String,
    },
    /// Look up a surface in a binary dictionary
    Lookup {
        /// Binary dictionary file
        dict_file: String,
        /// Surface form
        surface: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    roma_cli::init_tracing(cli.log_json);

    if let Some(path) = &cli.settings {
        if let Err(e) = apply_settings(Path::new(path)) {
            eprintln!("Error loading settings: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Romanize {
            text,
            dict,
            languages,
        } => romanize_ops::romanize_cmd(&text, &dict.into(), &languages),
        Command::Tokenize { text, dict, json } => {
            tokenize_ops::tokenize_cmd(&text, &dict.into(), json)
        }
        Command::Detect {
            text,
            languages,
            json,
        } => detect_ops::detect_cmd(&text, &languages, json),
        Command::Ideographic { text } => romanize_ops::ideographic_cmd(&text),
        Command::CompileDict {
            input_csv,
            output_file,
        } => dict_ops::compile_dict(&input_csv, &output_file),
        Command::Lookup { dict_file, surface } => dict_ops::lookup(&dict_file, &surface),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
