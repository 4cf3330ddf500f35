pub mod config_ops;
pub mod detect_ops;
pub mod dict_ops;
pub mod romanize_ops;
pub mod tokenize_ops;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use roma_core::detect::DetectError;
use roma_core::dict::DictError;
use roma_core::settings::SettingsError;
use roma_core::tokenizer::{default_tokenizer, Tokenizer, TokenizerBuilder, TokenizerError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error(transparent)]
    Detect(#[from] DetectError),
    #[error(transparent)]
    Dict(#[from] DictError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Where the tokenizer dictionary comes from, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct DictOptions {
    pub dict: Option<String>,
    pub binary_dict: Option<String>,
    pub conn: Option<String>,
}

impl DictOptions {
    /// A binary dictionary wins over a CSV one when both are given.
    pub fn builder(&self) -> TokenizerBuilder {
        let mut builder = TokenizerBuilder::default();
        if let Some(path) = &self.dict {
            builder = builder.dictionary_path(path);
        }
        if let Some(path) = &self.binary_dict {
            builder = builder.binary_dictionary_path(path);
        }
        if let Some(path) = &self.conn {
            builder = builder.connection_path(path);
        }
        builder
    }

    /// The lattice tokenizer when any path is given, otherwise
    /// [`default_tokenizer`].
    pub fn tokenizer(&self) -> Result<Arc<dyn Tokenizer>, TokenizerError> {
        if self.dict.is_none() && self.binary_dict.is_none() && self.conn.is_none() {
            debug!("no dictionary paths, using the default tokenizer");
            return default_tokenizer();
        }
        debug!(
            dict = ?self.dict,
            binary_dict = ?self.binary_dict,
            conn = ?self.conn,
            "building lattice tokenizer"
        );
        Ok(Arc::new(self.builder().build()?))
    }
}

/// Install custom settings from a TOML file. Must run before anything
/// reads the settings.
pub fn apply_settings(path: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(path).map_err(io_error(path))?;
    roma_core::settings::init_custom(content)?;
    debug!(path = %path.display(), "custom settings installed");
    Ok(())
}
