use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::detect::{DetectError, LanguageModel};
use crate::tokenizer::{Tokenizer, TokenizerError};

/// Builds the tokenizer on first use. The only fallible step of the pipeline.
pub type TokenizerFactory =
    Box<dyn Fn() -> Result<Arc<dyn Tokenizer>, TokenizerError> + Send + Sync>;

/// Lazily constructed tokenizer handle.
///
/// The fast path is a lock-free `OnceLock` read. The slow path takes `init`,
/// re-checks, and only then runs the factory, so at most one construction
/// succeeds. A failed construction publishes nothing and the next caller
/// tries again.
pub(crate) struct TokenizerCell {
    handle: OnceLock<Arc<dyn Tokenizer>>,
    init: Mutex<()>,
    factory: TokenizerFactory,
}

impl TokenizerCell {
    pub fn new(factory: TokenizerFactory) -> Self {
        Self {
            handle: OnceLock::new(),
            init: Mutex::new(()),
            factory,
        }
    }

    pub fn get(&self) -> Result<Arc<dyn Tokenizer>, TokenizerError> {
        if let Some(handle) = self.handle.get() {
            return Ok(Arc::clone(handle));
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = self.handle.get() {
            return Ok(Arc::clone(handle));
        }
        let handle = (self.factory)()?;
        debug!("tokenizer constructed");
        Ok(Arc::clone(self.handle.get_or_init(|| handle)))
    }

    pub fn is_ready(&self) -> bool {
        self.handle.get().is_some()
    }
}

/// Language model loaded from the first language set that builds.
pub(crate) struct ProfileGate {
    model: OnceLock<Arc<LanguageModel>>,
    init: Mutex<()>,
}

impl ProfileGate {
    pub fn new() -> Self {
        Self {
            model: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Returns the shared model, loading it from `profiles` if this is the
    /// first successful call. Later calls ignore `profiles`.
    pub fn get(&self, profiles: &[String]) -> Result<Arc<LanguageModel>, DetectError> {
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = self.model.get() {
            return Ok(Arc::clone(model));
        }
        let model = Arc::new(LanguageModel::from_profiles(profiles)?);
        Ok(Arc::clone(self.model.get_or_init(|| model)))
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}
