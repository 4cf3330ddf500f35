//! Non-fatal faults raised while romanizing.
//!
//! Romanization always returns a string. Anything that made the result
//! worse than it could have been is reported to a [`FaultSink`].

use tracing::warn;

use crate::tokenizer::TokenizerError;

#[derive(Debug, thiserror::Error)]
pub enum Fault {
    #[error("tokenizer unavailable: {0}")]
    TokenizerUnavailable(#[source] TokenizerError),
    #[error("no reading for known word {surface:?}")]
    ReadingLookup { surface: String },
}

/// Receives faults. Implementations must tolerate concurrent calls.
pub trait FaultSink: Send + Sync {
    fn report(&self, fault: &Fault);
}

impl<F> FaultSink for F
where
    F: Fn(&Fault) + Send + Sync,
{
    fn report(&self, fault: &Fault) {
        self(fault)
    }
}

/// Logs every fault as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FaultSink for TracingSink {
    fn report(&self, fault: &Fault) {
        match fault {
            Fault::TokenizerUnavailable(err) => {
                warn!(error = %err, "tokenizer unavailable, skipping reading expansion")
            }
            Fault::ReadingLookup { surface } => {
                warn!(surface = %surface, "reading lookup failed")
            }
        }
    }
}
