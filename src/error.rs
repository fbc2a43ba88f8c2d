use starknet::core::utils::NonAsciiNameError;
use thiserror::Error;

/// Error that can occur while producing the selector report.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The selector could not be derived from the event name.
    #[error("failed to derive selector for {name:?}")]
    Derivation {
        name: String,
        #[source]
        source: NonAsciiNameError,
    },
    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
