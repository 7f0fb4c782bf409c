use thiserror::Error;

/// Failure kinds surfaced to the session and suggestion state.
///
/// Adapters report detailed `anyhow` errors; these are what remains after the
/// effect handler has logged the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("nothing to send")]
    EmptyInput,
    #[error("a question is already on its way")]
    AlreadySubmitting,
    #[error("keyword catalog unavailable")]
    CatalogUnavailable,
    #[error("assistant backend unavailable")]
    BackendUnavailable,
}
