use thiserror::Error;

/// Reasons the bulk dispatcher refuses to start. Raised before any send is attempted.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A batch size of zero would never make progress.
    #[error("Dispatch batch size must be at least 1")]
    ZeroBatchSize,
}
