//! Error types for the award engine.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AwardError {
    /// Input did not name one of the known award kinds.
    #[error("unknown award kind: {0}")] InvalidKind(String),
}
