use thiserror::Error;

/// Errors emitted while resolving a route identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RouteError {
    /// No screen is registered under the identifier.
    #[error("no screen matches route `{destination}`")]
    Unmatched { destination: String },
}
