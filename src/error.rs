use thiserror::Error;

/// Top-level error type for the Panelis cut-layout kernel.
///
/// The engine degrades malformed-but-structurally-valid graph input to
/// empty/zero results instead of failing, so errors only surface at the
/// store boundary: contract violations on entity creation and lookups of
/// ids that no longer resolve.
#[derive(Debug, Error)]
pub enum PanelisError {
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors related to the layout graph and its store.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("degenerate edge: start and end reference the same node")]
    DegenerateEdge,
}

/// Convenience type alias for results using [`PanelisError`].
pub type Result<T> = std::result::Result<T, PanelisError>;
