use atrium_ordering::OrderingError;
use atrium_traits::render::RenderError;
use atrium_traits::store::StoreError;
use thiserror::Error;

/// Top-level error for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Ordering(#[from] OrderingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
