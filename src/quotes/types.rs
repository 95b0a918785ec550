use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Body of a successful `GET /quote/random`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    /// The persisted list is empty, so there is no index to draw.
    #[error("no quotes persisted under '{key}'")]
    EmptyCorpus { key: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
