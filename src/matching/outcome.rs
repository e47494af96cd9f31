use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MatchedPair;

/// A stored match outcome.
///
/// `NotFound` is a confirmed negative result, distinct from the key being
/// absent from the store; absence means the fingerprint has not been
/// evaluated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CachedOutcome {
    Found { pair: MatchedPair },
    NotFound,
}

/// Decode failure on a stored value. Only this codec writes to the store, so
/// hitting this in operation signals backend corruption.
#[derive(Debug, Error)]
#[error("corrupt cache entry: {source}")]
pub struct CorruptEntry {
    #[from]
    source: serde_json::Error,
}

impl CachedOutcome {
    pub fn from_pair(pair: Option<MatchedPair>) -> Self {
        match pair {
            Some(pair) => Self::Found { pair },
            None => Self::NotFound,
        }
    }

    pub fn pair(&self) -> Option<&MatchedPair> {
        match self {
            Self::Found { pair } => Some(pair),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CorruptEntry> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
