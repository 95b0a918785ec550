//! Random Quote Selection
//!
//! Every pick reads the list length from the store, so selection stays correct
//! even if another instance re-seeds the list while this one is serving.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use super::types::QuoteError;
use crate::store::ListStore;

pub struct QuoteSelector {
    store: Arc<dyn ListStore>,
    key: String,
    rng: Mutex<StdRng>,
}

impl QuoteSelector {
    /// Selector whose generator is seeded once from the current time.
    pub fn new(store: Arc<dyn ListStore>, key: &str) -> Self {
        Self::with_rng(store, key, StdRng::seed_from_u64(time_seed()))
    }

    pub fn with_rng(store: Arc<dyn ListStore>, key: &str, rng: StdRng) -> Self {
        Self {
            store,
            key: key.to_string(),
            rng: Mutex::new(rng),
        }
    }

    /// Returns a uniformly chosen entry of the persisted list.
    ///
    /// # Errors
    /// * `QuoteError::EmptyCorpus` if the store reports an empty list.
    /// * `QuoteError::Store` if either store command fails.
    pub async fn pick_random(&self) -> Result<String, QuoteError> {
        let count = self.store.len(&self.key).await?;
        if count == 0 {
            return Err(QuoteError::EmptyCorpus {
                key: self.key.clone(),
            });
        }

        let index = self.next_index(count);
        Ok(self.store.read_at(&self.key, index).await?)
    }

    // `count` must be nonzero.
    fn next_index(&self, count: usize) -> usize {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..count)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| fold_nanos(d.as_nanos()))
        .unwrap_or_default()
}

// Folds the high half into the low half so no bits of the timestamp are dropped.
fn fold_nanos(nanos: u128) -> u64 {
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
