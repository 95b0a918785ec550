//! Startup Reconciliation
//!
//! Makes the persisted list mirror the compiled-in corpus before any request is served.
//! Instances share the list, so a restart after a crash mid-seed, or a deploy that
//! changed the corpus size, leaves a list of the wrong length behind; that state is
//! wiped and rewritten. A list of the right length is trusted as-is: contents are
//! never compared.

use crate::store::{ListStore, StoreError};

/// What `seed` did to the persisted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The list already had one entry per quote; nothing was written.
    AlreadySeeded { count: usize },
    /// The list was (re)written. `cleared` is the stale length that was deleted first, if any.
    Seeded {
        cleared: Option<usize>,
        inserted: usize,
    },
}

/// Reconciles the list under `key` with `corpus`.
///
/// # Errors
/// Any store failure is returned unchanged. Callers treat it as fatal.
pub async fn seed(
    store: &dyn ListStore,
    key: &str,
    corpus: &[&str],
) -> Result<SeedOutcome, StoreError> {
    tracing::info!("Checking persisted quotes under '{}'...", key);
    let existing = store.len(key).await?;

    if existing == corpus.len() {
        tracing::info!("All {} quotes are already persisted", existing);
        return Ok(SeedOutcome::AlreadySeeded { count: existing });
    }

    let cleared = if existing > 0 {
        tracing::warn!(
            "Persisted list has {} quotes instead of {}, clearing it first",
            existing,
            corpus.len()
        );
        store.delete(key).await?;
        Some(existing)
    } else {
        None
    };

    tracing::info!("Inserting {} quotes...", corpus.len());
    let inserted = store.append_all(key, corpus).await?;

    if inserted == corpus.len() {
        tracing::info!("Inserted {}/{} quotes", inserted, corpus.len());
    } else {
        // Someone else wrote to the key between our delete and append.
        tracing::warn!(
            "Inserted {}/{} quotes, list length does not match the corpus",
            inserted,
            corpus.len()
        );
    }

    Ok(SeedOutcome::Seeded { cleared, inserted })
}
