//! Copy-on-write publication of the availability index.
//!
//! Readers take an `Arc` snapshot and query it without holding any lock. A
//! reload builds a complete new index first and only then swaps the pointer,
//! so a reader sees either the old dataset or the new one, never a mix.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tablebook_core::error::CoreError;
use tablebook_hours::parse::PeriodParser;

use crate::error::ServiceResult;
use crate::index::AvailabilityIndex;

#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<AvailabilityIndex>>,
}

impl SharedIndex {
    #[must_use]
    pub fn new(index: AvailabilityIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// ## Summary
    /// Returns the currently published index.
    ///
    /// ## Errors
    /// Returns an invariant violation if a writer panicked while publishing.
    pub fn snapshot(&self) -> ServiceResult<Arc<AvailabilityIndex>> {
        let guard = self
            .current
            .read()
            .map_err(|_e| CoreError::InvariantViolation("availability index lock poisoned"))?;
        Ok(Arc::clone(&guard))
    }

    /// ## Summary
    /// Publishes a prebuilt index, replacing the current one.
    ///
    /// ## Errors
    /// Returns an invariant violation if the lock is poisoned.
    pub fn publish(&self, index: AvailabilityIndex) -> ServiceResult<()> {
        let next = Arc::new(index);
        let mut guard = self
            .current
            .write()
            .map_err(|_e| CoreError::InvariantViolation("availability index lock poisoned"))?;
        *guard = next;
        Ok(())
    }

    /// ## Summary
    /// Loads the dataset at `path` into a new index and publishes it,
    /// returning the number of venues loaded.
    ///
    /// ## Errors
    /// Any load error; the previously published index stays in place.
    pub fn reload_path(&self, path: &Path, parser: &PeriodParser) -> ServiceResult<usize> {
        let index = AvailabilityIndex::from_path(path, parser)?;
        let venues = index.len();
        self.publish(index)?;

        tracing::info!(path = %path.display(), venues, "Published availability index");
        Ok(venues)
    }
}
