// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use futures::future::{BoxFuture, try_join_all};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::ports::LookupError;

/// A pending batch lookup.
pub type LookupFuture<'a, T> = BoxFuture<'a, Result<Vec<T>, LookupError>>;

/// Runs several batch lookups concurrently and merges their records by key.
///
/// All lookups are awaited together; the first failure fails the whole call.
/// Records are merged in the order their key was first seen. When two
/// lookups return a record with the same key, the later record replaces the
/// earlier one in place.
///
/// # Arguments
///
/// * `lookups` - The batch lookups to run
/// * `key` - Extracts the merge key from a record
///
/// # Errors
///
/// Returns the first lookup error encountered.
pub async fn resolve_by_keys<'a, T, K, F>(
    lookups: Vec<LookupFuture<'a, T>>,
    key: F,
) -> Result<Vec<T>, LookupError>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let batches: Vec<Vec<T>> = try_join_all(lookups).await?;

    let mut order: Vec<K> = Vec::new();
    let mut merged: HashMap<K, T> = HashMap::new();
    for record in batches.into_iter().flatten() {
        let record_key: K = key(&record);
        if merged.insert(record_key.clone(), record).is_none() {
            order.push(record_key);
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|record_key| merged.remove(&record_key))
        .collect())
}

/// The outcome of resolving one category of identifier inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved identifiers, deduplicated, in first-resolution order.
    pub resolved_ids: Vec<i64>,
    /// Normalized inputs that matched no record, in input order.
    pub missing_inputs: Vec<String>,
}

impl Resolution {
    /// Returns whether every input resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_inputs.is_empty()
    }
}

/// Accumulates per-input match results into a `Resolution`.
#[derive(Debug, Default)]
pub struct ResolutionBuilder {
    seen: HashSet<i64>,
    resolution: Resolution,
}

impl ResolutionBuilder {
    /// Records the identifiers one input matched.
    ///
    /// An input with no matches is reported missing.
    pub fn record<I>(&mut self, input: &str, matches: I)
    where
        I: IntoIterator<Item = i64>,
    {
        let mut matched: bool = false;
        for id in matches {
            matched = true;
            if self.seen.insert(id) {
                self.resolution.resolved_ids.push(id);
            }
        }
        if !matched {
            self.resolution.missing_inputs.push(input.to_string());
        }
    }

    #[must_use]
    pub fn finish(self) -> Resolution {
        self.resolution
    }
}

/// Returns the distinct values of `values`, in first-seen order.
#[must_use]
pub fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T> = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
