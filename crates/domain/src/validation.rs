// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::collections::HashSet;
use std::hash::Hash;

/// Validates that every item in a collection has a distinct natural key.
///
/// Keyed collections (configuration by key, usage metrics by metric key,
/// facet selections by category key, ...) rely on this invariant; the
/// reducers maintain it and state loading checks it.
///
/// # Arguments
///
/// * `collection` - Name of the collection, used in the error
/// * `items` - The collection to check
/// * `key` - Extracts the natural key of an item
///
/// # Errors
///
/// Returns `DomainError::DuplicateKey` naming the first repeated key.
pub fn validate_unique_keys<T, K, F>(
    collection: &'static str,
    items: &[T],
    key: F,
) -> Result<(), DomainError>
where
    K: Eq + Hash + ToString + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut seen: HashSet<&K> = HashSet::with_capacity(items.len());
    for item in items {
        let item_key: &K = key(item);
        if !seen.insert(item_key) {
            return Err(DomainError::DuplicateKey {
                collection,
                key: item_key.to_string(),
            });
        }
    }
    Ok(())
}

/// Validates that an explicit ordering names each id at most once.
///
/// Ids in the ordering that the collection does not hold are tolerated
/// (they are skipped when the ordering is applied), but repeating an id
/// would make the resulting position ambiguous.
///
/// # Errors
///
/// Returns `DomainError::InvalidOrdering` if an id is repeated.
pub fn validate_ordering<K>(collection: &'static str, ordering: &[K]) -> Result<(), DomainError>
where
    K: Eq + Hash + std::fmt::Display,
{
    let mut seen: HashSet<&K> = HashSet::with_capacity(ordering.len());
    for id in ordering {
        if !seen.insert(id) {
            return Err(DomainError::InvalidOrdering {
                collection,
                reason: format!("'{id}' appears more than once"),
            });
        }
    }
    Ok(())
}
