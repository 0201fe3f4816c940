// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keyed list operations shared by the operation reducers.
//!
//! Lists in document state keep insertion order; replacing an element never
//! moves it.

use resource_services_domain::Oid;

/// Replaces the element with the same key as `item`, or appends it.
///
/// Returns true if an existing element was replaced.
pub fn upsert_by<T, K, F>(items: &mut Vec<T>, item: T, key: F) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let position: Option<usize> = items.iter().position(|existing| key(existing) == key(&item));
    match position {
        Some(index) => {
            items[index] = item;
            true
        }
        None => {
            items.push(item);
            false
        }
    }
}

/// Removes the first element matching `predicate`, returning it.
pub fn remove_by<T, F>(items: &mut Vec<T>, predicate: F) -> Option<T>
where
    F: Fn(&T) -> bool,
{
    let index: usize = items.iter().position(predicate)?;
    Some(items.remove(index))
}

/// Moves the listed ids to the front in the given order.
///
/// Elements not named in `ordering` keep their relative order after the
/// listed ones; ids that match nothing are skipped. Every element's display
/// order is then set to its new position.
pub fn reorder_by<T, F, S>(items: &mut Vec<T>, ordering: &[Oid], id: F, mut set_order: S)
where
    F: Fn(&T) -> &Oid,
    S: FnMut(&mut T, i64),
{
    let mut remaining: Vec<T> = std::mem::take(items);
    for wanted in ordering {
        if let Some(item) = remove_by(&mut remaining, |candidate| id(candidate) == wanted) {
            items.push(item);
        }
    }
    items.append(&mut remaining);
    for (position, item) in (0_i64..).zip(items.iter_mut()) {
        set_order(item, position);
    }
}

/// Returns the number of elements as a display order value.
#[must_use]
pub fn next_display_order<T>(items: &[T]) -> i64 {
    i64::try_from(items.len()).unwrap_or(i64::MAX)
}
