// 🔍 Selection - filter and in-place map over ordered sequences
//
// select:     new Vec with the items a predicate accepts, order preserved
// apply_each: run a mutation once per shared handle, in order, no new Vec

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Shared-ownership handle to a record.
///
/// Mutations applied through one handle are visible through every clone of it.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap owned records into shared handles (same order)
pub fn share<T>(items: Vec<T>) -> Vec<Shared<T>> {
    items.into_iter().map(|item| Rc::new(RefCell::new(item))).collect()
}

// ============================================================================
// SELECTOR
// ============================================================================

/// Keep the items for which `predicate` returns true.
///
/// The input is left untouched; matching items are cloned into the result in
/// their original relative order.
pub fn select<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let selected: Vec<T> = items.iter().filter(|item| predicate(item)).cloned().collect();

    debug!(input = items.len(), selected = selected.len(), "select");
    selected
}

// ============================================================================
// MUTATOR-APPLIER
// ============================================================================

/// Apply `mutation` once to every record behind `handles`, in sequence order.
///
/// # Panics
///
/// Each handle is mutably borrowed while `mutation` runs on it, so the
/// closure must not borrow that same record through another handle.
pub fn apply_each<T, F>(handles: &[Shared<T>], mut mutation: F)
where
    F: FnMut(&mut T),
{
    for handle in handles {
        mutation(&mut *handle.borrow_mut());
    }

    debug!(count = handles.len(), "apply_each");
}

// ============================================================================
// TESTS
// ============================================================================
