//! Merge server-acknowledged changes into the local list
//!
//! Both functions match by identifier and leave every other entry alone. An
//! identifier that is not in the list (the record moved to another page) is a
//! no-op.

use todo_core::Todo;

/// Replace the entry matching `seen` with `seen` plus a flipped completion flag
///
/// `seen` is the record as the caller last rendered it; the toggle does not
/// wait for a refetch.
pub fn apply_toggle(todos: &mut [Todo], seen: &Todo) -> bool {
    match todos.iter_mut().find(|t| t.id == seen.id) {
        Some(slot) => {
            *slot = seen.toggled();
            true
        }
        None => false,
    }
}

/// Replace the entry with the same id by the server's copy
pub fn merge_acknowledged(todos: &mut [Todo], acknowledged: &Todo) -> bool {
    match todos.iter_mut().find(|t| t.id == acknowledged.id) {
        Some(slot) => {
            *slot = acknowledged.clone();
            true
        }
        None => false,
    }
}
