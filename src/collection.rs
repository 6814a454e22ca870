//! Collection Reconciliation
//!
//! Local collections mirror server state and change only after the server
//! acknowledges a mutation. Entities are replaced whole, keyed by their
//! server-assigned identifier.

use crate::models::{Project, Task};

/// Entities addressable by their server-assigned identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Task {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Project {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Add a confirmed entity. If the id is somehow already present the existing
/// row is replaced, so an entity never appears twice.
pub fn append<T: Keyed>(items: &mut Vec<T>, entity: T) {
    match items.iter_mut().find(|e| e.key() == entity.key()) {
        Some(slot) => *slot = entity,
        None => items.push(entity),
    }
}

/// Replace an entity in place, preserving its position. Absent id is a no-op.
pub fn replace<T: Keyed>(items: &mut Vec<T>, entity: T) {
    if let Some(slot) = items.iter_mut().find(|e| e.key() == entity.key()) {
        *slot = entity;
    }
}

/// Remove an entity by id. Removing an id that is not present is a no-op.
pub fn remove<T: Keyed>(items: &mut Vec<T>, id: &str) {
    items.retain(|e| e.key() != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn append_adds_entity_exactly_once() {
        let mut items = vec![row("a", 1), row("b", 2)];
        append(&mut items, row("c", 3));
        assert_eq!(items.len(), 3);

        // A duplicate id replaces instead of doubling up.
        append(&mut items, row("c", 4));
        assert_eq!(items.iter().filter(|r| r.id == "c").count(), 1);
        assert_eq!(items[2].value, 4);
    }

    #[test]
    fn replace_preserves_position() {
        let mut items = vec![row("a", 1), row("b", 2), row("c", 3)];
        replace(&mut items, row("b", 20));
        assert_eq!(items[1], row("b", 20));
        assert_eq!(items[0], row("a", 1));
        assert_eq!(items[2], row("c", 3));
    }

    #[test]
    fn replace_of_absent_id_changes_nothing() {
        let mut items = vec![row("a", 1)];
        replace(&mut items, row("x", 9));
        assert_eq!(items, vec![row("a", 1)]);
    }

    #[test]
    fn remove_leaves_no_trace() {
        let mut items = vec![row("a", 1), row("b", 2)];
        remove(&mut items, "a");
        assert!(items.iter().all(|r| r.id != "a"));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn remove_of_absent_id_is_a_silent_no_op() {
        let mut items = vec![row("a", 1), row("b", 2)];
        remove(&mut items, "z");
        assert_eq!(items.len(), 2);
    }
}
