//! Todo List Store
//!
//! Owns the authoritative in-memory todo collection and all mutation
//! logic. Pure (no web APIs), so it builds and tests on the native host.

use crate::models::Todo;

/// Rejection reasons for creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// Title was empty (or whitespace-only) after trimming
    EmptyTitle,
}

impl std::fmt::Display for AddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddError::EmptyTitle => write!(f, "Todo cannot be empty"),
        }
    }
}

impl std::error::Error for AddError {}

/// Ordered todo collection with a monotonic id counter
///
/// Insertion order is display order. Ids are never reused within one
/// collection: the counter only moves forward, and `replace_all`
/// re-seeds it past the largest installed id.
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Current collection in display order
    pub fn todos(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new todo with a fresh id, `completed = false`.
    ///
    /// The title is trimmed first; an empty result is rejected without
    /// mutating the collection. Returns the new todo's id.
    pub fn add(&mut self, title: &str) -> Result<u64, AddError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AddError::EmptyTitle);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Todo {
            id,
            title: title.to_string(),
            completed: false,
        });
        Ok(id)
    }

    /// Flip the `completed` flag of the matching todo.
    ///
    /// Builds a new collection rather than mutating the row in place;
    /// order and all other todos are carried over unchanged. Unknown
    /// ids are a silent no-op.
    pub fn toggle(&mut self, id: u64) {
        self.items = self
            .items
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        completed: !todo.completed,
                        ..todo.clone()
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();
    }

    /// Remove the matching todo, preserving the order of the rest.
    /// Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|todo| todo.id != id);
    }

    /// Discard the current collection and install `items` verbatim.
    ///
    /// Used by both the restore-from-storage and seed-fetch paths. The
    /// id counter jumps past the largest installed id so later creates
    /// cannot collide with restored rows.
    pub fn replace_all(&mut self, items: Vec<Todo>) {
        let max_id = items.iter().map(|todo| todo.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.items = items;
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn add_appends_uncompleted_with_fresh_id() {
        let mut list = TodoList::new();
        let a = list.add("Buy milk").unwrap();
        let b = list.add("Walk dog").unwrap();

        assert_eq!(list.len(), 2);
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(list.todos()[0].title, "Buy milk");
        assert!(!list.todos()[0].completed);
        assert_eq!(list.todos()[1].title, "Walk dog");
    }

    #[test]
    fn add_trims_whitespace() {
        let mut list = TodoList::new();
        list.add("  Buy milk  ").unwrap();
        assert_eq!(list.todos()[0].title, "Buy milk");
    }

    #[test]
    fn add_rejects_empty_and_whitespace_titles() {
        let mut list = TodoList::new();
        list.add("Keep me").unwrap();
        let before = list.todos().to_vec();

        assert_eq!(list.add(""), Err(AddError::EmptyTitle));
        assert_eq!(list.add("   "), Err(AddError::EmptyTitle));
        assert_eq!(list.todos(), &before[..]);
    }

    #[test]
    fn toggle_flips_only_the_matching_todo() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            make_todo(1, "A", false),
            make_todo(2, "B", false),
            make_todo(3, "C", true),
        ]);

        list.toggle(2);

        assert_eq!(list.len(), 3);
        assert!(!list.todos()[0].completed);
        assert!(list.todos()[1].completed);
        assert!(list.todos()[2].completed);
        assert_eq!(
            list.todos().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut list = TodoList::new();
        list.add("A").unwrap();
        let before = list.todos().to_vec();

        list.toggle(1);
        list.toggle(1);

        assert_eq!(list.todos(), &before[..]);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut list = TodoList::new();
        list.add("A").unwrap();
        let before = list.todos().to_vec();

        list.toggle(999);

        assert_eq!(list.todos(), &before[..]);
    }

    #[test]
    fn remove_deletes_one_and_keeps_order() {
        let mut list = TodoList::new();
        list.replace_all(vec![
            make_todo(1, "A", false),
            make_todo(2, "B", true),
            make_todo(3, "C", false),
        ]);

        list.remove(2);

        assert_eq!(
            list.todos().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(list.todos()[0].title, "A");
        assert_eq!(list.todos()[1].title, "C");
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut list = TodoList::new();
        list.add("A").unwrap();

        list.remove(42);

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut list = TodoList::new();
        list.add("Existing").unwrap();
        let before = list.todos().to_vec();

        let id = list.add("Buy milk").unwrap();
        list.remove(id);

        assert_eq!(list.todos(), &before[..]);
    }

    #[test]
    fn replace_all_installs_verbatim() {
        let mut list = TodoList::new();
        list.add("Old").unwrap();

        let seed = vec![
            make_todo(7, "Seeded A", true),
            make_todo(3, "Seeded B", false),
        ];
        list.replace_all(seed.clone());

        assert_eq!(list.todos(), &seed[..]);
    }

    #[test]
    fn ids_stay_unique_after_replace_all() {
        let mut list = TodoList::new();
        list.replace_all(vec![make_todo(10, "A", false), make_todo(4, "B", false)]);

        let id = list.add("C").unwrap();

        assert!(id > 10);
        let mut ids: Vec<_> = list.todos().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn replace_all_with_empty_keeps_counter_moving_forward() {
        let mut list = TodoList::new();
        let first = list.add("A").unwrap();
        list.replace_all(Vec::new());

        let second = list.add("B").unwrap();

        assert!(second > first);
    }
}
