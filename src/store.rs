//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Task;

/// Shared state: the last successfully fetched task collection.
///
/// The collection is only ever replaced wholesale (after a list fetch) or
/// cleared (on logout) -- never patched in place.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered collection with a fresh fetch result.
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Drop the collection, e.g. when the session ends.
pub fn store_clear_tasks(store: &AppStore) {
    store.tasks().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            completed: false,
        }
    }

    #[test]
    fn collection_is_replaced_wholesale() {
        let store = Store::new(AppState::default());
        assert!(store.tasks().get().is_empty());

        store_replace_tasks(&store, vec![make_task("a1", "Buy milk")]);
        assert_eq!(store.tasks().get().len(), 1);

        // A fresh fetch result replaces everything, it never merges.
        store_replace_tasks(
            &store,
            vec![make_task("b2", "Call mom"), make_task("c3", "Water plants")],
        );
        let tasks = store.tasks().get();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "b2");
        assert_eq!(tasks[1].id, "c3");
    }

    #[test]
    fn clear_empties_the_collection() {
        let store = Store::new(AppState::default());
        store_replace_tasks(&store, vec![make_task("a1", "Buy milk")]);

        store_clear_tasks(&store);
        assert!(store.tasks().get().is_empty());
    }
}
