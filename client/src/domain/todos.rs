//! Group todo lists.

use chrono::{DateTime, Utc};
use pagination::Paginated;
use serde::Deserialize;

use super::actor::Actor;

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Opaque identifier.
    pub id: String,
    /// Short description.
    pub title: String,
    /// `true` once done.
    pub status: bool,
    /// Deadline, when set.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Actor responsible for the todo.
    #[serde(default)]
    pub assigned_to: Option<Actor>,
}

impl Todo {
    /// Whether the todo is still open and its due date has passed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.status && self.due_date.is_some_and(|due| due < now)
    }
}

/// A group's todo list and one page of its items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoList {
    /// Opaque identifier.
    pub id: String,
    /// List title.
    pub title: String,
    /// Page of todos.
    #[serde(default)]
    pub todos: Paginated<Todo>,
    /// Group owning the list.
    #[serde(default)]
    pub actor: Option<Actor>,
}

impl TodoList {
    /// Number of completed items on the loaded page.
    #[must_use]
    pub fn completed_on_page(&self) -> usize {
        self.todos.iter().filter(|todo| todo.status).count()
    }
}

#[cfg(test)]
mod tests {
    //! Todo decoding and derived state.

    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn decodes_list_with_paginated_todos() {
        let list: TodoList = serde_json::from_value(json!({
            "id": "3",
            "title": "Picnic prep",
            "todos": {
                "total": 5,
                "elements": [
                    { "id": "a", "title": "Bread", "status": true },
                    { "id": "b", "title": "Cheese", "status": false,
                      "dueDate": "2026-05-30T12:00:00Z",
                      "assignedTo": { "id": "1", "preferredUsername": "alice" } }
                ]
            },
            "actor": { "id": "9", "preferredUsername": "hikers" }
        }))
        .expect("todo list should decode");

        assert_eq!(list.todos.total(), 5);
        assert_eq!(list.completed_on_page(), 1);
    }

    #[test]
    fn overdue_requires_open_item_past_due() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).single().expect("valid date");
        let due = Utc.with_ymd_and_hms(2026, 5, 30, 0, 0, 0).single().expect("valid date");
        let mut todo = Todo {
            id: "b".to_owned(),
            title: "Cheese".to_owned(),
            status: false,
            due_date: Some(due),
            assigned_to: None,
        };
        assert!(todo.is_overdue(now));
        todo.status = true;
        assert!(!todo.is_overdue(now));
        todo.status = false;
        todo.due_date = None;
        assert!(!todo.is_overdue(now));
    }
}
