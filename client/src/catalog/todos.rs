//! Group todo lists.

use serde::{Deserialize, Serialize};

use crate::domain::TodoList;

/// Variables of [`FetchTodoList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchTodoListVariables {
    /// Todo list identifier.
    pub id: String,
}

/// Data of [`FetchTodoList`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchTodoListData {
    /// The list with one page of todos.
    pub todo_list: TodoList,
}

operation! {
    query
    /// A todo list with its items.
    FetchTodoList = "FetchTodoList" {
        document: concat!(
            "query FetchTodoList($id: ID!) {\n",
            "  todoList(id: $id) {\n",
            "    id\n",
            "    title\n",
            "    todos {\n",
            "      total\n",
            "      elements {\n",
            "        id\n",
            "        title\n",
            "        status\n",
            "        dueDate\n",
            "        assignedTo { id preferredUsername domain }\n",
            "      }\n",
            "    }\n",
            "    actor { id preferredUsername domain name }\n",
            "  }\n",
            "}\n"
        ),
        variables: FetchTodoListVariables,
        data: FetchTodoListData,
    }
}
