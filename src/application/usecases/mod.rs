pub mod create_todo;
pub mod create_user;
pub mod delete_todo;
pub mod get_user;
pub mod list_todos;
pub mod mark_todo_done;
pub mod update_todo;
pub mod upgrade_to_pro;
