pub mod todo;
pub mod user;

pub use todo::{Todo, TodoChanges};
pub use user::User;
