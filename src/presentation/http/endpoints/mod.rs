pub mod health;
pub mod root;
pub mod todos;
pub mod users;

pub use health::HealthEndpoints;
pub use root::ApiState;
pub use todos::TodosEndpoints;
pub use users::UsersEndpoints;
