pub mod errors;
pub mod guards;
pub mod models;
pub mod repositories;
pub mod value_objects;
