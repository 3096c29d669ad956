pub mod message;
pub mod todo;
