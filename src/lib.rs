//! TodoMVC core: a single todo list driven by command and query messages.
//!
//! Front ends build [`domain::message::Message`] values and pass them to a
//! [`usecase::dispatch::MessageHandler`], which works on any
//! [`repo::TodoRepository`].

pub mod domain;
pub mod repo;
pub mod usecase;
