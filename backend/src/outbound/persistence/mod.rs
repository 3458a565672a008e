//! Storage adapters implementing [`UserRepository`](crate::domain::ports::UserRepository).
//!
//! - [`InMemoryUserRepository`]: process-local, the default.
//! - [`JsonFileUserRepository`]: a JSON document rewritten atomically after
//!   each mutation.
//!
//! Both keep a [`UserCollection`](crate::domain::UserCollection) behind a
//! `tokio::sync::RwLock` and contain no list logic of their own.

mod atomic_io;
mod in_memory_user_repository;
mod json_file_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use json_file_user_repository::JsonFileUserRepository;
