//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod persistence;
