//! Repository traits abstracting data access from business logic.

pub mod link_repository;

pub use link_repository::{InsertError, LinkRepository, StoreError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
