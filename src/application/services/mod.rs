//! Business logic services.

pub mod link_service;

pub use link_service::LinkService;
