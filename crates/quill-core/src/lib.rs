//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the post entity, its validation rules, the repository
//! ports and the post resource service. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
