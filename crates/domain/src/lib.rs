//! jira-auth Domain - Core authentication types
//!
//! This crate defines the domain model for the JIRA authentication adapter.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod settings;

pub use auth::{AuthResult, Identity, IdentityAttributes};
pub use error::{DomainError, DomainResult};
pub use settings::ClientSettings;
